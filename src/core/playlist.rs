//! Video playlists for the per-language course pages
//!
//! Each page is one [`Playlist`] value: an ordered list of embedded videos
//! plus learning outcomes, project ideas and external resources. The
//! built-in playlists are compiled in from `assets/playlists.toml`.

use serde::{Deserialize, Serialize};
use std::fmt;

const BUILTIN_PLAYLISTS: &str = include_str!("../assets/playlists.toml");

/// One embedded video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Display title
    pub title: String,
    /// Embeddable player URL
    pub embed_url: String,
}

impl Video {
    /// YouTube thumbnail for an `/embed/<id>` URL, `None` for other hosts
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        let (_, rest) = self.embed_url.split_once("/embed/")?;
        let id = rest.split(['?', '/']).next().filter(|id| !id.is_empty())?;
        Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
    }
}

/// An external link shown next to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Link text
    pub label: String,
    /// Target URL
    pub url: String,
}

/// A course page's video playlist and supporting material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Lookup key (e.g., "go")
    pub slug: String,
    /// Page title
    pub title: String,
    /// Introductory paragraph
    #[serde(default)]
    pub summary: String,
    /// Videos in play order
    #[serde(default)]
    pub videos: Vec<Video>,
    /// "What you will learn" bullet points
    #[serde(default)]
    pub outcomes: Vec<String>,
    /// Suggested projects
    #[serde(default)]
    pub projects: Vec<String>,
    /// External links
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Playlist {
    /// Start building a playlist
    #[must_use]
    pub fn builder(slug: impl Into<String>, title: impl Into<String>) -> PlaylistBuilder {
        PlaylistBuilder::new(slug, title)
    }

    /// Video at `index`
    #[must_use]
    pub fn video(&self, index: usize) -> Option<&Video> {
        self.videos.get(index)
    }

    /// Index after `current`, staying on the last video at the end
    #[must_use]
    pub fn next_index(&self, current: usize) -> usize {
        current
            .saturating_add(1)
            .min(self.videos.len().saturating_sub(1))
    }

    /// Index before `current`, staying on the first video at the start
    #[must_use]
    pub fn previous_index(&self, current: usize) -> usize {
        current
            .saturating_sub(1)
            .min(self.videos.len().saturating_sub(1))
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.slug)?;
        if !self.summary.is_empty() {
            writeln!(f, "\n{}", self.summary)?;
        }
        writeln!(f, "\nVideos:")?;
        for (i, video) in self.videos.iter().enumerate() {
            writeln!(f, "  {}. {} <{}>", i + 1, video.title, video.embed_url)?;
        }
        if !self.outcomes.is_empty() {
            writeln!(f, "\nWhat you will learn:")?;
            for outcome in &self.outcomes {
                writeln!(f, "  - {outcome}")?;
            }
        }
        if !self.projects.is_empty() {
            writeln!(f, "\nProjects:")?;
            for project in &self.projects {
                writeln!(f, "  - {project}")?;
            }
        }
        if !self.resources.is_empty() {
            writeln!(f, "\nResources:")?;
            for resource in &self.resources {
                writeln!(f, "  - {}: {}", resource.label, resource.url)?;
            }
        }
        Ok(())
    }
}

/// Builder for [`Playlist`]
#[derive(Debug, Clone)]
pub struct PlaylistBuilder {
    playlist: Playlist,
}

impl PlaylistBuilder {
    /// New builder with a slug and title
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            playlist: Playlist {
                slug: slug.into(),
                title: title.into(),
                summary: String::new(),
                videos: Vec::new(),
                outcomes: Vec::new(),
                projects: Vec::new(),
                resources: Vec::new(),
            },
        }
    }

    /// Set the introductory paragraph
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.playlist.summary = summary.into();
        self
    }

    /// Append a video
    #[must_use]
    pub fn video(mut self, title: impl Into<String>, embed_url: impl Into<String>) -> Self {
        self.playlist.videos.push(Video {
            title: title.into(),
            embed_url: embed_url.into(),
        });
        self
    }

    /// Append a learning outcome
    #[must_use]
    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.playlist.outcomes.push(outcome.into());
        self
    }

    /// Append a project idea
    #[must_use]
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.playlist.projects.push(project.into());
        self
    }

    /// Append an external resource
    #[must_use]
    pub fn resource(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.playlist.resources.push(Resource {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Playlist {
        self.playlist
    }
}

/// A set of playlists addressable by slug
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistLibrary {
    #[serde(default, rename = "playlist")]
    playlists: Vec<Playlist>,
}

impl PlaylistLibrary {
    /// Parse a library from TOML (`[[playlist]]` tables)
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or a playlist lacks `slug`/`title`.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Playlists compiled into the crate
    ///
    /// # Panics
    /// Panics if the compiled-in playlist file is invalid.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml(BUILTIN_PLAYLISTS).expect("Failed to parse compiled-in playlists")
    }

    /// Library holding `playlists`
    #[must_use]
    pub const fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }

    /// All playlists in file order
    #[must_use]
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Look up a playlist by slug (case-insensitive)
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Playlist> {
        self.playlists
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(slug))
    }
}
