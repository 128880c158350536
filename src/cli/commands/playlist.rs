//! Playlist command handler

use course_catalog::playlist::PlaylistLibrary;

/// List the built-in playlists, or print one by slug
pub fn run(slug: Option<&str>) {
    let library = PlaylistLibrary::builtin();

    let Some(slug) = slug else {
        for playlist in library.playlists() {
            println!(
                "{:<16} {} ({} videos)",
                playlist.slug,
                playlist.title,
                playlist.videos.len()
            );
        }
        return;
    };

    match library.find(slug) {
        Some(playlist) => print!("{playlist}"),
        None => {
            eprintln!("Playlist not found: '{slug}'");
            std::process::exit(1);
        }
    }
}
