//! Export command handler

use course_catalog::catalog::{Catalog, QueryParams};
use course_catalog::config::Config;
use course_catalog::export::ExportFormat;
use course_catalog::verbose;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Export every course matching `params` (unpaginated) in `format`
///
/// Without `--output` the file is written as `catalog.<ext>` under the
/// configured exports directory.
///
/// # Errors
/// Returns an error for an unknown format or when writing fails.
pub fn run(
    catalog: &Catalog,
    params: &QueryParams,
    format: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let format: ExportFormat = format.parse()?;
    let courses = catalog.filtered(params);

    let output_path = output.map_or_else(
        || default_output_path(&config.paths.exports_dir, format),
        Path::to_path_buf,
    );

    verbose!(
        "Exporting {} of {} courses as {format}",
        courses.len(),
        catalog.len()
    );
    format.exporter().export(&courses, &output_path)?;
    println!(
        "✓ Exported {} courses to {}",
        courses.len(),
        output_path.display()
    );
    Ok(())
}

fn default_output_path(exports_dir: &str, format: ExportFormat) -> PathBuf {
    let dir = if exports_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(exports_dir)
    };
    dir.join(format!("catalog.{}", format.extension()))
}
