//! Command-line interface entry point for `coursecatalog`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_catalog::catalog::{CatalogGenerator, CatalogTables};
use course_catalog::config::Config;
use course_catalog::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use course_catalog::{debug, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Config commands never need a catalog
    let command = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            return;
        }
        Command::Playlist { slug } => {
            commands::playlist::run(slug.as_deref());
            return;
        }
        other => other,
    };

    let seed = config.seed();
    debug!("Generating catalog (seed: {seed:?})");
    let catalog = CatalogGenerator::new(seed).generate(&CatalogTables::builtin());

    match command {
        Command::Courses {
            filters,
            page,
            page_size,
            format,
        } => {
            let params = filters
                .to_params(&config)
                .page(page, page_size.unwrap_or(config.catalog.page_size));
            commands::courses::run_list(&catalog, &params, format);
        }
        Command::Show { id, format } => commands::courses::run_show(&catalog, &id, format),
        Command::Categories { format } => commands::courses::run_categories(&catalog, format),
        Command::Featured { limit, format } => {
            let limit = limit.unwrap_or(config.generator.featured_limit);
            commands::courses::run_featured(&catalog, limit, format);
        }
        Command::Stats { format } => commands::courses::run_stats(&catalog, format),
        Command::Export {
            filters,
            format,
            output,
        } => {
            let params = filters.to_params(&config);
            if let Err(e) =
                commands::export::run(&catalog, &params, &format, output.as_deref(), &config)
            {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
        Command::Config { .. } | Command::Playlist { .. } => {}
    }
}
