//! Config command handler

use crate::args::ConfigSubcommand;
use course_catalog::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print one value, or the whole config with its file location
pub fn handle_config_get(config: &Config, key: Option<String>) {
    let Some(key) = key else {
        println!("\n=== Configuration ===");
        println!("({})\n", Config::get_config_file_path().display());
        print!("{config}");
        return;
    };

    match config.get(&key) {
        Some(value) => println!("{value}"),
        None => {
            eprintln!("Unknown config key: '{key}'");
            std::process::exit(1);
        }
    }
}

/// Validate, store and persist one value
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Set {key} = {value}");
}

/// Restore one value from the built-in defaults and persist
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Reset {key} to default");
}

/// Delete the user config file after confirmation
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}
