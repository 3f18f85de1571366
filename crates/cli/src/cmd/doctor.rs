use doclist_core::config::loader::{default_config_path, ConfigLoader};
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            logging::init(&rc.logging);

            let exclusions = if rc.exclusions.is_empty() {
                "(none)".to_string()
            } else {
                rc.exclusions.iter().collect::<Vec<_>>().join(", ")
            };
            let log_file = rc
                .logging
                .file
                .as_deref()
                .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
            let docs_ok = rc.docs_dir.is_dir();

            println!("OK   doclist doctor");
            println!(
                "path: {}",
                rc.source.as_deref().map_or_else(
                    || format!("(defaults; looked for {})", default_config_path().display()),
                    |p| p.display().to_string()
                )
            );
            println!("docs_dir: {}", rc.docs_dir.display());
            println!("docs_dir.exists: {}", docs_ok);
            println!("exclude: {}", exclusions);
            println!("logging.level: {}", rc.logging.level);
            println!("logging.file: {}", log_file);
        }
        Err(e) => {
            println!("FAIL doclist doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
