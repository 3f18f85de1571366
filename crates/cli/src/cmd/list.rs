//! List command implementation.

use std::io::{self, ErrorKind};
use std::path::Path;

use doclist_core::catalog::{build_catalog, render_json, write_text};
use doclist_core::config::loader::ConfigLoader;
use doclist_core::docs::ExclusionSet;
use tracing::info;

use crate::logging;
use crate::ListArgs;

pub fn run(config: Option<&Path>, args: &ListArgs) {
    // Load configuration
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&rc.logging);

    let docs_dir = args.docs_dir.clone().unwrap_or(rc.docs_dir);
    let exclusions = resolve_exclusions(args, rc.exclusions);
    info!(docs_dir = %docs_dir.display(), "cataloging docs");

    // Root-level failure aborts before anything reaches stdout
    let entries = match build_catalog(&docs_dir, &exclusions) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match render_json(&entries) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing catalog: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = write_text(&mut stdout, &entries) {
        if e.kind() == ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("Error writing report: {}", e);
        std::process::exit(1);
    }
}

fn resolve_exclusions(args: &ListArgs, configured: ExclusionSet) -> ExclusionSet {
    if args.no_exclude {
        ExclusionSet::empty()
    } else if !args.exclude.is_empty() {
        args.exclude.iter().cloned().collect()
    } else {
        configured
    }
}
