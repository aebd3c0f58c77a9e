//! The search command: fetch, filter, render.

use crate::api::RegistrySource;
use crate::cache::SearchCache;
use crate::error::Result;
use crate::matcher;
use crate::render;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Per-run configuration, decided once from the CLI.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Lowercased query terms; empty lists the whole catalog.
    pub terms: Vec<String>,
    /// Consult the disk cache before going to the network.
    pub use_cache: bool,
    /// Emit one JSON array instead of text blocks.
    pub json: bool,
}

pub async fn search<S: RegistrySource>(
    source: &S,
    cache: &SearchCache,
    opts: &SearchOptions,
) -> Result<()> {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());

    let spinner = if is_tty && !opts.json {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Fetching registry...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let registry = crate::api::fetch_registry(source, cache, opts.use_cache).await;
    spinner.finish_and_clear();
    let registry = registry?;

    debug!("searching {} packages", registry.len());

    let mut json_list = Vec::new();

    if !opts.json {
        println!();
    }

    for entry in &registry {
        if !matcher::matches(&opts.terms, entry) {
            debug!("skipped package {}", entry.repo);
            continue;
        }

        if opts.json {
            json_list.push(entry);
        } else {
            render::display_package(entry);
        }
    }

    if opts.json {
        println!("{}", render::to_json(&json_list)?);
    }

    Ok(())
}
