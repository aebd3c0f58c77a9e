use clap::Parser;
use pkgscout::api::HttpRegistry;
use pkgscout::cache::SearchCache;
use pkgscout::colors;
use pkgscout::search::{self, SearchOptions};

#[derive(Parser)]
#[command(name = "pkgscout")]
#[command(author, version, about = "Search the community package registry", long_about = None)]
struct Cli {
    /// Query terms; any term may match, case-insensitively. With no terms
    /// the whole catalog is listed.
    query: Vec<String>,

    /// Don't colorize output
    #[arg(short = 'n', long)]
    no_color: bool,

    /// Skip the registry cache and fetch fresh
    #[arg(short = 'c', long)]
    skip_cache: bool,

    /// Generate a serialized JSON output
    #[arg(short = 'j', long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "warn");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    colors::init_colors(cli.no_color);

    // Terms are folded once here; the matcher relies on it
    let opts = SearchOptions {
        terms: cli.query.iter().map(|term| term.to_lowercase()).collect(),
        use_cache: !cli.skip_cache,
        json: cli.json,
    };

    let source = HttpRegistry::new()?;
    let cache = SearchCache::new();

    search::search(&source, &cache, &opts).await?;

    Ok(())
}
