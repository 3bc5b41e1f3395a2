use bookshelf::config::CatalogConfig;
use bookshelf::model::IdPolicy;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "BOOKSHELF_CONFIG_DIR";

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Keep a catalog of books in a JSON file", long_about = None)]
pub struct Cli {
    /// Catalog file (defaults to the configured file, then library.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Id assignment for new books: sequential or monotonic
    #[arg(long, value_name = "POLICY")]
    pub ids: Option<IdPolicy>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr so they never mix with the menu on stdout.
/// `RUST_LOG` wins over `--verbose` when set.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "bookshelf=debug"
    } else {
        "bookshelf=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Config file values, overridden by flags. An unreadable config file falls back to defaults.
pub fn resolve_config(cli: &Cli) -> CatalogConfig {
    let base = match config_dir() {
        Some(dir) => CatalogConfig::load(&dir).unwrap_or_else(|e| {
            tracing::warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
            CatalogConfig::default()
        }),
        None => CatalogConfig::default(),
    };
    base.with_overrides(cli.file.clone(), cli.ids)
}
