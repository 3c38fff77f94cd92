use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "phonedir", bin_name = "phonedir", version = get_version())]
#[command(about = "Phone directory management", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory file to use instead of the configured one
    #[arg(short, long, global = true, env = "PHONEDIR_FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display all records
    #[command(alias = "ls")]
    Display(PageArgs),

    /// Add a new record
    #[command(alias = "a")]
    Add,

    /// Edit a record by index
    #[command(alias = "e")]
    Edit {
        /// Record index, as shown by display
        index: usize,
    },

    /// Search records by query (`text` or `field=value`)
    #[command(alias = "s")]
    Search {
        /// Query, e.g. `Иванов` or `first_name=андрей`
        query: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, records-per-page, log-file, log-level, load-policy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page number for display
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Number of records per page
    #[arg(short = 'r', long = "records_per_page", alias = "records-per-page")]
    pub records_per_page: Option<NonZeroUsize>,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self {
            page: 1,
            records_per_page: None,
        }
    }
}
