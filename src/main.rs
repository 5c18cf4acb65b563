use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagebuild::manifest::{self, RenameRule, SyncOptions, Variant};
use pagebuild::{files, pages};

#[derive(Parser)]
#[command(name = "pgb")]
#[command(about = "Filesystem utilities for the HTML page build pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synchronize the root manifest with a build manifest
    Sync {
        /// Build variant; any value containing "jk" selects the JK manifest
        variant: Option<String>,

        /// Path to the root manifest
        #[arg(long, default_value = "./package.json")]
        manifest: PathBuf,

        /// Directory holding the build-source manifests
        #[arg(long, default_value = "./scripts")]
        src: PathBuf,

        /// Build output directory
        #[arg(long, default_value = "./build")]
        build: PathBuf,

        /// Substring to replace in built files
        #[arg(long, requires = "rename_to", requires = "rename_in")]
        rename_from: Option<String>,

        /// Replacement for the renamed substring
        #[arg(long)]
        rename_to: Option<String>,

        /// Comma-separated file names under the build directory to rewrite
        #[arg(long, value_delimiter = ',')]
        rename_in: Vec<String>,
    },
    /// List the page records found under a tree
    Pages {
        /// Root of the page tree
        root: PathBuf,

        /// Comma-separated directory names to prune from the walk
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,
    },
    /// Print the shallow listing of a directory as JSON
    List {
        /// Directory to list
        dir: PathBuf,
    },
    /// Print file contents, guarded against oversized files
    Show {
        /// File to print
        file: PathBuf,
    },
}

/// Initialize tracing with output to stderr so stdout stays clean for
/// command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "pagebuild=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Sync {
            variant,
            manifest,
            src,
            build,
            rename_from,
            rename_to,
            rename_in,
        } => {
            let rename = rename_from.zip(rename_to).map(|(from, to)| RenameRule {
                from,
                to,
                files: rename_in,
            });
            let opts = SyncOptions {
                src_dir: src,
                build_dir: build,
                variant: Variant::from_arg(variant.as_deref()),
                rename,
            };
            let report = manifest::sync_build_manifest(&manifest, &opts)?;
            println!("version {}", report.version);
        }
        Commands::Pages { root, exclude } => {
            let pages = pages::read_pages(&root, &exclude)?;
            for page in pages.iter() {
                println!("{}\t{}", page.name, page.path.display());
            }
        }
        Commands::List { dir } => {
            let entries = files::list_dir(&dir)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Show { file } => {
            println!("{}", files::read_file_guarded(&file)?);
        }
    }

    Ok(())
}
