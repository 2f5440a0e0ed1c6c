// FollowCheck - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Reading the two exported documents and assigning their roles
// 4. Driving an AppState session and printing the view or an export

use clap::{Parser, ValueEnum};
use followcheck::app::cli::{apply_view_args, write_view};
use followcheck::app::state::{AppState, ExportScope};
use followcheck::core::filter::SortKey;
use followcheck::platform::{config, fs};
use followcheck::util::{self, constants, error::FollowCheckError};
use std::path::{Path, PathBuf};

/// FollowCheck - find the accounts you follow that don't follow you back.
///
/// Point FollowCheck at the followers and following JSON files from your
/// account data export.
#[derive(Parser, Debug)]
#[command(name = "followcheck", version, about)]
struct Cli {
    /// Export files; roles are detected from the file names
    /// ("followers..." / "following...").
    files: Vec<PathBuf>,

    /// Followers export file (overrides name detection).
    #[arg(long = "followers")]
    followers: Option<PathBuf>,

    /// Following export file (overrides name detection).
    #[arg(long = "following")]
    following: Option<PathBuf>,

    /// Only show usernames containing this text (case-insensitive).
    #[arg(short = 's', long = "search", default_value = "")]
    search: String,

    /// Sort request; repeat the same key to flip direction.
    #[arg(long = "sort", value_enum)]
    sort: Vec<SortArg>,

    /// Print a plain username list instead of the table.
    #[arg(short = 'e', long = "export", value_enum)]
    export: Option<ExportArg>,

    /// Write the export to this file instead of stdout.
    #[arg(short = 'o', long = "output", requires = "export")]
    output: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Username,
    FollowedSince,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Username => SortKey::Username,
            SortArg::FollowedSince => SortKey::FollowedSince,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportArg {
    /// The searched and sorted view.
    Filtered,
    /// Every account, in export order.
    All,
}

impl From<ExportArg> for ExportScope {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Filtered => ExportScope::Filtered,
            ExportArg::All => ExportScope::All,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // An explicitly named config must load; the platform default is optional.
    let (app_config, config_warnings) = match cli.config {
        Some(ref path) => match config::load_config_required(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => config::load_config(&config::PlatformPaths::resolve().config_file()),
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "FollowCheck starting"
    );
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning; using default");
    }

    if let Err(e) = run(&cli, app_config.max_document_bytes) {
        tracing::error!(error = %e, "FollowCheck failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, max_document_bytes: u64) -> Result<(), FollowCheckError> {
    let mut state = AppState::new();

    let assigned = fs::assign_roles(
        &cli.files,
        cli.followers.as_deref(),
        cli.following.as_deref(),
    );
    for (role, path) in assigned {
        let text = fs::read_document(&path, max_document_bytes)?;
        state.load_document(role, &text)?;
    }

    state.process()?;
    let sorts: Vec<SortKey> = cli.sort.iter().map(|&key| key.into()).collect();
    apply_view_args(&mut state, &cli.search, &sorts);

    match cli.export {
        Some(which) => write_export(&state, which.into(), cli.output.as_deref()),
        None => {
            let rows = write_view(&state, std::io::stdout().lock(), Path::new("<stdout>"))?;
            tracing::trace!(rows, "View printed");
            Ok(())
        }
    }
}

fn write_export(
    state: &AppState,
    scope: ExportScope,
    output: Option<&Path>,
) -> Result<(), FollowCheckError> {
    let count = match output {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|source| FollowCheckError::Io {
                path: path.to_path_buf(),
                operation: "create",
                source,
            })?;
            state.write_export(scope, std::io::BufWriter::new(file), path)?
        }
        None => state.write_export(scope, std::io::stdout().lock(), Path::new("<stdout>"))?,
    };

    tracing::info!(count, scope = ?scope, "Export complete");
    Ok(())
}
