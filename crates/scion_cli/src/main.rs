//! Command line entry point for Scion genealogy imports.
//!
//! # Responsibility
//! - Parse operator flags and initialize logging.
//! - Own the store connection for the whole run and release it on exit.
//! - Exit non-zero with the error chain on the first fatal error.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use scion_core::db::migrations::current_version;
use scion_core::db::open_db;
use scion_core::{
    core_version, default_log_level, init_logging, DateFormat, EntityKind, ImportService,
    SqliteUpsertWriter,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "scion", version, about = "Import Scion PC genealogy exports into SQLite")]
struct Cli {
    /// Log level: trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files (stderr when omitted)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import (or re-import) an .sgx export into the store
    Import {
        /// Path to the Scion XML export
        file: PathBuf,

        /// SQLite store file, created when missing
        #[arg(long)]
        db: PathBuf,

        /// Encoding for name/fact date columns
        #[arg(long, value_enum, default_value_t = CliDateFormat::Composite)]
        date_format: CliDateFormat,
    },

    /// Create or migrate the store schema and print its version
    Schema {
        /// SQLite store file, created when missing
        #[arg(long)]
        db: PathBuf,
    },

    /// Print the core library version
    Version,
}

/// CLI date format enum (mirrors DateFormat but with clap support)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliDateFormat {
    /// Composite tuple text compatible with existing stores
    Composite,
    /// JSON object with nullable endpoints
    Json,
}

impl From<CliDateFormat> for DateFormat {
    fn from(value: CliDateFormat) -> Self {
        match value {
            CliDateFormat::Composite => DateFormat::Composite,
            CliDateFormat::Json => DateFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref())
        .map_err(|message| anyhow::anyhow!(message))
        .context("failed to initialize logging")?;

    match cli.command {
        Command::Import {
            file,
            db,
            date_format,
        } => run_import(&file, &db, date_format.into()),
        Command::Schema { db } => run_schema(&db),
        Command::Version => {
            println!("scion_core version={}", core_version());
            Ok(())
        }
    }
}

fn run_import(file: &Path, db: &Path, date_format: DateFormat) -> Result<()> {
    let conn =
        open_db(db).with_context(|| format!("failed to open store `{}`", db.display()))?;
    let writer = SqliteUpsertWriter::try_new(&conn, date_format)
        .with_context(|| format!("store `{}` is not ready for import", db.display()))?;
    info!(
        "event=import_config module=cli file={} db={} date_format={}",
        file.display(),
        db.display(),
        writer.date_format()
    );

    let service = ImportService::new(writer);
    let report = service
        .import_file(file)
        .with_context(|| format!("import of `{}` failed", file.display()))?;

    for kind in EntityKind::ALL {
        println!("{kind}: {}", report.count(kind));
    }
    println!("total: {}", report.total());
    Ok(())
}

fn run_schema(db: &Path) -> Result<()> {
    let conn =
        open_db(db).with_context(|| format!("failed to open store `{}`", db.display()))?;
    let version = current_version(&conn).context("failed to read schema version")?;
    println!("schema version={version}");
    Ok(())
}
