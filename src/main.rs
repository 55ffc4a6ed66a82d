//! CLI entry point for the gradebook tool.
//!
//! Loads a roster of students and their ten assignment grades, then either
//! runs the interactive menu or prints a JSON class report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook::analyzers::aggregate::build_report;
use gradebook::{
    output::write_json,
    parser::load_session_roster,
    shell::{ConsoleSource, Shell},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Query and edit a class roster of assignment grades", long_about = None)]
struct Cli {
    /// Roster file: one `name,grade1,...,grade10` row per student
    #[arg(short, long, global = true, default_value = "students.csv")]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Shell,
    /// Print a JSON summary of the roster and exit
    Report {
        /// Indent the JSON output
        #[arg(short, long, default_value_t = false)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // Kept at warn so log lines do not interleave with the menu.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let Some(mut roster) = load_session_roster(&cli.file, &mut std::io::stderr())? else {
        return Ok(());
    };
    info!(path = %cli.file.display(), students = roster.len(), "Roster loaded");

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let input = ConsoleSource::new(stdin.lock());
            let mut shell = Shell::new(&mut roster, input, stdout.lock());
            shell.run()?;
        }
        Commands::Report { pretty } => {
            let report = build_report(&roster);
            write_json(&mut std::io::stdout().lock(), &report, pretty)?;
        }
    }

    Ok(())
}
