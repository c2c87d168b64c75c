use std::{io, path::PathBuf};

use clap::Parser;
use tracing::{debug, warn};

use mirath_ui::{
    app::{self, Job},
    logging,
    settings::Settings,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Inheritance share calculator.
///
/// Fills the calculator form from a file and/or `--set` flags, sends it to the
/// calculation service and prints the shares, chart and summary.
#[derive(Debug, Parser)]
#[command(name = "mirath")]
struct Cli {
    /// Settings file. Defaults to `./mirath.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file of control id = value pairs.
    #[arg(long)]
    form: Option<PathBuf>,

    /// Set one control, e.g. `--set estate=120000 --set mother=true`.
    #[arg(long = "set", value_name = "ID=VALUE")]
    assignments: Vec<String>,

    /// Also download the PDF report after calculating.
    #[arg(long)]
    export: bool,

    /// Directory the report is saved to.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Base URL of the calculation service.
    #[arg(long)]
    base_url: Option<String>,

    /// Log filter, e.g. `debug` or `mirath_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not print logs to the terminal.
    #[arg(long)]
    quiet: bool,
}

fn apply_logging(
    cli: &Cli,
    settings: &Settings,
) -> anyhow::Result<()> {
    if let Some(level) = cli.log_level.as_ref().or(settings.logging.level.as_ref()) {
        logging::set_log_level(level)?;
    }
    if cli.quiet || !settings.logging.console {
        logging::set_console_enabled(false)?;
    }
    if let Some(path) = cli.log_file.as_ref().or(settings.logging.file.as_ref()) {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Err(error) = apply_logging(&cli, &settings) {
        warn!(%error, "logging setup incomplete");
    }

    if let Some(base_url) = &cli.base_url {
        settings.service.base_url = base_url.clone();
    }
    let job = Job {
        service: settings.service,
        form_file: cli.form,
        assignments: cli.assignments,
        export: cli.export,
        download_dir: cli.out_dir.unwrap_or(settings.output.directory),
    };
    debug!(?job, "starting");

    let registry = app::build_registry();
    app::run(&job, &registry, io::stdout()).await?;
    Ok(())
}
