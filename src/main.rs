// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build an API client and run the
//   fetch, sort, render pipeline.
// - The page is only written once everything has been fetched, so a failed
//   run prints nothing on stdout.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xbeers::api::ApiClient;
use xbeers::cli::Cli;
use xbeers::config::Config;
use xbeers::history::{grouped_sort, HistoryAggregator};
use xbeers::report::ReportRenderer;
use xbeers::ui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<xbeers::Error>()
                .map(xbeers::Error::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let generated_at = chrono::Utc::now();

    let mut api = ApiClient::new(&config.api).context("Failed to build HTTP client")?;
    if cli.auth {
        let password = ui::prompt_password()?;
        api = api.with_credentials(&cli.username, &password);
    }
    if config.api.key.is_empty() {
        tracing::warn!("no API key configured; set api.key or UNTAPPD_API_KEY");
    }

    let items = HistoryAggregator::new(&api)
        .with_progress(ui::spinner())
        .aggregate(&cli.username)
        .with_context(|| format!("Failed to fetch beers for {}", cli.username))?;
    let items = grouped_sort(items);

    let page = ReportRenderer::new(&config.report, &config.api.web_url, generated_at).render(&items);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(page.as_bytes()).context("Failed to write report")?;
    stdout.flush()?;
    Ok(())
}
