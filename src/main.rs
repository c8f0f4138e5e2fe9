use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use futures::StreamExt;
use tokio::sync::broadcast::error::RecvError;

use countries_mvi::config::Config;
use countries_mvi::countries::{
    CountryListIntent, CountryListViewModel, CountryListViewState, FavoriteChange,
};
use countries_mvi::logging::init_tracing;
use countries_mvi::repository::{CountryRepository, InMemoryCountryRepository};

/// Drive the country list pipeline from the command line.
#[derive(Debug, Parser)]
#[command(name = "countries-mvi", version)]
struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the delay before favorite notifications are cleared.
    #[arg(long)]
    reset_delay_ms: Option<u64>,

    /// Intents to submit in order: load, favorites, add:<name>, remove:<name>.
    #[arg(value_name = "INTENT", default_value = "load")]
    intents: Vec<CountryListIntent>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    if let Some(delay) = cli.reset_delay_ms {
        config.engine.reset_delay_ms = delay;
    }

    let repository: Arc<dyn CountryRepository> =
        Arc::new(InMemoryCountryRepository::from_config(&config.repository));
    let view_model = CountryListViewModel::new(repository, &config.engine);

    let mut states = view_model.states();
    let renderer = tokio::spawn(async move {
        while let Some(state) = states.next().await {
            println!("{}", render(&state));
        }
    });

    let mut errors = view_model.dispatch_errors();
    let error_reporter = tokio::spawn(async move {
        loop {
            match errors.recv().await {
                Ok(error) => eprintln!("error: {error}"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Dispatch errors skipped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let feeder = view_model.process_intents(futures::stream::iter(cli.intents));
    feeder.await.context("intent feeder failed")?;
    let final_state = view_model
        .shutdown()
        .await
        .context("state store failed")?;

    let _ = renderer.await;
    let _ = error_reporter.await;
    println!("final: {}", render(&final_state));
    Ok(())
}

fn render(state: &CountryListViewState) -> String {
    let mut line = String::new();

    if state.in_progress {
        line.push_str("[loading] ");
    }

    match &state.countries {
        None => line.push_str("(not loaded)"),
        Some(_) => {
            let names: Vec<String> = state
                .visible_countries()
                .into_iter()
                .map(|country| {
                    if country.is_favorite {
                        format!("*{}", country.name)
                    } else {
                        country.name.clone()
                    }
                })
                .collect();
            line.push_str(&format!("{:?}: {}", state.filter, names.join(", ")));
        }
    }

    if let Some(notification) = &state.notification {
        let verb = match notification.change {
            FavoriteChange::Added => "added to",
            FavoriteChange::Removed => "removed from",
        };
        line.push_str(&format!(" | {} {} favorites", notification.name, verb));
    }

    if let Some(error) = &state.error {
        line.push_str(&format!(" | error: {error}"));
    }

    line
}
