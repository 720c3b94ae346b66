use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use sailing_planner::dataset::JsonFileSource;
use sailing_planner::domain::{Currency, PortCode};
use sailing_planner::planner::{
    Criterion, Planner, PlannerConfig, SearchRequest, itinerary_records,
};

#[derive(Debug, Parser)]
#[command(name = "sailing-planner")]
#[command(about = "Find the cheapest or fastest sailing route between two ports.")]
struct Args {
    /// Port to ship from
    #[arg(value_parser = PortCode::parse)]
    origin: PortCode,

    /// Port to ship to
    #[arg(value_parser = PortCode::parse)]
    destination: PortCode,

    /// What to optimise: cheapest or fastest
    criterion: Criterion,

    /// Only consider direct sailings
    #[arg(long)]
    direct: bool,

    /// Maximum number of legs per route
    #[arg(long)]
    max_legs: Option<usize>,

    /// Dataset with sailings, rates and exchange rates
    #[arg(long, env = "SAILING_DATA", default_value = "response.json")]
    data: PathBuf,

    /// Currency all rates are compared in
    #[arg(
        long,
        env = "SAILING_BASE_CURRENCY",
        default_value = "EUR",
        value_parser = Currency::parse
    )]
    base_currency: Currency,
}

impl Args {
    fn request(&self) -> SearchRequest {
        let mut request =
            SearchRequest::new(self.origin.clone(), self.destination.clone(), self.criterion);
        if self.direct {
            request = request.direct();
        }
        if let Some(max_legs) = self.max_legs {
            request = request.with_max_legs(max_legs);
        }
        request
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = PlannerConfig::new(args.base_currency);
    let request = args.request();

    debug!(path = %args.data.display(), base = %config.base_currency, "Using dataset");

    let source = JsonFileSource::new(&args.data);
    let itinerary = Planner::search_source(&source, &config, &request).with_context(|| {
        format!(
            "search from {} to {} failed",
            request.origin, request.destination
        )
    })?;

    let output = match itinerary {
        Some(itinerary) => serde_json::to_string_pretty(&itinerary_records(&itinerary)),
        None => serde_json::to_string(&()),
    }
    .context("failed to serialize itinerary")?;

    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    // Usage errors exit with 1; --help and --version exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
