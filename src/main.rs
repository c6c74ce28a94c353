use clap::{Parser, Subcommand};
use courier_orders::config::Settings;
use courier_orders::handlers::{self, AppState, OrdersError};
use courier_orders::models::{CourierOrdersRequest, ErrorResponse};
use courier_orders::services::{InMemoryCourierSource, InMemoryOrderSource};
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "courier-orders",
    about = "List delivery orders a courier can take, best first"
)]
struct Cli {
    /// Configuration file (defaults to config/default.toml + config/local.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every order
    Orders,
    /// List the orders a courier may take, ranked
    Courier {
        /// Courier identifier
        courier_id: String,
    },
    /// Print aggregate statistics
    Stats,
}

fn init_logging(settings: &Settings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: OrdersError) -> ExitCode {
    let response = ErrorResponse::from(&err);
    error!("{}", err);
    if let Ok(json) = serde_json::to_string_pretty(&response) {
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);
    info!("Configuration loaded successfully");

    // Invalid thresholds or criteria abort before any request is served
    let order_filter = match settings.order_filter() {
        Ok(filter) => filter,
        Err(e) => {
            error!("Invalid filter configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let order_sorter = match settings.order_sorter() {
        Ok(sorter) => sorter,
        Err(e) => {
            error!("Invalid sorting configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Filter: excluded words {:?}, threshold {} km; sorting: {:?}, slot {} km",
        order_filter.excluded_words(),
        order_filter.distance_threshold_km(),
        order_sorter.criteria().criteria(),
        order_sorter.slot_distance_km()
    );

    let orders = match InMemoryOrderSource::from_path(&settings.data.orders_path) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to load orders: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let couriers = match InMemoryCourierSource::from_path(&settings.data.couriers_path) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to load couriers: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(Arc::new(orders), Arc::new(couriers), order_filter, order_sorter);

    match cli.command {
        Commands::Orders => match handlers::list_orders(&state) {
            Ok(views) => print_json(&views),
            Err(e) => report(e),
        },
        Commands::Courier { courier_id } => {
            let req = CourierOrdersRequest::new(courier_id);
            match handlers::courier_orders(&state, &req) {
                Ok(views) => print_json(&views),
                Err(e) => report(e),
            }
        }
        Commands::Stats => match handlers::stats(&state) {
            Ok(stats) => print_json(&stats),
            Err(e) => report(e),
        },
    }
}
