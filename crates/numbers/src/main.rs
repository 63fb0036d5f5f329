//! Demo entry point: folds a run of numbers through the combined view.

use std::convert::Infallible;

use futures_util::stream;
use numbers::{Config, NumberEvent, number_view};
use projections::{MaterializedView, ProjectionProcessor};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Register the combined view
    let numbers = MaterializedView::new("NumberView", number_view());
    let mut processor = ProjectionProcessor::new();
    processor.register(Box::new(numbers.clone()));

    // 3. Replay 1..=count as a shared stream of even and odd events
    let events =
        stream::iter((1..=config.count).map(|n| Ok::<_, Infallible>(NumberEvent::added(n))));
    let read = processor.run_catch_up(events).await.expect("catch-up failed");
    tracing::info!(events = read, "numbers folded");

    // 4. Print the materialized state
    let state = numbers.state().await;
    let rendered = serde_json::to_string_pretty(&state).expect("state is serializable");
    println!("{rendered}");
}
