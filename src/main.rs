use fitness_tracker::config::Config;
use fitness_tracker::pipeline::report;
use fitness_tracker::types::activity::WorkoutRecord;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let config = Config::from_env();

    // Initialize tracing; stdout is reserved for report lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let packages = vec![
        WorkoutRecord::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutRecord::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutRecord::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ];

    tracing::info!(
        "Processing {} packages (policy: {:?}, parallel: {})",
        packages.len(),
        config.batch_policy,
        config.parallel
    );

    let batch = if config.parallel {
        report::run_batch_parallel(&packages)
    } else {
        report::run_batch(&packages, config.batch_policy)
    };

    for outcome in batch.outcomes() {
        match &outcome.result {
            Ok(message) => println!("{}", message),
            Err(err) => tracing::error!("Package {} ({}) failed: {}", outcome.index, outcome.code, err),
        }
    }

    if !batch.errors().is_empty() {
        std::process::exit(1);
    }
}
