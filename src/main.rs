//! Demo binary: bring up the rotating logger and emit sample records.

use std::time::Duration;

use daylog::{config, logger, Field, Level};

#[tokio::main]
async fn main() {
    let cfg = config::resolve();

    let _guard = match daylog::init(&cfg) {
        Ok(guard) => guard,
        Err(err) => {
            // No usable logger; nothing to do but report and exit.
            eprintln!("failed to initialize logging: {err}");
            std::process::exit(1);
        }
    };

    let log = logger();
    log.info("daylog demo starting");
    log.debug("debug records are filtered below the configured level");
    log.log(
        Level::Warn,
        "structured context example",
        &[Field::new("pid", std::process::id())],
    );
    log.error("sample error record");

    // Keep the process alive briefly so the rotation monitor is observable.
    tokio::time::sleep(Duration::from_secs(2)).await;
    logger().info("daylog demo exiting");
}
