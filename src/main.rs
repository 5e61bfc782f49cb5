use std::io::{self, Write};
use std::process::ExitCode;

use dotenv::dotenv;
use slack_alert_probe::configuration::{self, Settings};
use slack_alert_probe::notifier;
use slack_alert_probe::telemetry::{get_subscriber, init_subscriber};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let subscriber = get_subscriber("slack_alert_probe".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            warn!("{err}");
            println!("{}", configuration::usage());
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut out = io::stdout().lock();
    let mut trace = io::stderr();
    let outcome = notifier::run(&settings, &mut out, &mut trace).await?;
    out.flush()?;
    info!(?outcome, "probe finished");

    // Delivery failures still exit 0.
    Ok(ExitCode::SUCCESS)
}
