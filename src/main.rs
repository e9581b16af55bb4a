use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use hobby_tracker::session_resources::config::ReportConfig;
use hobby_tracker::session_resources::dataset::hobby_log;
use hobby_tracker::session_resources::exceptions::AnalyticsExceptions;
use hobby_tracker::session_resources::implementation::Reporter;
use hobby_tracker::session_resources::report::run_report;

fn main() -> Result<(), AnalyticsExceptions> {

  // Logs go to stderr so stdout only carries the report
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
    .init();

  let config = ReportConfig::load().map_err(|config_error| {
    error!(%config_error, "failed to load report config");
    config_error
  })?;

  let log = hobby_log();
  let mut reporter = Reporter::std_out(config.output.format);

  run_report(&log, &config.report_settings, &mut reporter)?;

  info!("report complete");
  Ok(())

}
