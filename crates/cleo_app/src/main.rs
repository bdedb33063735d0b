mod platform;

use site_logging::site_error;

fn main() -> anyhow::Result<()> {
    let config = platform::config::load_config()?;
    platform::logging::initialize(config.log_destination, &config.log_file);
    platform::run_app(&config).inspect_err(|err| site_error!("shell stopped: {:#}", err))
}
