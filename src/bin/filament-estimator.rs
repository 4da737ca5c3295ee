use anyhow::Result;
use filament_estimator::{Config, cli};

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let stdout = std::io::stdout();
    cli::run(&config, &mut stdout.lock())
}
