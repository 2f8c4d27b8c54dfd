use stockroom_cli::{Config, demo};

fn main() -> anyhow::Result<()> {
    let (config, warnings) = Config::from_env();
    stockroom_observability::init(config.log_format);
    for warning in warnings {
        tracing::warn!("{warning}");
    }

    tracing::info!(data_file = %config.data_file.display(), "starting demonstration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&config, &mut out)?;
    Ok(())
}
