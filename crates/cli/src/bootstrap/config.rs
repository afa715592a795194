use dualstack_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        regions = ?config.regions.names,
        discover_all = config.regions.discover_all,
        subnet_prefix_step = config.addressing.subnet_prefix_step,
        "Configuration loaded"
    );

    Ok(config)
}
