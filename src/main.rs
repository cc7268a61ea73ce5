use anyhow::Context;
use deploy::utils::logger;
use deploy::{CliConfig, DeployEngine};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Without a subscriber there is nowhere to report this.
    let _ = logger::init_cli_logger();

    tracing::debug!("Starting deploy CLI");

    if let Err(e) = try_main() {
        tracing::debug!("deploy run failed: {:#}", e);
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    tracing::debug!("CLI config: {:?}", config);

    DeployEngine::new(config)
        .run()
        .context("deploy engine run failed")?;
    Ok(())
}
