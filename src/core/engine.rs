use crate::config::CliConfig;
use crate::utils::error::Result;

/// Runs a `deploy` invocation.
///
/// The asset pipeline (tag discovery, concatenation, minification) does
/// not exist yet, so a run reads nothing, writes nothing and succeeds.
pub struct DeployEngine {
    config: CliConfig,
}

impl DeployEngine {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn run(&self) -> Result<()> {
        tracing::debug!(
            arg_count = self.config.args.len(),
            "asset pipeline not implemented; arguments ignored"
        );
        Ok(())
    }
}
