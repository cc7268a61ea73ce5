use crate::utils::error::DeployError;
use clap::Parser;
use std::ffi::OsString;

/// Command-line surface of `deploy`.
///
/// Every argument is captured verbatim and none of them is interpreted:
/// `--help`, `--version` and unknown flags end up in `args` like any
/// other value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "deploy")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl CliConfig {
    /// Builds the configuration from a full argument vector, program name
    /// first. Never fails: if clap rejects the input the raw arguments are
    /// kept as they are.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match Self::try_parse_from(raw.iter()) {
            Ok(config) => config,
            Err(e) => {
                let err = DeployError::ConfigError {
                    message: e.to_string(),
                };
                tracing::debug!("{}; keeping raw arguments", err);
                Self {
                    args: raw.into_iter().skip(1).collect(),
                }
            }
        }
    }

    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }
}
