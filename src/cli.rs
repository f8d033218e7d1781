use std::{env, path::PathBuf};

use anyhow::{Result, bail};

const DEFAULT_CONFIG_FILE: &str = "affordance.jsonc";
const USAGE: &str = "usage: affordance [--check] [<config-path>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    /// Only validate the declarations, print nothing on success.
    pub check_only: bool,
}

pub fn args_from_env() -> Result<CliArgs> {
    let default_config_path = env::current_dir()?.join(DEFAULT_CONFIG_FILE);
    parse_args(env::args().skip(1), default_config_path)
}

fn parse_args(
    args: impl IntoIterator<Item = String>,
    default_config_path: PathBuf,
) -> Result<CliArgs> {
    let mut config_path = None;
    let mut check_only = false;

    for arg in args {
        match arg.as_str() {
            "--check" => check_only = true,
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}'. {USAGE}"),
            _ if config_path.is_some() => bail!("expected at most one config path. {USAGE}"),
            _ => config_path = Some(PathBuf::from(&arg)),
        }
    }

    Ok(CliArgs {
        config_path: config_path.unwrap_or(default_config_path),
        check_only,
    })
}
