use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};

use crate::{config::DEFAULT_CONFIG_FILE, tip::TipTier};

const USAGE: &str = "usage: calcapp [--config <path>] [demo | tip --cost <amount> [--tier amazing|good|ok] [--round-up]]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipArgs {
    /// Raw text as typed; unreadable amounts yield a zero tip.
    pub cost: String,
    pub tier: Option<TipTier>,
    pub round_up: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Demo,
    Tip(TipArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

impl CliOptions {
    /// The explicit `--config` path, or the default file when it exists.
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.resolved_config_path_in(Path::new("."))
    }

    pub fn resolved_config_path_in(&self, working_dir: &Path) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => Some(path.clone()),
            None => {
                let default_path = working_dir.join(DEFAULT_CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        }
    }
}

pub fn cli_options_from_args() -> Result<CliOptions> {
    parse_cli_options(env::args().skip(1))
}

pub fn parse_cli_options<I>(mut args: I) -> Result<CliOptions>
where
    I: Iterator<Item = String>,
{
    let mut config_path = None;
    let mut command_name: Option<String> = None;
    let mut cost = None;
    let mut tier = None;
    let mut round_up = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--cost" => {
                cost = Some(
                    args.next()
                        .ok_or_else(|| anyhow!("missing value for --cost"))?,
                );
            }
            "--tier" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --tier"))?;
                tier = Some(value.parse::<TipTier>()?);
            }
            "--round-up" => round_up = Some(true),
            name @ ("demo" | "tip") if command_name.is_none() => {
                command_name = Some(name.to_string());
            }
            other => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
        }
    }

    let command = match command_name.as_deref() {
        None | Some("demo") => {
            if cost.is_some() || tier.is_some() || round_up.is_some() {
                return Err(anyhow!("tip options require the tip command. {USAGE}"));
            }
            Command::Demo
        }
        Some(_) => {
            let cost = cost
                .ok_or_else(|| anyhow!("missing required argument --cost. {USAGE}"))?;
            Command::Tip(TipArgs {
                cost,
                tier,
                round_up,
            })
        }
    };

    Ok(CliOptions {
        config_path,
        command,
    })
}
