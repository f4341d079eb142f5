use std::io::{self, Write};

use anyhow::{Context, Result};

use calcapp::{
    cli::{Command, TipArgs, cli_options_from_args},
    config::{Config, TipConfig},
    demo,
    logging::init_tracing,
    tip::render_for,
};

fn main() -> Result<()> {
    let options = cli_options_from_args()?;
    let config = match options.resolved_config_path() {
        Some(config_path) => Config::load(&config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?,
        None => Config::default(),
    };

    let logging_guard =
        init_tracing(&config.logging).context("failed to initialize calcapp logging")?;
    tracing::info!(
        target: "calcapp",
        run_id = %logging_guard.run_id(),
        command = ?options.command,
        "calcapp_started"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &options.command {
        Command::Demo => demo::run(&config.demo.dwellings, &mut out)?,
        Command::Tip(args) => print_tip(&config.tip, args, &mut out)?,
    }
    out.flush()?;

    Ok(())
}

fn print_tip<W: Write>(tip_config: &TipConfig, args: &TipArgs, out: &mut W) -> Result<()> {
    let screen = render_for(tip_config, args);
    let outcome = &screen.outcome;

    if outcome.cost_of_service.is_none() {
        tracing::warn!(target: "tip", input = %args.cost, "cost_of_service_unreadable");
    }
    tracing::info!(
        target: "tip",
        tier = %outcome.tier,
        round_up = outcome.round_up,
        tip = outcome.tip,
        "tip_calculated"
    );

    writeln!(out, "{}", screen.message)?;
    Ok(())
}
