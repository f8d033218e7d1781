use affordance::{cli::args_from_env, config::Config, logging::init_tracing};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let args = args_from_env()?;
    let config = Config::load(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path.display()))?;
    let logging_guard = init_tracing(&config.logging)?;

    let affordances = config
        .affordance_set()
        .context("failed to build declared affordances")?;
    tracing::info!(
        target: "affordance",
        run_id = %logging_guard.run_id(),
        count = affordances.len(),
        "affordances_loaded"
    );

    if !args.check_only {
        println!("{}", serde_json::to_string_pretty(&affordances)?);
    }
    Ok(())
}
