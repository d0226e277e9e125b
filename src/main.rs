use anyhow::{Context, Result};
use pareto_fronts::{config::Config, driver};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .init();

    let config = Config::default();
    driver::run(&config).with_context(|| format!(
        "cannot plot the Pareto fronts of {} into {}",
        config.input_dir.display(), config.output.display()))?;
    info!("done");
    Ok(())
}
