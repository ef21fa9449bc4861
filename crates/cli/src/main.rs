use anomaly_eval::{app, cli::Cli};
use clap::Parser;
use config::Config;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };
    cli.apply(&mut config);

    let mut out = io::stdout().lock();
    if cli.dump_config {
        out.write_all(config.to_toml()?.as_bytes())?;
        return Ok(());
    }

    let Some(pred_path) = cli.pred_path.as_deref() else {
        anyhow::bail!("No predictions file given");
    };
    app::run(pred_path, &config, &mut out)?;
    Ok(())
}
