use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tallyterm::config::Config;
use tallyterm::logging::init_tracing;
use tallyterm::replay::{parse_actions, render_to_text, replay};
use tallyterm::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "tallyterm", version, about = "A counter you can press from the terminal")]
struct Cli {
    /// Path to config file (default: <config_dir>/tallyterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not capture the mouse, even if enabled in config
    #[arg(long)]
    no_mouse: bool,

    /// Apply '+'/'-' presses headlessly and print the final frame
    #[arg(long, value_name = "ACTIONS", allow_hyphen_values = true)]
    replay: Option<String>,

    /// Frame width for --replay
    #[arg(long, default_value_t = 80, requires = "replay")]
    width: u16,

    /// Frame height for --replay
    #[arg(long, default_value_t = 16, requires = "replay")]
    height: u16,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(actions) = cli.replay.as_deref() {
        let actions = parse_actions(actions)?;
        let mut app = replay(&actions);
        let frame = render_to_text(&mut app, cli.width, cli.height)
            .context("Failed to render replay frame")?;
        println!("{}", frame);
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .with_context(|| format!("Failed to load config from '{}'", config_path.display()))?;
    let mouse = config.ui.mouse && !cli.no_mouse;
    tracing::info!(config = %config_path.display(), "Starting tallyterm");

    runtime::run(&config, mouse).context("Terminal UI failed")?;
    Ok(())
}
