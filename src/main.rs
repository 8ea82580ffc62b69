use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use pixmanip::commands::{run_script, Command};
use pixmanip::models::{AppConfig, ImageStore};

/// Filter used until the config file has been read
const BOOTSTRAP_LOG_FILTER: &str = "pixmanip=warn";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[derive(Parser)]
#[command(name = "pixmanip")]
#[command(about = "Pixmanip - scriptable image manipulation with error diffusion dithering")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG file to black and white
    Dither {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,
    },
    /// Run a command script (load / dither / save, one per line)
    Run {
        /// Script file path
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Subscriber first, so config warnings are not lost
    let filter = init_tracing();
    let config = AppConfig::from_env();
    apply_log_filter(filter, &config);

    match cli.command {
        Some(Commands::Dither { input, output }) => run_dither_command(input, output, &config),
        Some(Commands::Run { script }) => run_script_command(&script, &config),
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

/// Minimal logging for CLI, on stderr.
///
/// Returns a handle for swapping in the configured filter, or `None` when
/// RUST_LOG is set and takes precedence.
fn init_tracing() -> Option<FilterHandle> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new(BOOTSTRAP_LOG_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();

    (!from_env).then_some(handle)
}

fn apply_log_filter(handle: Option<FilterHandle>, config: &AppConfig) {
    let Some(handle) = handle else {
        return;
    };
    if let Err(e) = handle.reload(EnvFilter::new(&config.log_filter)) {
        tracing::warn!(%e, filter = %config.log_filter, "Failed to apply log filter");
    }
}

/// Dither a single file (no script needed)
fn run_dither_command(input: PathBuf, output: PathBuf, config: &AppConfig) -> anyhow::Result<()> {
    const SOURCE: &str = "input";
    const RESULT: &str = "dithered";

    let summary = format!("Dithered {} -> {}", input.display(), output.display());
    let steps = [
        Command::Load {
            path: input,
            name: SOURCE.to_string(),
        },
        Command::Dither {
            src: SOURCE.to_string(),
            dest: RESULT.to_string(),
        },
        Command::Save {
            name: RESULT.to_string(),
            path: output,
        },
    ];

    let mut store = ImageStore::new();
    for step in &steps {
        step.execute(&mut store, config)?;
    }

    println!("{summary}");
    Ok(())
}

/// Execute a command script against a fresh image store
fn run_script_command(script: &Path, config: &AppConfig) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(script)
        .map_err(|e| anyhow::anyhow!("Failed to read script {}: {e}", script.display()))?;

    let mut store = ImageStore::new();
    let executed = run_script(&text, &mut store, config)
        .map_err(|e| anyhow::anyhow!("Script {} failed: {e}", script.display()))?;

    tracing::info!(
        script = %script.display(),
        executed,
        images = store.len(),
        "Script complete"
    );
    println!("Executed {executed} commands from {}", script.display());
    Ok(())
}

/// Display status and configuration information
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Pixmanip v{VERSION}");
    println!("Scriptable image manipulation with error diffusion dithering\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    println!(
        "  base_dir   = {}",
        config
            .base_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(current directory)".to_string())
    );
    println!("  log_filter = {}", config.log_filter);
    println!("  overwrite  = {}", config.overwrite);

    println!("\nCommands:");
    println!("  pixmanip dither <INPUT> <OUTPUT>   Dither a PNG file");
    println!("  pixmanip run <SCRIPT>              Run a command script");
    println!("\nScript commands:");
    println!("  load <path> <name>");
    println!("  dither <src> <dest>");
    println!("  save <path> <name>");
    println!("\nRun 'pixmanip --help' for more details.");
}
