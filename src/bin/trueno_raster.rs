//! trueno-raster - run drawing command scripts.
//!
//! Reads one command per line from a file or stdin and prints the resulting
//! point list for each command as `[[x,y],...]`.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trueno_raster::command::parse_script;
use trueno_raster::config::RasterConfig;
use trueno_raster::geometry::format_points;

#[derive(Parser)]
#[command(name = "trueno-raster")]
#[command(version, about = "Rasterize lines, polygons, ellipses and curves from a command script")]
struct Cli {
    /// Script file (reads stdin when omitted or "-")
    script: Option<PathBuf>,

    /// Configuration file (defaults to <config_dir>/trueno-raster/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // An explicit --config must load; the default location is optional
    let config = match cli.config {
        Some(path) => RasterConfig::load(path)?,
        None => RasterConfig::load_or_default(
            dirs::config_dir()
                .map(|p| p.join("trueno-raster/config.yaml"))
                .unwrap_or_default(),
        ),
    };
    tracing::debug!(?config, "configuration loaded");

    let script = match cli.script {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let commands = parse_script(&script)?;
    tracing::info!(commands = commands.iter().flatten().count(), "running script");

    for command in commands.iter().flatten() {
        let points = command.execute_with(&config)?;
        println!("{}", format_points(&points));
    }

    Ok(())
}
