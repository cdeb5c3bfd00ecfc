use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use service_version::cli::{run_compose, ComposeArgs};
use service_version::clock::SystemClock;
use service_version::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "service-version",
    version,
    about = "Compose a dated build version from the package.json version"
)]
struct Args {
    /// Build identifier appended to the version
    #[arg(value_name = "BUILD_ID", allow_hyphen_values = true)]
    build_id: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Manifest to read instead of package.json")]
    manifest: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let composed = run_compose(
        ComposeArgs {
            manifest: args.manifest,
            build_id: args.build_id,
        },
        &config,
        &SystemClock,
    )?;

    ui::display_version(&composed);
    Ok(())
}
