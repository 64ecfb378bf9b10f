mod cli;
mod commands;
mod error;
mod layout;
mod logging;
mod settings;
mod utils;
mod whynot;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use crate::layout::OutputLayout;
use crate::settings::Settings;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings)?;

    let mode = cli.command.mode();
    let scene = settings.scene(mode);
    let layout = OutputLayout::new(&settings.scenes_root, mode, &cli.pdb_id, &scene.name);
    layout.ensure_dir()?;

    logging::setup_logging(cli.verbose, cli.quiet, Some(&layout.program_log))?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 YASARA scenes v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);
    debug!("Writing output to {}", layout.dir.display());

    let command_result = match &cli.command {
        Commands::Ion(args) => {
            info!("Dispatching to 'ion' command.");
            commands::ion::run(&cli, args, &settings, &layout)
        }
        Commands::Symm(args) => {
            info!("Dispatching to 'symm' command.");
            commands::symm::run(&cli, args, &settings, &layout)
        }
    };

    match &command_result {
        Ok(()) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
