use super::{SceneTask, run_with_yasara};
use crate::cli::{Cli, IonArgs};
use crate::error::Result;
use crate::layout::OutputLayout;
use crate::settings::Settings;
use tracing::{debug, info, instrument};
use yas_scenes::core::io::iod::decode_ion_sites;
use yas_scenes::engine::scene::SceneInput;

#[instrument(skip_all, name = "ion_command")]
pub fn run(cli: &Cli, args: &IonArgs, settings: &Settings, layout: &OutputLayout) -> Result<()> {
    info!("Reading ion sites from {}", args.iod.display());
    let sites = decode_ion_sites(&args.iod)?;
    debug!("Found {} ion sites", sites.len());

    let task = SceneTask::new(cli, &args.iod, settings, layout);
    run_with_yasara(&task, SceneInput::Ion(&sites), settings, cli.quiet)?;
    Ok(())
}
