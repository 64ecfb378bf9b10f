use super::{SceneTask, run_with_yasara};
use crate::cli::{Cli, SymmArgs};
use crate::error::Result;
use crate::layout::OutputLayout;
use crate::settings::Settings;
use tracing::{debug, info, instrument};
use yas_scenes::core::io::ss2::decode_symmetry_contacts;
use yas_scenes::engine::scene::SceneInput;

#[instrument(skip_all, name = "symm_command")]
pub fn run(cli: &Cli, args: &SymmArgs, settings: &Settings, layout: &OutputLayout) -> Result<()> {
    info!("Reading symmetry contacts from {}", args.ss2.display());
    let contacts = decode_symmetry_contacts(&args.ss2)?;
    debug!("Found {} residues with symmetry contact records", contacts.len());

    let task = SceneTask::new(cli, &args.ss2, settings, layout);
    run_with_yasara(&task, SceneInput::Symmetry(&contacts), settings, cli.quiet)?;
    Ok(())
}
