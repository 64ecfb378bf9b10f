//! Scene construction procedures.
//!
//! Each procedure loads the structure, issues a fixed display prologue, a
//! block of commands per record and a fixed epilogue, and saves the scene. The
//! transcript line counts in [`super::verify`] depend on these sequences.

use super::binding::SceneEngine;
use super::command::Command;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::verify::{expected_ion_lines, expected_symmetry_lines};
use crate::core::models::contact::SymmetryContacts;
use crate::core::models::ion::IonSites;
use crate::core::selection;
use std::path::Path;
use tracing::debug;

const BACKGROUND: Command = Command::ColorBg {
    top: "000040",
    bottom: "30c0ff",
};
const STICK_RADIUS_PERCENT: u32 = 40;
const BALL_STICK_RADIUS: Command = Command::BallStickRadius {
    ball: 50,
    stick: 50,
};
/// Contact counts are scaled into the 0..1 property range; 10 or more
/// contacts share the top colour.
const CONTACT_PROPERTY_SCALE: f64 = 10.0;

/// Parsed list-file content for one scene mode.
#[derive(Debug, Clone, Copy)]
pub enum SceneInput<'a> {
    Symmetry(&'a SymmetryContacts),
    Ion(&'a IonSites),
}

impl SceneInput<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Symmetry(_) => "symmetry contacts",
            Self::Ion(_) => "ion sites",
        }
    }

    /// Number of records (residues or ions) the scene displays.
    pub fn record_count(&self) -> usize {
        match self {
            Self::Symmetry(contacts) => contacts.len(),
            Self::Ion(sites) => sites.len(),
        }
    }

    pub fn expected_transcript_lines(&self) -> usize {
        match self {
            Self::Symmetry(contacts) => expected_symmetry_lines(contacts),
            Self::Ion(sites) => expected_ion_lines(sites),
        }
    }

    /// Display commands issued between loading the structure and saving the
    /// scene.
    pub fn commands(&self) -> Result<Vec<Command>, EngineError> {
        match self {
            Self::Symmetry(contacts) => Ok(symmetry_commands(contacts)),
            Self::Ion(sites) => ion_commands(sites),
        }
    }
}

/// Shows a C-alpha trace coloured by the number of symmetry contacts, with
/// side chains for residues that have any.
pub fn symmetry_commands(contacts: &SymmetryContacts) -> Vec<Command> {
    let mut commands = vec![
        Command::Style {
            backbone: "Trace",
            sidechain: "Off",
        },
        Command::ColorAll("Grey"),
    ];

    for (residue, &count) in contacts {
        if count > 0 {
            commands.push(Command::ShowAtom(selection::sidechain(residue)));
        }
        commands.push(Command::PropRes {
            selection: residue.clone(),
            value: f64::from(count) / CONTACT_PROPERTY_SCALE,
        });
        commands.push(Command::ColorRes {
            selection: residue.clone(),
            color: "Property",
        });
    }

    commands.extend([
        BACKGROUND,
        Command::StickRadius(STICK_RADIUS_PERCENT),
        BALL_STICK_RADIUS,
        Command::NiceOriAll,
    ]);
    commands
}

/// Shows only the ions and their coordinating residues, zoomed in on the
/// first ion.
pub fn ion_commands(sites: &IonSites) -> Result<Vec<Command>, EngineError> {
    let first = sites.first().ok_or(EngineError::EmptyScene)?;

    let mut commands = vec![
        Command::Style {
            backbone: "Stick",
            sidechain: "Stick",
        },
        Command::HideAll,
        Command::LabelPar {
            font: "Arial",
            height: 0.5,
            color: "Yellow",
        },
    ];

    for site in sites.iter() {
        commands.push(Command::ShowAtom(site.ion_selection.clone()));
        commands.push(Command::BallAtom(site.ion_selection.clone()));
        for residue in &site.coordinating_residues {
            commands.push(Command::ShowRes(residue.clone()));
            commands.push(Command::StickRes(residue.clone()));
        }
    }

    commands.extend([
        BACKGROUND,
        Command::StickRadius(STICK_RADIUS_PERCENT),
        BALL_STICK_RADIUS,
        Command::ColorAtom {
            selection: "Element C",
            color: "Grey",
        },
        Command::ColorAtom {
            selection: "Element N",
            color: "Blue",
        },
        Command::ColorAtom {
            selection: "Element O",
            color: "Red",
        },
        Command::Fog { density: 0 },
        Command::HudOff,
        Command::LabelAtom {
            selection: first.ion_selection.clone(),
            text: first.ion_element_name.clone(),
        },
        Command::CenterAtom(first.ion_selection.clone()),
        Command::ZoomAtom {
            selection: first.ion_selection.clone(),
            steps: 0,
        },
    ]);
    Ok(commands)
}

/// Loads the structure, issues the scene's display commands and saves it.
///
/// The first failing command aborts the build.
pub fn build<E: SceneEngine + ?Sized>(
    engine: &mut E,
    input: &SceneInput<'_>,
    structure_path: &Path,
    scene_path: &Path,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    let commands = input.commands()?;

    debug!("Loading structure {}", structure_path.display());
    engine.load_structure(structure_path)?;

    reporter.report(Progress::TaskStart {
        total_steps: commands.len() as u64,
    });
    for command in &commands {
        engine.execute(command)?;
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    debug!("Saving YASARA scene to {}", scene_path.display());
    engine.save_scene(scene_path)
}
