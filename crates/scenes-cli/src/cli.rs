use crate::layout::SceneMode;
use crate::utils::validate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "scenes",
    author,
    version,
    about = "Create a YASARA scene of ion sites or symmetry contacts from a WHAT IF list.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YASARA process id. Use a different pid for every YASARA instance
    /// running on the same machine.
    pub ypid: u32,

    /// PDB file location.
    #[arg(value_parser = validate::existing_file)]
    pub pdb_file_path: PathBuf,

    /// PDB accession code.
    #[arg(value_parser = validate::pdb_id)]
    pub pdb_id: String,

    /// PDB file source.
    #[arg(value_enum)]
    pub source: Source,

    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress console log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the settings file in TOML format
    #[arg(long, env = "SCENES_SETTINGS", value_name = "PATH")]
    pub settings: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    #[value(name = "PDB")]
    Pdb,
    #[value(name = "REDO")]
    Redo,
}

impl Source {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pdb => "PDB",
            Self::Redo => "REDO",
        }
    }
}

/// YASARA scene type.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a YASARA scene of ion sites.
    Ion(IonArgs),
    /// Create a YASARA scene with coloured symmetry contacts.
    Symm(SymmArgs),
}

impl Commands {
    pub fn mode(&self) -> SceneMode {
        match self {
            Self::Ion(_) => SceneMode::Ion,
            Self::Symm(_) => SceneMode::Symm,
        }
    }
}

#[derive(Args, Debug)]
pub struct IonArgs {
    /// WHAT IF ion coordination list (bzip2ed), e.g. 1abc.iod.bz2
    #[arg(value_parser = validate::existing_file)]
    pub iod: PathBuf,
}

#[derive(Args, Debug)]
pub struct SymmArgs {
    /// WHAT IF symmetry contacts list (bzip2ed), e.g. 1crn.ss2.bz2
    #[arg(value_parser = validate::existing_file)]
    pub ss2: PathBuf,
}
