//! YASARA commands issued while building a scene.
//!
//! [`Command`] renders to YASARA macro syntax through its `Display`
//! implementation; the same text is what YASARA echoes into its transcript
//! after the `>` prompt.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RecordLog { stem: PathBuf },
    ConsoleOff,
    Processors { cpu_threads: u32 },
    LoadPdb(PathBuf),
    Style {
        backbone: &'static str,
        sidechain: &'static str,
    },
    ColorAll(&'static str),
    HideAll,
    LabelPar {
        font: &'static str,
        height: f64,
        color: &'static str,
    },
    ShowAtom(String),
    BallAtom(String),
    ShowRes(String),
    StickRes(String),
    PropRes { selection: String, value: f64 },
    ColorRes {
        selection: String,
        color: &'static str,
    },
    ColorAtom {
        selection: &'static str,
        color: &'static str,
    },
    ColorBg {
        top: &'static str,
        bottom: &'static str,
    },
    StickRadius(u32),
    BallStickRadius { ball: u32, stick: u32 },
    NiceOriAll,
    Fog { density: u32 },
    HudOff,
    LabelAtom { selection: String, text: String },
    CenterAtom(String),
    ZoomAtom { selection: String, steps: u32 },
    SaveSce(PathBuf),
    Exit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordLog { stem } => write!(f, "RecordLog {},Append=No", stem.display()),
            Self::ConsoleOff => write!(f, "Console Off"),
            Self::Processors { cpu_threads } => write!(f, "Processors CPUThreads={cpu_threads}"),
            Self::LoadPdb(path) => write!(f, "LoadPDB {}", path.display()),
            Self::Style {
                backbone,
                sidechain,
            } => write!(f, "Style Backbone={backbone},Sidechain={sidechain}"),
            Self::ColorAll(color) => write!(f, "ColorAll {color}"),
            Self::HideAll => write!(f, "HideAll"),
            Self::LabelPar {
                font,
                height,
                color,
            } => write!(
                f,
                "LabelPar Font={font},Height={height},Color={color},OnTop=Yes"
            ),
            Self::ShowAtom(selection) => write!(f, "ShowAtom {selection}"),
            Self::BallAtom(selection) => write!(f, "BallAtom {selection}"),
            Self::ShowRes(selection) => write!(f, "ShowRes {selection}"),
            Self::StickRes(selection) => write!(f, "StickRes {selection}"),
            Self::PropRes { selection, value } => write!(f, "PropRes {selection},{value}"),
            Self::ColorRes { selection, color } => write!(f, "ColorRes {selection},{color}"),
            Self::ColorAtom { selection, color } => write!(f, "ColorAtom {selection},{color}"),
            Self::ColorBg { top, bottom } => write!(f, "ColorBG {top},{bottom}"),
            Self::StickRadius(percent) => write!(f, "StickRadius {percent}"),
            Self::BallStickRadius { ball, stick } => {
                write!(f, "BallStickRadius Ball={ball},Stick={stick}")
            }
            Self::NiceOriAll => write!(f, "NiceOriAll"),
            Self::Fog { density } => write!(f, "Fog Density={density}"),
            Self::HudOff => write!(f, "HUD Off"),
            Self::LabelAtom { selection, text } => write!(f, "LabelAtom {selection},Text='{text}'"),
            Self::CenterAtom(selection) => write!(f, "CenterAtom {selection},CoordSys=Global"),
            Self::ZoomAtom { selection, steps } => write!(f, "ZoomAtom {selection},Steps={steps}"),
            Self::SaveSce(path) => write!(f, "SaveSce {}", path.display()),
            Self::Exit => write!(f, "Exit"),
        }
    }
}
