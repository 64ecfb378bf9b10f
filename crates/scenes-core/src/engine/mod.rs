//! # Engine Module
//!
//! The binding to the YASARA visualization engine and everything needed to
//! judge whether a scene was built.
//!
//! - **Binding** ([`binding`]) - The [`binding::SceneEngine`] capability interface
//! - **Commands** ([`command`]) - YASARA commands in macro syntax
//! - **Scenes** ([`scene`]) - Construction procedures for each scene mode
//! - **Engines** ([`yasara`], and `recording` with the `testing` feature) - The
//!   macro-process engine and an in-process recorder
//! - **Verification** ([`transcript`], [`verify`]) - Transcript scanning and
//!   expected line counts
//! - **Task plumbing** ([`config`], [`state`], [`progress`], [`error`])

pub mod binding;
pub mod command;
pub mod config;
pub mod error;
pub mod progress;
#[cfg(any(test, feature = "testing"))]
pub mod recording;
pub mod scene;
pub mod state;
pub mod transcript;
pub mod verify;
pub mod yasara;
