//! # YASARA Scenes Core Library
//!
//! Turns WHAT IF list files (crystal symmetry contacts and ion coordination
//! sites) into YASARA scenes and decides, from the engine transcript, whether a
//! scene was really produced.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ResidueId`,
//!   `IonSites`), the fixed-width list-file readers and the YASARA selection
//!   syntax.
//!
//! - **[`engine`]: The Engine Binding.** The narrow capability interface to the
//!   visualization engine (`SceneEngine`), the macro-process implementation, the
//!   scene construction procedures, transcript scanning and outcome verification.
//!
//! - **[`workflows`]: The Public API.** One call per scene task that configures
//!   the engine, builds the scene, always tears the engine down and verifies the
//!   transcript, reporting a single pass/fail outcome.

pub mod core;
pub mod engine;
pub mod workflows;
