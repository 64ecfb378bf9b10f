//! # Workflows Module
//!
//! Top-level entry points of the library. A workflow runs one complete scene
//! task against an engine and condenses everything that can go wrong into an
//! [`crate::engine::state::OutcomeReport`].
//!
//! - **Scene Workflow** ([`scene`]) - Engine setup, scene construction,
//!   guaranteed teardown and transcript verification.

pub mod scene;
