//! Testing infrastructure for crewbook integration tests.
//!
//! - `TestWorld`: isolated data directory plus a CLI runner
//! - `fixtures`: a company with two crews and hired workers, built through the CLI
//! - `assertions`: checks on the JSON envelope

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::CrewFixture;
pub use world::{CliResult, TestWorld};
