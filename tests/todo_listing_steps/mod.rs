//! Step definitions for to-do listing scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
