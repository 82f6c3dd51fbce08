//! Core data models for the standings engine.

mod ids;
mod metric;
mod sport;
mod standings;
mod team;

pub use ids::*;
pub use metric::*;
pub use sport::*;
pub use standings::*;
pub use team::*;
