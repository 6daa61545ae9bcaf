//! Forecast domain module.
//!
//! Per-invocation value types for the provider call chain plus the reply
//! text renderer.
//!
//! # Module Structure
//!
//! - `location` - Coordinates and GeoResult
//! - `conditions` - CurrentConditions scalars
//! - `report` - reply text assembly (golden-format rendering)

mod conditions;
mod location;
pub mod report;

pub use conditions::CurrentConditions;
pub use location::{Coordinates, GeoResult};
