//! Estimates the climate impact of transportation infrastructure projects:
//! greenhouse-gas reduction, air quality, public health and carbon sequestration
//! over the lifetime of the project.
#![forbid(unsafe_code)]
mod air_quality;
pub mod csv;
pub mod format;
mod ghg;
mod health;
mod impacts;
mod modal_split;
mod model;
mod parameters;
pub mod report;
mod sequestration;
mod session;
pub mod summary;
pub mod tables;

pub use air_quality::*;
pub use ghg::*;
pub use health::*;
pub use impacts::*;
pub use modal_split::*;
pub use model::*;
pub use parameters::*;
pub use sequestration::*;
pub use session::*;
