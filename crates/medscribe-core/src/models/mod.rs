//! Domain models for the medscribe system.

mod entity;
mod record;
mod sentiment;
mod soap;
mod summary;

pub use entity::*;
pub use record::*;
pub use sentiment::*;
pub use soap::*;
pub use summary::*;
