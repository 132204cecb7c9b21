//! Domain layer
//!
//! Contains the category model and the ports that look it up.
//! - `entities`: Domain models
//! - `ports`: Trait definitions for data access

pub mod entities;
pub mod ports;
