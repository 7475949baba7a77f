//! # PathKit Core
//!
//! Core types and utilities for PathKit.
//! Provides the error taxonomy shared by every crate, the `Vector`
//! geometry primitive used by controls, and the small amount of unit
//! handling the file formats need.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, FormatError, GeometryError, ModelError, Result};
pub use geometry::Vector;
pub use units::{UnitConverter, UnitOfLength};
