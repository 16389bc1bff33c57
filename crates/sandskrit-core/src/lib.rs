//! # SandSkrit Core
//!
//! Core types shared by every SandSkrit crate.
//! Provides the table-relative [`Point`], polar angle helpers and the
//! error types reported by path construction and export.

pub mod error;
pub mod geometry;

pub use error::{Error, ExportError, ExportResult, PathError, PathResult, Result};
pub use geometry::{forward_sweep, normalize_degrees, wrap_angle, Point};
