//! # SandSkrit Export
//!
//! Converts a finished path into the two output representations:
//!
//! - **SVG**: a Cartesian preview centred on the table origin
//! - **THR**: one `theta rho` record per point, theta unwrapped so it keeps
//!   growing across turns, rho normalized to `[0, 1]`
//!
//! Exporters only borrow the point slice; they never modify a path.

pub mod output;
pub mod svg;
pub mod thr;

pub use output::write_file;
pub use svg::SvgExporter;
pub use thr::{parse_thr, unwrap_thetas, PolarPoint, ThrExporter};
