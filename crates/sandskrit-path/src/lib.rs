//! # SandSkrit Path
//!
//! Builds one continuous polyline for a sand table. The pen never lifts:
//! every shape begins where the previous one ended and every relocation is
//! drawn.
//!
//! - Spirals out to a radius (which also sets the drawable boundary)
//! - Spirals in to the centre
//! - Constant-radius loops
//! - Straight lines, subdivided so polar interpolation keeps them straight
//! - Text along the pen's circle, or as a block of centred lines
//!
//! ```no_run
//! use sandskrit_path::{LineConfig, PathBuilder};
//!
//! let mut builder = PathBuilder::new(0.0, 0.0);
//! builder.add_spiral_out(100.0, 20.0, 0.0)?;
//! builder.add_lines_of_text(&[LineConfig::new("Hello", 12.0)], 1.4)?;
//! builder.add_outer_loop(2.0, 0.0)?;
//! builder.save_thr(std::path::Path::new("hello.thr"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod lines;
mod spiral;
mod stroke;
pub mod text;

pub use builder::PathBuilder;
pub use lines::LineConfig;
pub use text::TextMetrics;
