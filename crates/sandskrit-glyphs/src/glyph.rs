use sandskrit_core::Point;
use serde::{Deserialize, Serialize};

/// A character's stroke outline.
///
/// `path` lives in a local baseline frame: `y = 0` is the baseline, negative
/// `y` is above it and positive `y` is a descender. `width` is the advance and
/// `start_offset` shifts the outline horizontally relative to the cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    #[serde(with = "point_pairs")]
    pub path: Vec<Point>,
    pub width: f64,
    #[serde(default)]
    pub start_offset: f64,
}

impl Glyph {
    pub fn new(path: Vec<Point>, width: f64, start_offset: f64) -> Self {
        Self {
            path,
            width,
            start_offset,
        }
    }

    /// Highest point of the outline (most negative `y`), never below the baseline.
    pub fn min_y(&self) -> f64 {
        self.path.iter().map(|p| p.y).fold(0.0, f64::min)
    }

    /// Lowest point of the outline (most positive `y`), never above the baseline.
    pub fn max_y(&self) -> f64 {
        self.path.iter().map(|p| p.y).fold(0.0, f64::max)
    }
}

/// Serializes points as `[x, y]` pairs, the layout of the table files.
mod point_pairs {
    use sandskrit_core::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        pairs.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
    }
}
