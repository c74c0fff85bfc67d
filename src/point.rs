use crate::{
    geometry::Point,
    namer::{self, ColorNamer},
    swatch::Swatch,
};

/// A color marker placed on an image.
///
/// `x` and `y` are in the canonical marker space, see [`crate::CANONICAL_SIZE`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColorPoint {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub hex: String,
    pub name: String,
    pub vibrancy: f32,
    pub is_warm: bool,
    /// How many samples share this color. A marker placed by hand covers a single pixel.
    pub population: usize,
}

impl ColorPoint {
    pub fn new(id: usize, position: Point, swatch: Swatch, namer: &dyn ColorNamer) -> Self {
        let hex = swatch.hex();

        Self {
            id,
            x: position.x,
            y: position.y,
            color: swatch.css(),
            name: namer::name_or_unknown(namer, &hex),
            hex,
            vibrancy: swatch.vibrancy(),
            is_warm: swatch.is_warm(),
            population: swatch.population(),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Remove the marker with the given id. The other markers keep their ids.
///
/// Returns whether a marker was removed.
pub fn remove_point(points: &mut Vec<ColorPoint>, id: usize) -> bool {
    let before = points.len();
    points.retain(|point| point.id != id);
    points.len() != before
}
