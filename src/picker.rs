use crate::{
    geometry::{Layout, Point},
    namer::ColorNamer,
    point::ColorPoint,
    swatch::Swatch,
};
use image::RgbaImage;

/// Reads colors under markers that are placed or dragged around on a displayed image.
///
/// Created with [`crate::ColorExtractor::picker`]. Unlike extraction, the picked color is the
/// exact pixel under the marker rather than a quantized one.
pub struct MarkerPicker<'a> {
    image: &'a RgbaImage,
    layout: Layout,
    namer: &'a dyn ColorNamer,
}

impl<'a> MarkerPicker<'a> {
    pub(crate) fn new(image: &'a RgbaImage, layout: Layout, namer: &'a dyn ColorNamer) -> Self {
        Self { image, layout, namer }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Build the marker for a position in the display.
    pub fn pick(&self, id: usize, display: Point) -> ColorPoint {
        let position = self.layout.display_to_normalized(display);
        let (r, g, b) = self.color_at(display);

        ColorPoint::new(id, position, Swatch::new((r as u16, g as u16, b as u16), 1), self.namer)
    }

    /// Move an existing marker to a new position in the display, keeping its id.
    pub fn move_point(&self, point: &mut ColorPoint, display: Point) {
        *point = self.pick(point.id, display);
    }

    /// Where an existing marker is shown in the display.
    pub fn display_position(&self, point: &ColorPoint) -> Point {
        self.layout.normalized_to_display(point.position())
    }

    /// The color of the pixel under a position in the display.
    ///
    /// The layout of a picker always has a non-empty image, so there's a pixel to read.
    pub fn color_at(&self, display: Point) -> (u8, u8, u8) {
        let pixel = self.layout.display_to_pixel(display);
        let (width, height) = self.image.dimensions();

        // the far edges map to one past the last pixel
        let x = (pixel.x.floor() as u32).min(width - 1);
        let y = (pixel.y.floor() as u32).min(height - 1);

        let [r, g, b, _] = self.image.get_pixel(x, y).0;
        (r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::Size, namer::NoNamer};
    use image::Rgba;

    fn two_tone() -> RgbaImage {
        // left half red, right half blue
        RgbaImage::from_fn(100, 50, |x, _| {
            if x < 50 {
                Rgba([200, 20, 20, 255])
            } else {
                Rgba([20, 20, 200, 255])
            }
        })
    }

    #[test]
    fn picks_the_pixel_under_the_marker() {
        let image = two_tone();
        // 100x50 in 200x200: rendered 200x100, 50 from the top
        let layout = Layout::new(Size::new(100.0, 50.0), Some(Size::new(200.0, 200.0))).unwrap();
        let picker = MarkerPicker::new(&image, layout, &NoNamer);

        let point = picker.pick(7, Point::new(50.0, 100.0));
        assert_eq!(point.id, 7);
        assert_eq!(point.color, "rgb(200, 20, 20)");
        assert_eq!(point.position(), Point::new(96.0, 192.0));
        assert_eq!(point.population, 1);

        assert_eq!(picker.color_at(Point::new(150.0, 100.0)), (20, 20, 200));
    }

    #[test]
    fn positions_off_the_image_read_the_edge() {
        let image = two_tone();
        let layout = Layout::new(Size::new(100.0, 50.0), Some(Size::new(200.0, 200.0))).unwrap();
        let picker = MarkerPicker::new(&image, layout, &NoNamer);

        assert_eq!(picker.color_at(Point::new(500.0, 500.0)), (20, 20, 200));
        assert_eq!(picker.color_at(Point::new(-5.0, 0.0)), (200, 20, 20));
    }

    #[test]
    fn moving_keeps_the_id() {
        let image = two_tone();
        let picker = MarkerPicker::new(&image, Layout::new(Size::new(100.0, 50.0), None).unwrap(), &NoNamer);

        let mut point = picker.pick(2, Point::new(10.0, 10.0));
        picker.move_point(&mut point, Point::new(75.0, 25.0));

        assert_eq!(point.id, 2);
        assert_eq!(point.color, "rgb(20, 20, 200)");
        assert_eq!(point.position(), Point::new(288.0, 192.0));
        assert_eq!(picker.display_position(&point), Point::new(75.0, 25.0));
    }
}
