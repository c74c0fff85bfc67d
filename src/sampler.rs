use crate::filter::{self, Filter};
use image::RgbaImage;

/// A pixel that made it through the filters, with its position in the source image. Alpha has
/// done its job by then and isn't kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PixelSample {
    pub x: u32,
    pub y: u32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Reads every `stride`th pixel on both axes, row by row, keeping the ones all the filters allow.
pub(crate) fn sample_pixels(image: &RgbaImage, stride: u32, filters: &[Box<dyn Filter>]) -> Vec<PixelSample> {
    debug_assert!(stride > 0);

    let (width, height) = image.dimensions();
    let step = stride as usize;
    let mut samples = Vec::new();

    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let [r, g, b, a] = image.get_pixel(x, y).0;
            let brightness = filter::brightness(r, g, b);

            if filters.iter().all(|filter| filter.is_allowed((r, g, b, a), brightness)) {
                samples.push(PixelSample { x, y, r, g, b });
            }
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DefaultFilter;
    use image::Rgba;

    fn default_filters() -> Vec<Box<dyn Filter>> {
        vec![Box::new(DefaultFilter)]
    }

    #[test]
    fn samples_on_a_strided_grid() {
        let image = RgbaImage::from_pixel(20, 10, Rgba([200, 100, 50, 255]));
        let samples = sample_pixels(&image, 8, &default_filters());

        let positions: Vec<_> = samples.iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(positions, vec![(0, 0), (8, 0), (16, 0), (0, 8), (8, 8), (16, 8)]);
    }

    #[test]
    fn skips_filtered_pixels() {
        let mut image = RgbaImage::from_pixel(16, 16, Rgba([200, 100, 50, 255]));
        image.put_pixel(0, 0, Rgba([200, 100, 50, 10]));
        image.put_pixel(8, 0, Rgba([0, 0, 0, 255]));
        image.put_pixel(0, 8, Rgba([255, 255, 255, 255]));

        let samples = sample_pixels(&image, 8, &default_filters());

        assert_eq!(samples.len(), 1);
        assert_eq!((samples[0].x, samples[0].y), (8, 8));
    }

    #[test]
    fn no_filters_keeps_everything() {
        let image = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
        assert_eq!(sample_pixels(&image, 8, &[]).len(), 4);
    }

    #[test]
    fn stride_of_one_reads_every_pixel() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([120, 120, 120, 255]));
        assert_eq!(sample_pixels(&image, 1, &default_filters()).len(), 6);
    }
}
