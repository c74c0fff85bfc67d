// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to pick a handful of distinct colors out of an image and place them as markers on it.
//!
//! Extraction samples the image on a coarse grid, groups the sampled colors into quantized
//! buckets, and greedily picks the buckets that are furthest apart in RGB space, starting with the
//! most common one. Each picked color becomes a [`ColorPoint`] positioned at one of the pixels it
//! was sampled from, in a canonical coordinate space that doesn't depend on how large the image is
//! displayed.
//!
//! ```no_run
//! use swatchpoints::ColorExtractor;
//!
//! let image = swatchpoints::image::open("photo.jpg").unwrap().to_rgba8();
//! let points = ColorExtractor::from_image(image)
//!     .count(6)
//!     .container(480.0, 384.0)
//!     .extract()
//!     .unwrap();
//!
//! for point in points {
//!     println!("{} {} at ({:.1}, {:.1})", point.hex, point.name, point.x, point.y);
//! }
//! ```

mod error;
mod filter;
mod geometry;
mod namer;
mod picker;
mod point;
mod quantizer;
mod sampler;
mod selector;
mod swatch;

pub const DEFAULT_COLOR_COUNT: usize = 5;
pub const DEFAULT_SAMPLE_STRIDE: u32 = 8;

pub use crate::{
    error::{ExtractError, Result},
    filter::{DefaultFilter, Filter},
    geometry::{normalize_in_box, normalize_position, ContainRect, Layout, Point, Size, CANONICAL_SIZE},
    namer::{ColorNamer, NearestNamer, NoNamer, UNKNOWN_COLOR_NAME},
    picker::MarkerPicker,
    point::{remove_point, ColorPoint},
    quantizer::{Bucket, QuantizedRgb, QUANTIZE_STEP},
    selector::{color_distance, min_distance_to, MAX_CANDIDATES, MIN_BUCKET_POPULATION},
    swatch::Swatch,
};
pub use image;
pub use palette;

use image::RgbaImage;
use quantizer::ColorQuantizer;

/// Extract up to `count` distinct colors from an RGBA8 pixel buffer with the default settings.
///
/// `buffer` must hold exactly `width * height` pixels of four bytes each. See [`ColorExtractor`]
/// for the settings this uses and how to change them.
pub fn extract_colors(buffer: &[u8], width: u32, height: u32, count: usize) -> Result<Vec<ColorPoint>> {
    ColorExtractor::from_raw(buffer, width, height)?.count(count).extract()
}

/// Configures and runs color extraction on an image.
///
/// By default up to [`DEFAULT_COLOR_COUNT`] colors are extracted, every
/// [`DEFAULT_SAMPLE_STRIDE`]th pixel is sampled on both axes, the [`DefaultFilter`] is applied to
/// the samples, colors are named with the [`NearestNamer`] and the image is assumed to be shown at
/// its natural size.
pub struct ColorExtractor {
    image: RgbaImage,
    count: usize,
    stride: u32,
    container: Option<Size>,
    filters: Vec<Box<dyn Filter>>,
    namer: Box<dyn ColorNamer>,
}

impl ColorExtractor {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            count: DEFAULT_COLOR_COUNT,
            stride: DEFAULT_SAMPLE_STRIDE,
            container: None,
            filters: vec![Box::new(DefaultFilter)],
            namer: Box::new(NearestNamer),
        }
    }

    /// Copy an RGBA8 pixel buffer into a new extractor.
    pub fn from_raw(buffer: &[u8], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ExtractError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize * 4;
        let size_error = || ExtractError::BufferSize {
            width,
            height,
            expected,
            actual: buffer.len(),
        };

        if buffer.len() != expected {
            return Err(size_error());
        }

        let image = RgbaImage::from_raw(width, height, buffer.to_vec()).ok_or_else(size_error)?;
        Ok(Self::from_image(image))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The most colors to extract. Fewer are returned when the image doesn't have enough distinct
    /// colors.
    pub fn count(self, count: usize) -> Self {
        Self { count, ..self }
    }

    /// Sample every `stride`th pixel on both axes. Must be at least 1.
    pub fn sample_stride(self, stride: u32) -> Self {
        Self { stride, ..self }
    }

    /// The size of the container the image is contain-fitted into when displayed.
    pub fn container(self, width: f64, height: f64) -> Self {
        Self {
            container: Some(Size::new(width, height)),
            ..self
        }
    }

    pub fn clear_container(self) -> Self {
        Self {
            container: None,
            ..self
        }
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    pub fn namer<N>(self, namer: N) -> Self
    where
        N: ColorNamer + 'static,
    {
        Self {
            namer: Box::new(namer),
            ..self
        }
    }

    /// How the image is laid out on the display.
    pub fn layout(&self) -> Result<Layout> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(ExtractError::InvalidDimensions { width, height });
        }

        Layout::new(Size::from((width, height)), self.container)
    }

    /// The buckets that are eligible for selection, most populated first.
    pub fn candidates(&self) -> Result<Vec<Bucket>> {
        if self.stride == 0 {
            return Err(ExtractError::InvalidStride);
        }

        let samples = sampler::sample_pixels(&self.image, self.stride, &self.filters);
        let buckets = samples.iter().collect::<ColorQuantizer>().into_buckets();
        let bucket_count = buckets.len();
        let candidates = selector::rank_candidates(buckets);

        log::debug!(
            "{} samples from a {}x{} image fell into {} buckets, {} are candidates",
            samples.len(),
            self.image.width(),
            self.image.height(),
            bucket_count,
            candidates.len()
        );

        Ok(candidates)
    }

    /// The buckets picked for the palette, in the order they were picked.
    pub fn select(&self) -> Result<Vec<Bucket>> {
        let candidates = self.candidates()?;
        Ok(selector::select_diverse(candidates, self.count))
    }

    /// Run the extraction. The image isn't modified, so this may be called any number of times and
    /// always gives the same result.
    pub fn extract(&self) -> Result<Vec<ColorPoint>> {
        let layout = self.layout()?;
        let selected = self.select()?;

        log::debug!("selected {} of {} requested colors", selected.len(), self.count);

        let points = selected
            .iter()
            .enumerate()
            .filter_map(|(i, bucket)| {
                let (x, y) = bucket.representative_position()?;
                let position = layout.pixel_to_normalized(Point::new(x as f64, y as f64));
                let swatch = Swatch::new(bucket.rgb(), bucket.count());

                Some(ColorPoint::new(i + 1, position, swatch, self.namer.as_ref()))
            })
            .collect();

        Ok(points)
    }

    /// A picker for placing and dragging markers on this image.
    pub fn picker(&self) -> Result<MarkerPicker<'_>> {
        Ok(MarkerPicker::new(&self.image, self.layout()?, self.namer.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn uniform_image_gives_a_single_point() {
        let image = RgbaImage::from_pixel(128, 128, Rgba([200, 100, 50, 255]));
        let points = ColorExtractor::from_image(image).extract().unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id, 1);
        assert_eq!(points[0].color, "rgb(192, 96, 48)");
        assert!(points[0].is_warm);
        // 256 samples, the middle one is the first sample of row y = 64
        assert_eq!(points[0].position(), Point::new(0.0, 192.0));
        assert_eq!(points[0].population, 256);
    }

    #[test]
    fn zero_count_gives_nothing() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([200, 100, 50, 255]));
        assert!(ColorExtractor::from_image(image).count(0).extract().unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_buffers() {
        assert_eq!(
            extract_colors(&[], 0, 10, 5).unwrap_err(),
            ExtractError::InvalidDimensions { width: 0, height: 10 }
        );
        assert_eq!(
            extract_colors(&[0; 15], 2, 2, 5).unwrap_err(),
            ExtractError::BufferSize {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn rejects_bad_settings() {
        let extractor = ColorExtractor::from_raw(&[100; 64], 4, 4).unwrap();
        assert_eq!(
            extractor.sample_stride(0).extract().unwrap_err(),
            ExtractError::InvalidStride
        );

        let extractor = ColorExtractor::from_raw(&[100; 64], 4, 4).unwrap();
        assert!(matches!(
            extractor.container(0.0, 100.0).extract(),
            Err(ExtractError::InvalidContainer { .. })
        ));
    }

    #[test]
    fn rejects_empty_images() {
        let extractor = ColorExtractor::from_image(RgbaImage::new(0, 0));

        assert_eq!(
            extractor.extract().unwrap_err(),
            ExtractError::InvalidDimensions { width: 0, height: 0 }
        );
        assert!(matches!(
            extractor.picker(),
            Err(ExtractError::InvalidDimensions { width: 0, height: 0 })
        ));

        let extractor = ColorExtractor::from_image(RgbaImage::new(16, 0));
        assert!(extractor.extract().is_err());
        assert!(extractor.picker().is_err());
    }

    #[test]
    fn container_places_points_on_the_rendered_image() {
        // 128x64 in a 256x256 container: the image is letterboxed, the canonical position of a
        // pixel is the same as without a container
        let image = RgbaImage::from_pixel(128, 64, Rgba([40, 120, 200, 255]));
        let extractor = ColorExtractor::from_image(image);

        let plain = extractor.extract().unwrap();
        let contained = extractor.container(256.0, 256.0).extract().unwrap();

        assert_eq!(plain.len(), 1);
        assert_eq!(plain, contained);
        // 128 samples, the middle one is (0, 32)
        assert_eq!(contained[0].position(), Point::new(0.0, 192.0));
    }

    #[test]
    fn custom_filters_and_namer() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([10, 10, 10, 255]));

        assert!(ColorExtractor::from_image(image.clone()).extract().unwrap().is_empty());

        let points = ColorExtractor::from_image(image)
            .clear_filters()
            .namer(NoNamer)
            .extract()
            .unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].color, "rgb(0, 0, 0)");
        assert_eq!(points[0].name, UNKNOWN_COLOR_NAME);
        assert_eq!(points[0].vibrancy, 0.0);
    }
}
