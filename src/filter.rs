const MIN_ALPHA: u8 = 128;
const BLACK_MAX_BRIGHTNESS: f32 = 30.0;
const WHITE_MIN_BRIGHTNESS: f32 = 225.0;

/// A trait used to implement filters for the pixel sampling pass.
///
/// Every sampled pixel is run through the extractor's filters before it is quantized. A pixel
/// that any filter disallows contributes nothing to the palette. This trait allows the library
/// consumer to implement custom filters.
///
/// See [`crate::ColorExtractor::add_filter`] on how to add filters to the sampling pass.
pub trait Filter {
    /// Return whether a given pixel should be allowed or not. The pixel's average brightness
    /// `(r + g + b) / 3`, in the range 0 to 255, is given alongside the raw channels for
    /// convenience.
    fn is_allowed(&self, rgba: (u8, u8, u8, u8), brightness: f32) -> bool;
}

impl<F> Filter for F
where
    F: Fn((u8, u8, u8, u8), f32) -> bool,
{
    fn is_allowed(&self, rgba: (u8, u8, u8, u8), brightness: f32) -> bool {
        self(rgba, brightness)
    }
}

/// The default filter included in every [`crate::ColorExtractor`] by default.
///
/// This filter will disallow mostly transparent pixels, and pixels close to black or white,
/// which tend to be background or outlines rather than part of the image's palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilter;
impl Filter for DefaultFilter {
    fn is_allowed(&self, (_, _, _, a): (u8, u8, u8, u8), brightness: f32) -> bool {
        !is_transparent(a) && !is_black(brightness) && !is_white(brightness)
    }
}

fn is_transparent(a: u8) -> bool {
    a < MIN_ALPHA
}

fn is_black(brightness: f32) -> bool {
    brightness < BLACK_MAX_BRIGHTNESS
}

fn is_white(brightness: f32) -> bool {
    brightness > WHITE_MIN_BRIGHTNESS
}

pub(crate) fn brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0
}
