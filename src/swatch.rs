use crate::quantizer::QuantizedRgb;

const VIBRANT_MIN_BRIGHTNESS: f32 = 0.3;
const VIBRANT_MAX_BRIGHTNESS: f32 = 0.8;
const VIBRANT_CENTER_BRIGHTNESS: f32 = 0.55;

const WARM_BLUE_FACTOR: f32 = 1.5;

const LIGHT_MIN_YIQ: u32 = 128;

/// A selected color together with how many samples it stood for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u16,
    green: u16,
    blue: u16,
    population: usize,
}

impl Swatch {
    pub fn new((red, green, blue): QuantizedRgb, population: usize) -> Swatch {
        Self {
            red,
            green,
            blue,
            population,
        }
    }

    /// The quantized color. Channels may exceed 255, see [`crate::QuantizedRgb`].
    pub fn rgb(self) -> QuantizedRgb {
        (self.red, self.green, self.blue)
    }

    /// The color as it's displayed, with each channel clamped to 255.
    pub fn display_rgb(self) -> (u8, u8, u8) {
        let clamp = |channel: u16| channel.min(u8::MAX as u16) as u8;
        (clamp(self.red), clamp(self.green), clamp(self.blue))
    }

    pub fn population(self) -> usize {
        self.population
    }

    /// A CSS color string in the form `rgb(r, g, b)`.
    pub fn css(self) -> String {
        let (r, g, b) = self.display_rgb();
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// An uppercase hex color string in the form `#RRGGBB`.
    pub fn hex(self) -> String {
        let (r, g, b) = self.display_rgb();
        format!("#{:X}", palette::Srgb::new(r, g, b))
    }

    /// How vivid the color looks, from 0 to 1.
    ///
    /// This is the HSV-style saturation weighted by a brightness term that is 1 for mid-bright
    /// colors and falls off linearly towards black and white.
    pub fn vibrancy(self) -> f32 {
        vibrancy(self.rgb())
    }

    /// Whether the color leans towards reds and yellows.
    pub fn is_warm(self) -> bool {
        is_warm(self.rgb())
    }

    /// Whether dark text reads better than light text on top of this color.
    pub fn is_light(self) -> bool {
        is_light(self.display_rgb())
    }
}

pub fn vibrancy((r, g, b): QuantizedRgb) -> f32 {
    let max = r.max(g).max(b) as f32;
    let min = r.min(g).min(b) as f32;

    let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };
    let brightness = (r as f32 + g as f32 + b as f32) / 3.0 / 255.0;

    let brightness_weight = if (VIBRANT_MIN_BRIGHTNESS..=VIBRANT_MAX_BRIGHTNESS).contains(&brightness) {
        1.0
    } else {
        (1.0 - (brightness - VIBRANT_CENTER_BRIGHTNESS).abs() * 2.0).max(0.0)
    };

    saturation * brightness_weight
}

/// A linear approximation rather than a hue-circle test: red has to beat blue, and red and green
/// together have to clearly beat blue.
pub fn is_warm((r, g, b): QuantizedRgb) -> bool {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    r > b && r + g > b * WARM_BLUE_FACTOR
}

/// YIQ luma test, the same one used to pick text colors over swatches.
pub fn is_light((r, g, b): (u8, u8, u8)) -> bool {
    let yiq = (r as u32 * 2126 + g as u32 * 7152 + b as u32 * 722) / 10000;
    yiq >= LIGHT_MIN_YIQ
}
