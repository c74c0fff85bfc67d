use crate::sampler::PixelSample;
use std::collections::HashMap;

/// The width of a quantization cell on each channel.
pub const QUANTIZE_STEP: u16 = 24;

/// A quantized color as an `(r, g, b)` triple. Channels are multiples of [`QUANTIZE_STEP`] and may
/// exceed 255 (a channel value of 255 rounds up to 264), so they're kept wider than a byte.
pub type QuantizedRgb = (u16, u16, u16);

/// A quantization cell with every sampled position that fell into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    rgb: QuantizedRgb,
    positions: Vec<(u32, u32)>,
}

/// Groups samples into quantized color buckets, remembering the order buckets were first seen in.
///
/// The order matters: it breaks ties between equally populated buckets later on, so the buckets
/// live in a vector with a separate key index rather than in the map itself.
#[derive(Debug, Default)]
pub(crate) struct ColorQuantizer {
    buckets: Vec<Bucket>,
    index: HashMap<QuantizedRgb, usize>,
}

impl Bucket {
    pub(crate) fn new(rgb: QuantizedRgb) -> Self {
        Self {
            rgb,
            positions: Vec::new(),
        }
    }

    pub fn rgb(&self) -> QuantizedRgb {
        self.rgb
    }

    /// How many samples fell into this bucket.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// The sample positions in this bucket, in the order they were read.
    pub fn positions(&self) -> &[(u32, u32)] {
        &self.positions
    }

    /// The position at the middle index of the bucket's positions. It stands in for a centroid
    /// without being dragged around by stray same-colored pixels elsewhere in the image.
    pub fn representative_position(&self) -> Option<(u32, u32)> {
        self.positions.get(self.positions.len() / 2).copied()
    }

    pub(crate) fn push(&mut self, position: (u32, u32)) {
        self.positions.push(position);
    }
}

impl ColorQuantizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sample: &PixelSample) {
        let key = (quantize(sample.r), quantize(sample.g), quantize(sample.b));

        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.buckets.push(Bucket::new(key));
                self.index.insert(key, self.buckets.len() - 1);
                self.buckets.len() - 1
            }
        };

        self.buckets[slot].push((sample.x, sample.y));
    }

    /// Consume the quantizer, returning its buckets in first-seen order.
    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }
}

impl<'a> FromIterator<&'a PixelSample> for ColorQuantizer {
    fn from_iter<I: IntoIterator<Item = &'a PixelSample>>(iter: I) -> Self {
        let mut quantizer = ColorQuantizer::new();
        for sample in iter {
            quantizer.add(sample);
        }

        quantizer
    }
}

/// Round a channel to the nearest multiple of [`QUANTIZE_STEP`], halves rounding up.
pub(crate) fn quantize(channel: u8) -> u16 {
    let step = QUANTIZE_STEP;
    ((channel as u16 + step / 2) / step) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: u32, y: u32, (r, g, b): (u8, u8, u8)) -> PixelSample {
        PixelSample { x, y, r, g, b }
    }

    #[test]
    fn quantizes_to_nearest_step() {
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(11), 0);
        assert_eq!(quantize(12), 24);
        assert_eq!(quantize(50), 48);
        assert_eq!(quantize(100), 96);
        assert_eq!(quantize(200), 192);
        assert_eq!(quantize(252), 264);
        assert_eq!(quantize(255), 264);
    }

    #[test]
    fn quantize_matches_float_rounding() {
        for channel in 0..=255u8 {
            let expected = ((channel as f64 / 24.0).round() * 24.0) as u16;
            assert_eq!(quantize(channel), expected, "channel {}", channel);
        }
    }

    #[test]
    fn buckets_keep_insertion_order_and_positions() {
        let samples = [
            sample(0, 0, (200, 100, 50)),
            sample(8, 0, (10, 200, 90)),
            sample(16, 0, (201, 99, 52)),
            sample(0, 8, (10, 200, 90)),
            sample(8, 8, (199, 101, 49)),
        ];

        let buckets = samples.iter().collect::<ColorQuantizer>().into_buckets();

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].rgb(), (192, 96, 48));
        assert_eq!(buckets[0].positions(), &[(0, 0), (16, 0), (8, 8)]);
        assert_eq!(buckets[1].rgb(), (0, 192, 96));
        assert_eq!(buckets[1].count(), 2);
        assert!(buckets.iter().all(|b| b.count() == b.positions().len()));
    }

    #[test]
    fn representative_position_is_the_middle_entry() {
        let mut bucket = Bucket::new((0, 0, 0));
        assert_eq!(bucket.representative_position(), None);

        for i in 0..4 {
            bucket.push((i, i * 2));
        }

        assert_eq!(bucket.representative_position(), Some((2, 4)));
    }
}
