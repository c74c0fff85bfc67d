use palette::Srgb;

/// The name given to a color when no namer could resolve it.
pub const UNKNOWN_COLOR_NAME: &str = "unknown";

/// A trait used to give extracted colors human readable names.
///
/// The color is passed as a `#RRGGBB` hex string. Returning `None` is not an error: the color is
/// labelled [`UNKNOWN_COLOR_NAME`] instead.
///
/// See [`crate::ColorExtractor::namer`] on how to replace the default namer.
pub trait ColorNamer {
    fn name_of(&self, hex: &str) -> Option<String>;
}

impl<F> ColorNamer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn name_of(&self, hex: &str) -> Option<String> {
        self(hex)
    }
}

/// Resolve a name for `hex`, falling back to [`UNKNOWN_COLOR_NAME`].
pub(crate) fn name_or_unknown(namer: &dyn ColorNamer, hex: &str) -> String {
    namer
        .name_of(hex)
        .unwrap_or_else(|| UNKNOWN_COLOR_NAME.to_string())
}

/// A namer that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNamer;
impl ColorNamer for NoNamer {
    fn name_of(&self, _: &str) -> Option<String> {
        None
    }
}

/// Names a color after the closest entry of a built-in table of common named colors, by plain
/// RGB distance. Only unparsable hex strings go unnamed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNamer;
impl ColorNamer for NearestNamer {
    fn name_of(&self, hex: &str) -> Option<String> {
        let color: Srgb<u8> = match hex.parse() {
            Ok(color) => color,
            Err(e) => {
                log::debug!("can't name {:?}: {}", hex, e);
                return None;
            }
        };

        NAMED_COLORS
            .iter()
            .min_by_key(|(_, named)| distance_squared(color, *named))
            .map(|(name, _)| name.to_string())
    }
}

fn distance_squared(color: Srgb<u8>, (r, g, b): (u8, u8, u8)) -> u32 {
    let d = |lhs: u8, rhs: u8| (lhs as i32 - rhs as i32).pow(2) as u32;
    d(color.red, r) + d(color.green, g) + d(color.blue, b)
}

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("Black", (0, 0, 0)),
    ("Dim Gray", (105, 105, 105)),
    ("Gray", (128, 128, 128)),
    ("Dark Gray", (169, 169, 169)),
    ("Silver", (192, 192, 192)),
    ("Light Gray", (211, 211, 211)),
    ("Gainsboro", (220, 220, 220)),
    ("White Smoke", (245, 245, 245)),
    ("White", (255, 255, 255)),
    ("Slate Gray", (112, 128, 144)),
    ("Dark Slate Gray", (47, 79, 79)),
    ("Maroon", (128, 0, 0)),
    ("Dark Red", (139, 0, 0)),
    ("Brown", (165, 42, 42)),
    ("Firebrick", (178, 34, 34)),
    ("Crimson", (220, 20, 60)),
    ("Red", (255, 0, 0)),
    ("Indian Red", (205, 92, 92)),
    ("Light Coral", (240, 128, 128)),
    ("Salmon", (250, 128, 114)),
    ("Dark Salmon", (233, 150, 122)),
    ("Tomato", (255, 99, 71)),
    ("Coral", (255, 127, 80)),
    ("Orange Red", (255, 69, 0)),
    ("Dark Orange", (255, 140, 0)),
    ("Orange", (255, 165, 0)),
    ("Sienna", (160, 82, 45)),
    ("Saddle Brown", (139, 69, 19)),
    ("Chocolate", (210, 105, 30)),
    ("Peru", (205, 133, 63)),
    ("Sandy Brown", (244, 164, 96)),
    ("Burlywood", (222, 184, 135)),
    ("Tan", (210, 180, 140)),
    ("Rosy Brown", (188, 143, 143)),
    ("Wheat", (245, 222, 179)),
    ("Beige", (245, 245, 220)),
    ("Goldenrod", (218, 165, 32)),
    ("Dark Goldenrod", (184, 134, 11)),
    ("Gold", (255, 215, 0)),
    ("Yellow", (255, 255, 0)),
    ("Khaki", (240, 230, 140)),
    ("Dark Khaki", (189, 183, 107)),
    ("Olive", (128, 128, 0)),
    ("Olive Drab", (107, 142, 35)),
    ("Yellow Green", (154, 205, 50)),
    ("Chartreuse", (127, 255, 0)),
    ("Lawn Green", (124, 252, 0)),
    ("Lime", (0, 255, 0)),
    ("Lime Green", (50, 205, 50)),
    ("Pale Green", (152, 251, 152)),
    ("Light Green", (144, 238, 144)),
    ("Forest Green", (34, 139, 34)),
    ("Green", (0, 128, 0)),
    ("Dark Green", (0, 100, 0)),
    ("Sea Green", (46, 139, 87)),
    ("Medium Sea Green", (60, 179, 113)),
    ("Dark Sea Green", (143, 188, 143)),
    ("Spring Green", (0, 255, 127)),
    ("Medium Aquamarine", (102, 205, 170)),
    ("Aquamarine", (127, 255, 212)),
    ("Turquoise", (64, 224, 208)),
    ("Light Sea Green", (32, 178, 170)),
    ("Teal", (0, 128, 128)),
    ("Dark Cyan", (0, 139, 139)),
    ("Cyan", (0, 255, 255)),
    ("Pale Turquoise", (175, 238, 238)),
    ("Cadet Blue", (95, 158, 160)),
    ("Powder Blue", (176, 224, 230)),
    ("Light Blue", (173, 216, 230)),
    ("Sky Blue", (135, 206, 235)),
    ("Deep Sky Blue", (0, 191, 255)),
    ("Steel Blue", (70, 130, 180)),
    ("Dodger Blue", (30, 144, 255)),
    ("Cornflower Blue", (100, 149, 237)),
    ("Royal Blue", (65, 105, 225)),
    ("Blue", (0, 0, 255)),
    ("Medium Blue", (0, 0, 205)),
    ("Dark Blue", (0, 0, 139)),
    ("Navy", (0, 0, 128)),
    ("Midnight Blue", (25, 25, 112)),
    ("Slate Blue", (106, 90, 205)),
    ("Dark Slate Blue", (72, 61, 139)),
    ("Medium Purple", (147, 112, 219)),
    ("Blue Violet", (138, 43, 226)),
    ("Indigo", (75, 0, 130)),
    ("Dark Orchid", (153, 50, 204)),
    ("Dark Violet", (148, 0, 211)),
    ("Purple", (128, 0, 128)),
    ("Dark Magenta", (139, 0, 139)),
    ("Magenta", (255, 0, 255)),
    ("Orchid", (218, 112, 214)),
    ("Violet", (238, 130, 238)),
    ("Plum", (221, 160, 221)),
    ("Thistle", (216, 191, 216)),
    ("Lavender", (230, 230, 250)),
    ("Medium Violet Red", (199, 21, 133)),
    ("Deep Pink", (255, 20, 147)),
    ("Hot Pink", (255, 105, 180)),
    ("Pale Violet Red", (219, 112, 147)),
    ("Pink", (255, 192, 203)),
    ("Light Pink", (255, 182, 193)),
    ("Misty Rose", (255, 228, 225)),
    ("Peach Puff", (255, 218, 185)),
    ("Moccasin", (255, 228, 181)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches() {
        assert_eq!(NearestNamer.name_of("#FF0000").as_deref(), Some("Red"));
        assert_eq!(NearestNamer.name_of("#000080").as_deref(), Some("Navy"));
        assert_eq!(NearestNamer.name_of("ffa500").as_deref(), Some("Orange"));
    }

    #[test]
    fn nearest_match() {
        assert_eq!(NearestNamer.name_of("#FE0102").as_deref(), Some("Red"));
        assert_eq!(NearestNamer.name_of("#C06030").as_deref(), Some("Chocolate"));
    }

    #[test]
    fn unparsable_hex_is_unnamed() {
        assert_eq!(NearestNamer.name_of("not a color"), None);
        assert_eq!(name_or_unknown(&NearestNamer, "#GG0000"), UNKNOWN_COLOR_NAME);
    }

    #[test]
    fn closures_and_fallback() {
        let namer = |hex: &str| (hex == "#C06030").then(|| "Rust".to_string());

        assert_eq!(name_or_unknown(&namer, "#C06030"), "Rust");
        assert_eq!(name_or_unknown(&namer, "#000000"), UNKNOWN_COLOR_NAME);
        assert_eq!(name_or_unknown(&NoNamer, "#C06030"), UNKNOWN_COLOR_NAME);
    }
}
