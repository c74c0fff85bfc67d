//! Conversions between image pixels, display coordinates and the canonical marker space.
//!
//! Markers are stored in a square canonical space [`CANONICAL_SIZE`] units on a side, so they stay
//! put no matter how large the image ends up being displayed. Displays show the image "contain"
//! fitted into a container: scaled to fit while keeping its aspect ratio, centered, with empty
//! bars along one axis.

use crate::error::{ExtractError, Result};

/// The side length of the canonical space marker coordinates are expressed in.
pub const CANONICAL_SIZE: f64 = 384.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Where a contain-fitted image ends up inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainRect {
    pub offset_x: f64,
    pub offset_y: f64,
    pub render_width: f64,
    pub render_height: f64,
}

/// An image's natural size together with the container it's displayed in, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    natural: Size,
    container: Option<Size>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    fn is_positive(self) -> bool {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        valid(self.width) && valid(self.height)
    }

    pub(crate) fn validate_image(self) -> Result<Self> {
        if self.is_positive() {
            Ok(self)
        } else {
            Err(ExtractError::InvalidImageSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub(crate) fn validate_container(self) -> Result<Self> {
        if self.is_positive() {
            Ok(self)
        } else {
            Err(ExtractError::InvalidContainer {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

impl ContainRect {
    /// Fit an image of the given natural size into a container without cropping or stretching it.
    pub fn fit(natural: Size, container: Size) -> Result<Self> {
        Ok(Self::fit_unchecked(
            natural.validate_image()?,
            container.validate_container()?,
        ))
    }

    fn fit_unchecked(natural: Size, container: Size) -> Self {
        let image_aspect = natural.aspect_ratio();

        if image_aspect > container.aspect_ratio() {
            // the image is wider than the container: fill the width, center vertically
            let render_height = container.width / image_aspect;

            Self {
                offset_x: 0.0,
                offset_y: (container.height - render_height) / 2.0,
                render_width: container.width,
                render_height,
            }
        } else {
            let render_width = container.height * image_aspect;

            Self {
                offset_x: (container.width - render_width) / 2.0,
                offset_y: 0.0,
                render_width,
                render_height: container.height,
            }
        }
    }

    /// Map a position in image pixels to where it's shown in the container.
    pub fn pixel_to_display(&self, pixel: Point, natural: Size) -> Point {
        Point {
            x: self.offset_x + (pixel.x / natural.width) * self.render_width,
            y: self.offset_y + (pixel.y / natural.height) * self.render_height,
        }
    }

    /// Map a position in the container to the canonical space. Positions outside the rendered
    /// image are pulled back to its nearest edge.
    pub fn normalize(&self, display: Point) -> Point {
        let x = (display.x - self.offset_x).max(0.0).min(self.render_width);
        let y = (display.y - self.offset_y).max(0.0).min(self.render_height);

        Point {
            x: x / self.render_width * CANONICAL_SIZE,
            y: y / self.render_height * CANONICAL_SIZE,
        }
    }

    /// The inverse of [`ContainRect::normalize`] for positions inside the canonical space.
    pub fn denormalize(&self, normalized: Point) -> Point {
        Point {
            x: self.offset_x + normalized.x / CANONICAL_SIZE * self.render_width,
            y: self.offset_y + normalized.y / CANONICAL_SIZE * self.render_height,
        }
    }

    /// Map a position in the container back onto the image's pixels, clamped to the image.
    pub fn display_to_pixel(&self, display: Point, natural: Size) -> Point {
        let x = (display.x - self.offset_x).max(0.0).min(self.render_width);
        let y = (display.y - self.offset_y).max(0.0).min(self.render_height);

        Point {
            x: x / self.render_width * natural.width,
            y: y / self.render_height * natural.height,
        }
    }
}

impl Layout {
    pub fn new(natural: Size, container: Option<Size>) -> Result<Self> {
        Ok(Self {
            natural: natural.validate_image()?,
            container: container.map(Size::validate_container).transpose()?,
        })
    }

    pub fn natural(&self) -> Size {
        self.natural
    }

    pub fn container(&self) -> Option<Size> {
        self.container
    }

    pub fn contain_rect(&self) -> Option<ContainRect> {
        self.container
            .map(|container| ContainRect::fit_unchecked(self.natural, container))
    }

    /// Where a pixel of the image is shown. Without a container the image is shown at its
    /// natural size, so display and pixel coordinates coincide.
    pub fn pixel_to_display(&self, pixel: Point) -> Point {
        match self.contain_rect() {
            Some(rect) => rect.pixel_to_display(pixel, self.natural),
            None => pixel,
        }
    }

    /// The canonical coordinate of a pixel of the image.
    pub fn pixel_to_normalized(&self, pixel: Point) -> Point {
        self.display_to_normalized(self.pixel_to_display(pixel))
    }

    /// The canonical coordinate of a position in the display.
    pub fn display_to_normalized(&self, display: Point) -> Point {
        match self.contain_rect() {
            Some(rect) => rect.normalize(display),
            None => normalize_in_box_unchecked(display, self.natural, self.natural.width),
        }
    }

    /// The image pixel under a position in the display, clamped to the image.
    pub fn display_to_pixel(&self, display: Point) -> Point {
        match self.contain_rect() {
            Some(rect) => rect.display_to_pixel(display, self.natural),
            None => Point {
                x: display.x.max(0.0).min(self.natural.width),
                y: display.y.max(0.0).min(self.natural.height),
            },
        }
    }

    /// The position in the display a canonical coordinate is shown at.
    pub fn normalized_to_display(&self, normalized: Point) -> Point {
        match self.contain_rect() {
            Some(rect) => rect.denormalize(normalized),
            None => Point {
                x: normalized.x / CANONICAL_SIZE * self.natural.width,
                y: normalized.y / CANONICAL_SIZE * self.natural.height,
            },
        }
    }
}

/// Convert a position in the display into the canonical space.
///
/// With a container the image is assumed to be contain-fitted into it, and the position is
/// clamped to the rendered image first. Without one, the image is taken to be displayed at its
/// natural size and [`normalize_in_box`] is used, which doesn't clamp.
///
/// Fails when either size isn't finite and positive.
pub fn normalize_position(display: Point, natural: Size, container: Option<Size>) -> Result<Point> {
    Ok(Layout::new(natural, container)?.display_to_normalized(display))
}

/// Convert a position into the canonical space using only the width of the box the image is
/// displayed in. The box height is derived from the image's aspect ratio.
///
/// Unlike the container-aware path, this neither accounts for letterboxing nor clamps, so the two
/// can disagree for the same logical position.
pub fn normalize_in_box(display: Point, natural: Size, box_width: f64) -> Result<Point> {
    let natural = natural.validate_image()?;
    Size::new(box_width, box_width * natural.height / natural.width).validate_container()?;

    Ok(normalize_in_box_unchecked(display, natural, box_width))
}

fn normalize_in_box_unchecked(display: Point, natural: Size, box_width: f64) -> Point {
    let aspect_ratio = natural.height / natural.width;

    Point {
        x: (display.x / box_width) * CANONICAL_SIZE,
        y: (display.y / (box_width * aspect_ratio)) * CANONICAL_SIZE,
    }
}
