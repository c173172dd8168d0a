use crate::foundation::error::{VectorGridError, VectorGridResult};

pub use kurbo::{Point, Rect, Vec2};

/// Layout container: the box points are fitted and centered into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
    /// Inset applied on all four sides before fitting.
    #[serde(default)]
    pub margin: f64,
}

impl Container {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// `true` when nothing can be laid out inside this container.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    fn inset(&self) -> f64 {
        if self.margin.is_finite() {
            self.margin.max(0.0)
        } else {
            0.0
        }
    }

    pub fn available_width(&self) -> f64 {
        (self.width - 2.0 * self.inset()).max(0.0)
    }

    pub fn available_height(&self) -> f64 {
        (self.height - 2.0 * self.inset()).max(0.0)
    }

    /// Margin-inset rectangle.
    pub fn available_rect(&self) -> Rect {
        let m = self.inset();
        Rect::new(
            m,
            m,
            m + self.available_width(),
            m + self.available_height(),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Largest radius that fits the available area around the center.
    pub fn max_radius(&self) -> f64 {
        self.available_width().min(self.available_height()) * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> VectorGridResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(VectorGridError::validation(
                "canvas width and height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Map a normalized `0..1` coordinate pair into canvas pixels.
    pub fn denormalize(&self, nx: f64, ny: f64) -> Point {
        Point::new(nx * self.width, ny * self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}
