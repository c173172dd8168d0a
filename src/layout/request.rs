use crate::foundation::core::{Container, Point};

/// Declarative layout request, discriminated on `mode`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum LayoutRequest {
    /// Explicit `rows x cols` grid.
    Basic(BasicLayout),
    /// `count` points arranged by a named pattern.
    Math(MathLayout),
}

impl LayoutRequest {
    pub fn container(&self) -> &Container {
        match self {
            Self::Basic(b) => &b.container,
            Self::Math(m) => &m.container,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicLayout {
    pub rows: u32,
    pub cols: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_override: Option<f64>,
    #[serde(default)]
    pub pattern: BasicPattern,
    pub container: Container,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BasicPattern {
    #[default]
    Regular,
    Staggered,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MathLayout {
    /// Upper bound on emitted points.
    pub count: u32,
    /// Pattern id, e.g. `fibonacci` or `concentricSquares`.
    pub pattern: String,
    /// Pattern-specific parameters; unknown keys are ignored.
    #[serde(default)]
    pub pattern_params: serde_json::Value,
    pub container: Container,
}

/// One generated position plus pattern-specific structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm: Option<u32>,
}

impl LayoutPoint {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn grid(x: f64, y: f64, row: u32, col: u32) -> Self {
        Self {
            row: Some(row),
            col: Some(col),
            ..Self::at(x, y)
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutResult {
    pub points: Vec<LayoutPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_points(points: Vec<LayoutPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
