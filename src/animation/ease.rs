#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match crate::foundation::params::canonical_id(s).as_str() {
            "linear" => Some(Self::Linear),
            "inquad" | "easeinquad" => Some(Self::InQuad),
            "outquad" | "easeoutquad" => Some(Self::OutQuad),
            "inoutquad" | "easeinoutquad" => Some(Self::InOutQuad),
            "incubic" | "easeincubic" => Some(Self::InCubic),
            "outcubic" | "easeoutcubic" => Some(Self::OutCubic),
            "inoutcubic" | "easeinoutcubic" => Some(Self::InOutCubic),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
