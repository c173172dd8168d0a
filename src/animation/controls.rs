/// UI metadata for one tunable animation parameter.
///
/// The engine never reads these; control panels render them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// Props key the control writes.
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ControlKind,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlKind {
    Slider { min: f64, max: f64, step: f64 },
    Select { options: &'static [&'static str] },
    Toggle,
}

impl Control {
    pub const fn slider(
        key: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Slider { min, max, step },
        }
    }

    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Select { options },
        }
    }

    pub const fn toggle(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ControlKind::Toggle,
        }
    }
}
