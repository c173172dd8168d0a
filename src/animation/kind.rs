use crate::{
    animation::{controls::Control, impls},
    foundation::{
        error::{VectorGridError, VectorGridResult},
        params::canonical_id,
    },
};

/// Every animation the engine can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    None,
    StaticAngle,
    RandomLoop,
    SmoothWaves,
    MouseInteraction,
    SeaWaves,
    PerlinFlow,
    CenterPulse,
    DirectionalFlow,
    Vortex,
    Lissajous,
    Flocking,
    RandomWalk,
    Custom,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 14] = [
        Self::None,
        Self::StaticAngle,
        Self::RandomLoop,
        Self::SmoothWaves,
        Self::MouseInteraction,
        Self::SeaWaves,
        Self::PerlinFlow,
        Self::CenterPulse,
        Self::DirectionalFlow,
        Self::Vortex,
        Self::Lissajous,
        Self::Flocking,
        Self::RandomWalk,
        Self::Custom,
    ];

    /// Stable registry key.
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StaticAngle => "staticAngle",
            Self::RandomLoop => "randomLoop",
            Self::SmoothWaves => "smoothWaves",
            Self::MouseInteraction => "mouseInteraction",
            Self::SeaWaves => "seaWaves",
            Self::PerlinFlow => "perlinFlow",
            Self::CenterPulse => "centerPulse",
            Self::DirectionalFlow => "directionalFlow",
            Self::Vortex => "vortex",
            Self::Lissajous => "lissajous",
            Self::Flocking => "flocking",
            Self::RandomWalk => "randomWalk",
            Self::Custom => "custom",
        }
    }

    /// Resolve a registry key; case and `_`/`-` separators are ignored.
    pub fn parse(id: &str) -> VectorGridResult<Self> {
        let key = canonical_id(id);
        Self::ALL
            .into_iter()
            .find(|k| canonical_id(k.id()) == key)
            .ok_or_else(|| VectorGridError::UnknownAnimation(id.trim().to_string()))
    }

    /// Props used when the caller supplies none, as a JSON object.
    pub fn default_props(self) -> serde_json::Value {
        impls::default_props(self)
    }

    /// Panel metadata for the tunable props.
    pub fn controls(self) -> &'static [Control] {
        impls::controls(self)
    }
}

impl std::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/kind.rs"]
mod tests;
