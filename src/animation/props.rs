use serde_json::Value;

use crate::{animation::controls::Control, foundation::params::ParamBag};

/// Typed props for one animation.
///
/// Free-form JSON is parsed exactly once, when the animation instance is built.
/// Missing or malformed keys take the value from `Default`.
pub trait AnimationProps: Default + Clone + serde::Serialize {
    /// Panel metadata; every key is also a serialized field.
    const CONTROLS: &'static [Control];

    fn from_bag(bag: &ParamBag<'_>) -> Self;

    fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(v) => Self::from_bag(&ParamBag::new(v)),
            None => Self::default(),
        }
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}
