use serde_json::Value;

use crate::{
    animation::{
        controls::Control,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
    },
    foundation::{error::VectorGridResult, math::normalize_degrees, params::ParamBag},
    vector::item::AnimatedVectorItem,
};

/// Every vector back at its rest state.
pub(crate) struct NoneAnimation;

impl AnimationImpl for NoneAnimation {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        _ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        vectors.iter_mut().for_each(AnimatedVectorItem::reset_to_base);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticAngleProps {
    /// Degrees.
    pub angle: f64,
}

impl Default for StaticAngleProps {
    fn default() -> Self {
        Self { angle: 0.0 }
    }
}

impl AnimationProps for StaticAngleProps {
    const CONTROLS: &'static [Control] = &[Control::slider("angle", "Angle", 0.0, 360.0, 1.0)];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        Self {
            angle: normalize_degrees(bag.f64_or("angle", 0.0)),
        }
    }
}

/// One constant angle for the whole grid, ignoring position and time.
pub(crate) struct StaticAngle {
    props: StaticAngleProps,
}

impl StaticAngle {
    pub(crate) fn new(props: StaticAngleProps) -> Self {
        Self { props }
    }
}

impl AnimationImpl for StaticAngle {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        _ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        for v in vectors {
            v.reset_to_base();
            v.angle = self.props.angle;
        }
        Ok(())
    }
}

/// Delegates to the host closure; behaves like `none` until one is installed.
pub(crate) struct CustomAnimation {
    props: Value,
}

impl CustomAnimation {
    pub(crate) fn new(props: Option<Value>) -> Self {
        Self {
            props: props.unwrap_or(Value::Null),
        }
    }
}

impl AnimationImpl for CustomAnimation {
    fn update(
        &mut self,
        prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        if let Some(f) = ctx.custom.as_mut() {
            return f(vectors, ctx.params, &self.props);
        }
        NoneAnimation.update(prev, vectors, ctx)
    }
}
