pub mod engine;
pub mod interpolate;
pub mod value;

pub use engine::{ANIMATION_TICK_MS, AnimationEngine, RepeatMode, SlotId};
pub use interpolate::{InterpolationFn, ease_in, ease_out, linear, smooth_step};
pub use value::{Animatable, Lanes};
