#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod math;
pub mod utils;

pub use animation::interpolate::{self, InterpolationFn};
pub use animation::value::{Animatable, Lanes};
pub use animation::{ANIMATION_TICK_MS, AnimationEngine, RepeatMode, SlotId};
pub use math::{IRect, Rect};
pub use utils::time::Timer;
