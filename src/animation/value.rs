//! Value types the animation engine can drive.
//!
//! The engine runs one generic algorithm for every value shape. [`Animatable`]
//! maps a value into its [`Lanes`] image (one `f32` per axis) and back;
//! all divides, finiteness guards, clamps and boundary comparisons are applied
//! through `Lanes`, axis by axis, so a 2-D vector never couples its axes.

use glam::{IVec2, Vec2};

/// Floating-point workspace for animation math, one lane per axis.
///
/// Comparisons built on [`Lanes::all`] are conjunctive over the axes, not
/// lexicographic: every axis must satisfy the relation.
pub trait Lanes: Copy + core::fmt::Debug {
    /// All lanes set to `v`.
    fn splat(v: f32) -> Self;

    /// Applies `f` to each lane.
    fn map(self, f: impl Fn(f32) -> f32) -> Self;

    /// Combines matching lanes of `self` and `rhs` with `f`.
    fn zip(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self;

    /// True only if `f` holds on every lane pair.
    fn all(self, rhs: Self, f: impl Fn(f32, f32) -> bool) -> bool;
}

impl Lanes for f32 {
    fn splat(v: f32) -> Self {
        v
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        f(self)
    }

    fn zip(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        f(self, rhs)
    }

    fn all(self, rhs: Self, f: impl Fn(f32, f32) -> bool) -> bool {
        f(self, rhs)
    }
}

impl Lanes for Vec2 {
    fn splat(v: f32) -> Self {
        Vec2::splat(v)
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Vec2::new(f(self.x), f(self.y))
    }

    fn zip(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Vec2::new(f(self.x, rhs.x), f(self.y, rhs.y))
    }

    fn all(self, rhs: Self, f: impl Fn(f32, f32) -> bool) -> bool {
        f(self.x, rhs.x) && f(self.y, rhs.y)
    }
}

/// A value the engine can animate: scalar or 2-D, float or integer.
///
/// Discrete types round on the way back from lane space; the engine itself
/// never sees the rounding.
pub trait Animatable: Copy + core::fmt::Debug + 'static {
    type Lanes: Lanes;

    fn to_lanes(self) -> Self::Lanes;
    fn from_lanes(lanes: Self::Lanes) -> Self;
}

impl Animatable for f32 {
    type Lanes = f32;

    fn to_lanes(self) -> f32 {
        self
    }

    fn from_lanes(lanes: f32) -> Self {
        lanes
    }
}

impl Animatable for i32 {
    type Lanes = f32;

    fn to_lanes(self) -> f32 {
        self as f32
    }

    // Round half-up along the number line: 49.5 -> 50, 49.4 -> 49, and
    // -49.6 -> -50 (not truncation toward zero).
    fn from_lanes(lanes: f32) -> Self {
        (lanes + 0.5).floor() as i32
    }
}

impl Animatable for Vec2 {
    type Lanes = Vec2;

    fn to_lanes(self) -> Vec2 {
        self
    }

    fn from_lanes(lanes: Vec2) -> Self {
        lanes
    }
}

impl Animatable for IVec2 {
    type Lanes = Vec2;

    fn to_lanes(self) -> Vec2 {
        self.as_vec2()
    }

    fn from_lanes(lanes: Vec2) -> Self {
        (lanes + 0.5).floor().as_ivec2()
    }
}
