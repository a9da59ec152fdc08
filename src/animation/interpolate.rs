//! Easing functions for the animation engine.
//!
//! Every easing is a plain `fn(f32) -> f32` mapping linear progress to eased
//! progress. The engine clamps the eased result to `[0, 1]` before use, so an
//! easing only needs to be well-behaved on that range. Custom easings plug in
//! through [`InterpolationFn`] at engine construction.

/// Pure easing function: linear progress in, eased progress out.
pub type InterpolationFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Cubic ease-in: slow start, fast finish.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out: fast start, slow finish.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u + 1.0
}

/// Hermite smoothstep: eases both ends.
#[must_use]
pub fn smooth_step(t: f32) -> f32 {
    (3.0 - 2.0 * t) * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn all_easings_fix_endpoints() {
        for ease in [
            linear as InterpolationFn,
            ease_in,
            ease_out,
            smooth_step,
        ] {
            assert!(approx(ease(0.0), 0.0));
            assert!(approx(ease(1.0), 1.0));
        }
    }

    #[test]
    fn ease_in_midpoint() {
        assert!(approx(ease_in(0.5), 0.125));
    }

    #[test]
    fn ease_out_midpoint() {
        assert!(approx(ease_out(0.5), 0.875));
    }

    #[test]
    fn smooth_step_midpoint() {
        assert!(approx(smooth_step(0.5), 0.5));
    }
}
