//! The property-animation engine.
//!
//! An [`AnimationEngine`] owns a set of slots, one per animated property.
//! A slot wraps a setter closure; the engine computes the property's value
//! from elapsed time each [`tick`](AnimationEngine::tick) and pushes it
//! through the setter. Starting an animation broadcasts the same segment
//! parameters to every slot, and the configured [`RepeatMode`] fires only
//! once all slots have finished, so a cycle always resynchronizes on the
//! slowest property.
//!
//! The engine raises no errors and never panics on degenerate input: a zero
//! or non-finite progress quotient is replaced by zero ("no movement this
//! tick"), and a zero duration completes instantly. NaN is never pushed into
//! a setter.

use crate::animation::interpolate::{InterpolationFn, linear};
use crate::animation::value::{Animatable, Lanes};

/// Fixed per-frame step (ms) suggested for UI animations, roughly 30 Hz.
pub const ANIMATION_TICK_MS: u32 = 32;

/// What happens once every slot has finished its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Slots stay parked at their terminal value.
    None,
    /// Every slot rewinds to `start` (pushed once) and replays forward.
    Always,
    /// Every slot reverses direction and animates back.
    PingPong,
}

/// Identifies a registered slot. Valid for the engine's whole lifetime;
/// slots are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

struct Slot<T: Animatable> {
    setter: Box<dyn FnMut(T)>,
    active: bool,
    /// `+1` forward, `-1` reverse, `0` before any animation has started.
    direction: i8,
    /// Milliseconds since the current segment began.
    elapsed: f32,
    start: T::Lanes,
    end: T::Lanes,
    /// Units of `T` per second, oriented start -> end.
    rate: T::Lanes,
}

/// Tick-driven animation engine, generic over the animated value type.
///
/// Repeat mode and easing are fixed at construction. Call
/// [`add_slot`](Self::add_slot) for each property to animate, then one of the
/// `start_*` methods, then [`tick`](Self::tick) once per frame.
pub struct AnimationEngine<T: Animatable> {
    slots: Vec<Slot<T>>,
    repeat: RepeatMode,
    interpolation: InterpolationFn,
}

impl<T: Animatable> AnimationEngine<T> {
    #[must_use]
    pub fn new(repeat: RepeatMode, interpolation: InterpolationFn) -> Self {
        Self {
            slots: Vec::new(),
            repeat,
            interpolation,
        }
    }

    /// Engine with linear easing.
    #[must_use]
    pub fn with_repeat(repeat: RepeatMode) -> Self {
        Self::new(repeat, linear)
    }

    /// Registers an animation slot. The setter closure captures whatever
    /// target it writes to; the engine assumes exclusive write access to that
    /// property while an animation runs. Slots start inactive and only come
    /// alive through a `start_*` call.
    pub fn add_slot(&mut self, setter: impl FnMut(T) + 'static) -> SlotId {
        let zero = T::Lanes::splat(0.0);
        self.slots.push(Slot {
            setter: Box::new(setter),
            active: false,
            direction: 0,
            elapsed: 0.0,
            start: zero,
            end: zero,
            rate: zero,
        });
        SlotId(self.slots.len() - 1)
    }

    /// Starts animating every slot from `start` to `end` at `rate` units per
    /// second. Overwrites any segment already in progress (this is also how a
    /// running animation is cancelled).
    pub fn start_with_rate(&mut self, start: T, end: T, rate: T) {
        log::debug!(
            "animate {start:?} -> {end:?} at {rate:?}/s across {} slot(s)",
            self.slots.len()
        );
        for slot in &mut self.slots {
            slot.active = true;
            slot.direction = 1;
            slot.elapsed = 0.0;
            slot.start = start.to_lanes();
            slot.end = end.to_lanes();
            slot.rate = rate.to_lanes();
        }
    }

    /// Starts animating every slot from `start` to `end` over `duration_ms`.
    ///
    /// A zero, negative or non-finite duration completes instantly: the next
    /// tick pushes `end` once and parks the slot.
    pub fn start_with_duration(&mut self, start: T, end: T, duration_ms: f32) {
        if duration_ms <= 0.0 || !duration_ms.is_finite() {
            log::warn!("degenerate duration {duration_ms} ms, completing instantly");
            let zero = T::from_lanes(T::Lanes::splat(0.0));
            self.start_with_rate(end, end, zero);
            return;
        }
        let rate = T::from_lanes(
            end.to_lanes()
                .zip(start.to_lanes(), |e, s| (e - s) * 1000.0 / duration_ms),
        );
        self.start_with_rate(start, end, rate);
    }

    /// Advances every active slot by `delta_ms` and pushes the new values.
    ///
    /// Per axis: progress is the value covered so far (`rate * elapsed`)
    /// divided by the segment span, guarded against non-finite quotients and
    /// clamped to `[0, 1]` *before* easing — frame deltas rarely align with
    /// the duration, and an easing need not be monotonic past 1. The eased
    /// result is clamped again before it scales the span, so a pushed value
    /// never overshoots the segment. A slot finishes when every axis has zero
    /// span or full raw progress; the finishing tick pushes the exact
    /// destination endpoint.
    pub fn tick(&mut self, delta_ms: u32) {
        let interpolation = self.interpolation;
        let mut inactive = 0usize;

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !slot.active {
                inactive += 1;
                continue;
            }

            slot.elapsed += delta_ms as f32;

            let span = slot.end.zip(slot.start, |e, s| e - s);
            let travel = slot.rate.map(|r| r * slot.elapsed / 1000.0);
            let raw = travel.zip(span, |tr, sp| {
                let q = tr / sp;
                if q.is_finite() { q.clamp(0.0, 1.0) } else { 0.0 }
            });
            let t = raw.map(|r| interpolation(r).clamp(0.0, 1.0));

            let finished = raw.all(span, |r, sp| sp == 0.0 || r >= 1.0);
            let forward = slot.direction >= 0;
            let value = if finished {
                // Kill float residue: land exactly on the destination.
                if forward { slot.end } else { slot.start }
            } else {
                let dir = f32::from(slot.direction);
                let anchor = if forward { slot.start } else { slot.end };
                let step = t.zip(span, |t, sp| t * sp);
                anchor.zip(step, |a, s| a + s * dir)
            };

            if finished {
                slot.active = false;
                inactive += 1;
                log::debug!("slot {index} finished at {value:?}");
            }
            (slot.setter)(T::from_lanes(value));
        }

        if inactive == self.slots.len() {
            self.apply_repeat();
        }
    }

    /// Repeat policy, applied only once every slot is inactive.
    fn apply_repeat(&mut self) {
        // A slot that has never run still has direction 0; repeating it
        // would push uninitialized endpoints.
        if !self.slots.iter().any(|slot| slot.direction != 0) {
            return;
        }

        match self.repeat {
            RepeatMode::None => {}
            RepeatMode::Always => {
                log::debug!("repeat: rewinding {} slot(s)", self.slots.len());
                for slot in &mut self.slots {
                    (slot.setter)(T::from_lanes(slot.start));
                    slot.active = true;
                    slot.elapsed = 0.0;
                }
            }
            RepeatMode::PingPong => {
                log::debug!("repeat: reversing {} slot(s)", self.slots.len());
                for slot in &mut self.slots {
                    slot.active = true;
                    slot.direction = -slot.direction;
                    slot.elapsed = 0.0;
                }
            }
        }
    }

    #[must_use]
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    #[must_use]
    pub fn interpolation(&self) -> InterpolationFn {
        self.interpolation
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether the slot is mid-segment. False before any `start_*` call and
    /// after the slot reaches its destination.
    #[must_use]
    pub fn is_active(&self, id: SlotId) -> bool {
        self.slots.get(id.0).is_some_and(|slot| slot.active)
    }

    /// True when no slot is animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(|slot| !slot.active)
    }
}
