//! Minimal frame loop driving a ping-pong fade on a fake opacity property.
//!
//! Run with `RUST_LOG=debug cargo run --example fade` to see the engine's
//! segment lifecycle logging.

use std::cell::Cell;
use std::rc::Rc;
use std::thread::sleep;
use std::time::Duration;

use marquee::{ANIMATION_TICK_MS, AnimationEngine, RepeatMode, Timer, interpolate};

fn main() {
    env_logger::init();

    let opacity = Rc::new(Cell::new(0.0f32));
    let target = Rc::clone(&opacity);

    let mut engine = AnimationEngine::new(RepeatMode::PingPong, interpolate::smooth_step);
    engine.add_slot(move |v| target.set(v));
    engine.start_with_duration(0.0, 1.0, 640.0);

    let mut timer = Timer::new();
    for frame in 0..60 {
        sleep(Duration::from_millis(u64::from(ANIMATION_TICK_MS)));
        timer.tick();
        engine.tick(timer.delta_ms());

        let bar = "#".repeat((opacity.get() * 40.0) as usize);
        println!("frame {frame:2}  opacity {:>5.3}  {bar}", opacity.get());
    }
}
