//! Circular-motion animation for the spatial panner.
//!
//! Two states: **Idle** (no timer, position pinned at the origin) and
//! **Orbiting** (a repeating tick advances the angle by one degree). The
//! timer is cooperative: nothing runs in the background, the owner calls
//! [`Orbit::poll`] from its event loop and due ticks are caught up in a
//! batch, the same way the graph scheduler catches up processing blocks.

use std::time::{Duration, Instant};

use tracing::debug;

/// Default radius scale applied to position writes.
pub const DEFAULT_RADIUS: f32 = 0.5;

struct Timer {
    period: Duration,
    started: Instant,
    ticks_done: u64,
}

/// Orbit state machine. Owned by the [`Player`](crate::Player), which applies
/// each recomputed position to the panner node.
pub struct Orbit {
    radius: f32,
    speed: f32,
    /// Rotation angle in whole degrees. Wraps past 360 back through 1.
    angle: u32,
    timer: Option<Timer>,
}

impl Orbit {
    pub fn new() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            speed: 1.0,
            angle: 0,
            timer: None,
        }
    }

    /// Tick period at the current speed: `speed * 10` milliseconds.
    ///
    /// Computed in whole microseconds so periods stay exact and comparable;
    /// a zero or negative speed clamps to the shortest representable period.
    pub fn tick_period(&self) -> Duration {
        let micros = (self.speed as f64 * 10_000.0).round() as u64;
        Duration::from_micros(micros.max(1))
    }

    /// Transition to Orbiting. A running timer is cancelled first and the
    /// angle rewinds to zero, so a restart never continues a previous orbit.
    pub fn start(&mut self, now: Instant) {
        self.angle = 0;
        self.timer = Some(Timer {
            period: self.tick_period(),
            started: now,
            ticks_done: 0,
        });
        debug!(period = ?self.tick_period(), "orbit started");
    }

    /// Transition to Idle. Safe to call from any state; the angle always
    /// rewinds to zero.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            debug!("orbit stopped");
        }
        self.angle = 0;
    }

    pub fn is_orbiting(&self) -> bool {
        self.timer.is_some()
    }

    /// Change the tick period. While orbiting this is a full restart (angle
    /// back to zero), not a smooth speed change.
    pub fn set_speed(&mut self, speed: f32, now: Instant) {
        self.speed = speed;
        if self.is_orbiting() {
            self.start(now);
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Change the radius scale. Takes effect on the next position write.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Position at the current angle: `(sin θ, cos θ, cos θ)` scaled by the
    /// radius factor.
    pub fn scaled_position(&self) -> (f32, f32, f32) {
        let rad = (self.angle as f32).to_radians();
        (
            rad.sin() * self.radius,
            rad.cos() * self.radius,
            rad.cos() * self.radius,
        )
    }

    /// Run every tick due by `now`.
    ///
    /// Returns the position after the last due tick, or `None` if idle or
    /// nothing was due. Intermediate ticks only advance the angle - position
    /// writes coalesce into the final one.
    pub fn poll(&mut self, now: Instant) -> Option<(f32, f32, f32)> {
        let timer = self.timer.as_mut()?;
        let elapsed = now.saturating_duration_since(timer.started);
        let target = (elapsed.as_nanos() / timer.period.as_nanos()) as u64;
        if target <= timer.ticks_done {
            return None;
        }

        while timer.ticks_done < target {
            self.angle += 1;
            if self.angle > 360 {
                self.angle -= 360;
            }
            timer.ticks_done += 1;
        }
        Some(self.scaled_position())
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn ticks_advance_the_angle_by_one_degree() {
        let t0 = Instant::now();
        let mut orbit = Orbit::new();
        orbit.start(t0);

        assert_eq!(orbit.angle(), 0);
        orbit.poll(t0 + ms(10));
        assert_eq!(orbit.angle(), 1);
        orbit.poll(t0 + ms(35));
        assert_eq!(orbit.angle(), 3);

        // nothing new due: angle holds
        assert!(orbit.poll(t0 + ms(35)).is_none());
        assert_eq!(orbit.angle(), 3);
    }

    #[test]
    fn angle_wraps_past_360() {
        let t0 = Instant::now();
        let mut orbit = Orbit::new();
        orbit.start(t0);

        orbit.poll(t0 + ms(3600));
        assert_eq!(orbit.angle(), 360);
        orbit.poll(t0 + ms(3610));
        assert_eq!(orbit.angle(), 1);
        orbit.poll(t0 + ms(3700));
        assert_eq!(orbit.angle(), 10);
    }

    #[test]
    fn position_follows_sin_cos_cos() {
        let t0 = Instant::now();
        let mut orbit = Orbit::new();
        orbit.set_radius(2.0);
        orbit.start(t0);

        let (x, y, z) = orbit.poll(t0 + ms(900)).unwrap();
        let rad = 90f32.to_radians();
        assert!((x - rad.sin() * 2.0).abs() < 1e-5);
        assert!((y - rad.cos() * 2.0).abs() < 1e-5);
        assert!((z - rad.cos() * 2.0).abs() < 1e-5);
    }

    #[test]
    fn stop_is_idempotent_and_rewinds() {
        let t0 = Instant::now();
        let mut orbit = Orbit::new();
        orbit.start(t0);
        orbit.poll(t0 + ms(50));
        assert_eq!(orbit.angle(), 5);

        orbit.stop();
        assert!(!orbit.is_orbiting());
        assert_eq!(orbit.angle(), 0);

        orbit.stop();
        assert!(!orbit.is_orbiting());
        assert_eq!(orbit.angle(), 0);

        // polls after stop never tick
        assert!(orbit.poll(t0 + ms(500)).is_none());
    }

    #[test]
    fn set_speed_while_orbiting_restarts() {
        let t0 = Instant::now();
        let mut orbit = Orbit::new();
        orbit.start(t0);
        orbit.poll(t0 + ms(70));
        assert_eq!(orbit.angle(), 7);

        let t1 = t0 + ms(70);
        orbit.set_speed(2.0, t1);
        assert_eq!(orbit.angle(), 0, "restart rewinds the angle");
        assert_eq!(orbit.tick_period(), ms(20));

        // cadence now follows the new period, measured from the restart
        orbit.poll(t1 + ms(19));
        assert_eq!(orbit.angle(), 0);
        orbit.poll(t1 + ms(20));
        assert_eq!(orbit.angle(), 1);
    }

    #[test]
    fn set_speed_while_idle_does_not_start() {
        let t0 = Instant::now();
        let mut orbit = Orbit::new();
        orbit.set_speed(3.0, t0);
        assert!(!orbit.is_orbiting());
        assert_eq!(orbit.tick_period(), ms(30));
    }

    #[test]
    fn restart_cancels_the_previous_timer() {
        let t0 = Instant::now();
        let mut orbit = Orbit::new();
        orbit.start(t0);
        orbit.poll(t0 + ms(40));
        assert_eq!(orbit.angle(), 4);

        // restarting measures from the new instant; old ticks are gone
        let t1 = t0 + ms(40);
        orbit.start(t1);
        assert_eq!(orbit.angle(), 0);
        orbit.poll(t1 + ms(10));
        assert_eq!(orbit.angle(), 1);
    }
}
