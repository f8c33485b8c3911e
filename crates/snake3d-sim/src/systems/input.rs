//! Input resolver: turns held keys into the snake's next heading.
//!
//! Keys are read every frame but the heading only changes once per lag
//! interval, in step with the discrete body shift. Between commits the
//! latest acceptable request sits in a one-slot buffer.

use snake3d_core::components::Snake;
use snake3d_core::enums::{Heading, MovementKey};
use snake3d_core::input::InputSource;

#[derive(Debug, Clone)]
pub struct InputResolver {
    next_heading: Heading,
    elapsed: f64,
    lag_interval: f64,
}

impl InputResolver {
    pub fn new(lag_interval: f64, initial_heading: Heading) -> Self {
        Self {
            next_heading: initial_heading,
            elapsed: 0.0,
            lag_interval,
        }
    }

    /// The heading that will be applied at the next commit.
    pub fn buffered(&self) -> Heading {
        self.next_heading
    }

    /// Read held keys and update the buffered heading.
    ///
    /// Keys are tried in priority order; the first held key that would not
    /// reverse `current` wins. Returns the buffered heading.
    pub fn sample(&mut self, current: Heading, input: &impl InputSource) -> Heading {
        let requested = MovementKey::PRIORITY
            .into_iter()
            .filter(|&key| input.is_held(key))
            .map(MovementKey::heading)
            .find(|&heading| !current.is_opposite(heading));

        if let Some(heading) = requested {
            self.next_heading = heading;
        }
        self.next_heading
    }

    /// Accumulate `dt` and, once past the lag interval, apply the buffered
    /// heading to the snake.
    ///
    /// The accumulator resets to zero rather than carrying the overshoot, so
    /// a long frame commits once and never queues extra commits. Returns
    /// `Some((from, to))` when a commit happened this call.
    pub fn commit(&mut self, snake: &mut Snake, dt: f64) -> Option<(Heading, Heading)> {
        self.elapsed += dt;
        if self.elapsed <= self.lag_interval {
            return None;
        }
        self.elapsed = 0.0;

        let from = snake.heading;
        snake.heading = self.next_heading;
        Some((from, self.next_heading))
    }

    /// Forget timing and buffered input.
    pub fn reset(&mut self, heading: Heading) {
        self.next_heading = heading;
        self.elapsed = 0.0;
    }
}
