/// Fixed-interval timer driven by the frame clock.
///
/// Owning a `Ticker` is the subscription: the session installs one when play
/// begins or resumes and drops it on pause, stop or game over.
#[derive(Debug)]
pub struct Ticker {
    interval: f64,
    last_fired: f64,
}

impl Ticker {
    pub fn install(interval: f64, now: f64) -> Self {
        Self { interval, last_fired: now }
    }

    /// True at most once per call; a long frame does not queue extra ticks.
    pub fn poll(&mut self, now: f64) -> bool {
        if now - self.last_fired < self.interval {
            return false;
        }
        // keep to the fixed schedule so frame overshoot doesn't accumulate
        self.last_fired += self.interval;
        if now - self.last_fired >= self.interval {
            self.last_fired = now;
        }
        true
    }
}
