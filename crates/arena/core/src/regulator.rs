/// Rate limiter in simulated time.
///
/// `ready` returns `true` at most `updates_per_second` times per simulated
/// second. Missed ticks are not caught up: after a long gap the next tick is
/// scheduled one interval after the call that observed readiness.
#[derive(Clone, Debug, PartialEq)]
pub struct Regulator {
    interval: f64,
    next_update_time: f64,
}

impl Regulator {
    /// Creates a regulator that is ready on its first call.
    ///
    /// The frequency must be positive; configuration validation rejects
    /// anything else before a regulator is built.
    pub fn new(updates_per_second: f64) -> Self {
        Self {
            interval: 1.0 / updates_per_second,
            next_update_time: 0.0,
        }
    }

    pub fn ready(&mut self, now: f64) -> bool {
        if now >= self.next_update_time {
            self.next_update_time = now + self.interval;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Makes the next call ready regardless of the watermark.
    pub fn reset(&mut self) {
        self.next_update_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_call_is_ready() {
        let mut regulator = Regulator::new(5.0);
        assert!(regulator.ready(0.0));
        assert!(!regulator.ready(0.1));
        assert!(regulator.ready(0.2));
    }

    #[test]
    fn long_gap_does_not_burst() {
        let mut regulator = Regulator::new(10.0);
        assert!(regulator.ready(0.0));
        assert!(regulator.ready(5.0));
        assert!(!regulator.ready(5.05));
    }

    proptest! {
        #[test]
        fn never_ready_twice_within_one_interval(
            frequency in 0.5f64..60.0,
            steps in prop::collection::vec(0.0f64..0.5, 1..200),
        ) {
            let mut regulator = Regulator::new(frequency);
            let interval = 1.0 / frequency;
            let mut now = 0.0;
            let mut last: Option<f64> = None;

            for step in steps {
                now += step;
                if regulator.ready(now) {
                    if let Some(previous) = last {
                        prop_assert!(now - previous >= interval - 1e-9);
                    }
                    last = Some(now);
                }
            }
        }
    }
}
