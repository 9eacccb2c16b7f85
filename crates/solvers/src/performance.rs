use std::time::{Duration, Instant};

/// Work done by one run: loop bodies executed and wall-clock time.
///
/// Descent methods keep a second record summing the work of every line search
/// they call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Performance {
    /// Number of loop bodies executed.
    pub iterations: usize,

    /// Elapsed wall-clock time.
    pub duration: Duration,
}

impl Performance {
    /// Creates a record of `iterations` ending now, timed from `started`.
    #[must_use]
    pub fn since(started: Instant, iterations: usize) -> Self {
        Self {
            iterations,
            duration: started.elapsed(),
        }
    }

    /// Adds another record's work to this one.
    pub fn accumulate(&mut self, other: &Performance) {
        self.iterations += other.iterations;
        self.duration += other.duration;
    }

    /// Returns the duration in fractional milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1e3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accumulate_sums_both_fields() {
        let mut total = Performance::default();
        total.accumulate(&Performance {
            iterations: 3,
            duration: Duration::from_millis(2),
        });
        total.accumulate(&Performance {
            iterations: 4,
            duration: Duration::from_micros(500),
        });

        assert_eq!(total.iterations, 7);
        assert_relative_eq!(total.duration_ms(), 2.5, epsilon = 1e-9);
    }
}
