use std::time::{Duration, Instant};

/// Evaluation time limit. The UI polls it on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    deadline: Instant,
}

impl Countdown {
    pub fn start(now: Instant, limit: Duration) -> Self {
        Self {
            deadline: now + limit,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// `mm:ss`, rounding partial seconds up so "00:00" means expired.
    pub fn label(&self, now: Instant) -> String {
        let rem = self.remaining(now);
        let secs = rem.as_secs() + u64::from(rem.subsec_nanos() > 0);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_and_expires() {
        let t0 = Instant::now();
        let c = Countdown::start(t0, Duration::from_secs(90));
        assert_eq!(c.label(t0), "01:30");
        assert_eq!(c.label(t0 + Duration::from_millis(500)), "01:30");
        assert_eq!(c.label(t0 + Duration::from_secs(31)), "00:59");
        assert!(!c.is_expired(t0 + Duration::from_secs(89)));
        assert!(c.is_expired(t0 + Duration::from_secs(90)));
        assert_eq!(c.remaining(t0 + Duration::from_secs(200)), Duration::ZERO);
        assert_eq!(c.label(t0 + Duration::from_secs(200)), "00:00");
    }
}
