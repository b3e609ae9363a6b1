use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Strictly non-decreasing nonce source, one per authenticated client.
///
/// Remote venues reject signed requests whose nonce does not increase, so the
/// generator tracks the last value it handed out and never goes backwards.
/// Under normal call rates the value follows wall-clock unix time; when
/// called faster than once per second it falls back to last + 1.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    // 0 means no nonce has been issued yet.
    last: Mutex<u64>,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next nonce. The read-modify-write is guarded so one
    /// generator may be shared across concurrent callers.
    pub fn next(&self) -> u64 {
        let mut last = self.last.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let candidate = if *last > 0 { *last + 1 } else { 0 };
        let value = candidate.max(unix_time_secs());

        *last = value;
        value
    }
}

fn unix_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_nonce_tracks_wall_clock() {
        let generator = NonceGenerator::new();
        let before = unix_time_secs();
        let nonce = generator.next();
        assert!(nonce >= before);
    }

    #[test]
    fn test_nonce_strictly_increases_under_rapid_calls() {
        let generator = NonceGenerator::new();
        let mut previous = generator.next();
        for _ in 0..1000 {
            let next = generator.next();
            assert!(next >= previous + 1, "nonce must advance by at least 1");
            previous = next;
        }
    }

    #[test]
    fn test_shared_generator_never_repeats() {
        use std::sync::Arc;

        let generator = Arc::new(NonceGenerator::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let generator = Arc::clone(&generator);
            handles.push(std::thread::spawn(move || {
                (0..250).map(|_| generator.next()).collect::<Vec<_>>()
            }));
        }

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total, "nonces must be unique across threads");
    }
}
