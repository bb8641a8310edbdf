//! Monotonic millisecond nonces
//!
//! CoinSpot treats the nonce as a replay counter: every signed request must
//! carry a value greater than the last one accepted for the key. Wall-clock
//! milliseconds alone collide when two requests leave in the same
//! millisecond, so the generator never hands out a value less than or equal
//! to the previous one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Nonce source shared by every request signed with one set of credentials
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Next nonce: current epoch milliseconds, bumped past the previous value if needed
    pub fn next(&self) -> u64 {
        let now = now_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }

    /// Last nonce handed out (0 before the first call)
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_nonce_tracks_wall_clock() {
        let before = now_millis();
        let nonce = NonceGenerator::new().next();
        let after = now_millis();
        assert!(nonce >= before && nonce <= after + 1);
    }

    #[test]
    fn test_nonce_strictly_increasing() {
        let nonces = NonceGenerator::new();
        let mut previous = nonces.next();
        for _ in 0..1_000 {
            let next = nonces.next();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_nonce_increases_across_millisecond_gap() {
        let nonces = NonceGenerator::new();
        let first = nonces.next();
        thread::sleep(Duration::from_millis(2));
        let second = nonces.next();
        assert!(second > first);
        assert_eq!(nonces.last(), second);
    }

    #[test]
    fn test_concurrent_nonces_are_unique() {
        let nonces = Arc::new(NonceGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let nonces = Arc::clone(&nonces);
                thread::spawn(move || (0..250).map(|_| nonces.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for nonce in handle.join().unwrap() {
                assert!(seen.insert(nonce), "duplicate nonce {}", nonce);
            }
        }
        assert_eq!(seen.len(), 2_000);
    }
}
