use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Started,
    Stopped(Duration),
}

/// Per-user stopwatches. Lives as long as the process, nothing is persisted.
#[derive(Debug, Default)]
pub struct Stopwatches {
    running: Mutex<HashMap<u64, Instant>>,
}

impl Stopwatches {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn toggle(&self, user_id: u64) -> Toggle {
        self.toggle_at(user_id, Instant::now())
    }

    /// Starts the user's stopwatch, or stops it if it is already running.
    pub fn toggle_at(&self, user_id: u64, now: Instant) -> Toggle {
        let mut running = self.lock();
        match running.remove(&user_id) {
            Some(started) => Toggle::Stopped(abs_diff(now, started)),
            None => {
                running.insert(user_id, now);
                Toggle::Started
            }
        }
    }

    #[cfg(test)]
    fn is_running(&self, user_id: u64) -> bool {
        self.lock().contains_key(&user_id)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Instant>> {
        // A panic mid-insert cannot leave the map half-written.
        self.running.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn abs_diff(a: Instant, b: Instant) -> Duration {
    if a >= b { a - b } else { b - a }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let stopwatches = Stopwatches::new();
        let t0 = Instant::now();

        assert_eq!(stopwatches.toggle_at(1, t0), Toggle::Started);
        assert!(stopwatches.is_running(1));
        assert_eq!(
            stopwatches.toggle_at(1, t0 + Duration::from_secs(90)),
            Toggle::Stopped(Duration::from_secs(90))
        );
        assert!(!stopwatches.is_running(1));
        assert_eq!(stopwatches.toggle_at(1, t0), Toggle::Started);
    }

    #[test]
    fn test_immediate_stop_is_zero() {
        let stopwatches = Stopwatches::new();
        let t0 = Instant::now();
        assert_eq!(stopwatches.toggle_at(1, t0), Toggle::Started);
        assert_eq!(stopwatches.toggle_at(1, t0), Toggle::Stopped(Duration::ZERO));
    }

    #[test]
    fn test_idle_user_starts() {
        let stopwatches = Stopwatches::new();
        assert!(!stopwatches.is_running(9));
        assert_eq!(stopwatches.toggle(9), Toggle::Started);
        assert!(stopwatches.is_running(9));
        assert!(matches!(stopwatches.toggle(9), Toggle::Stopped(_)));
        assert!(!stopwatches.is_running(9));
    }

    #[test]
    fn test_restart_measures_from_new_start() {
        let stopwatches = Stopwatches::new();
        let t0 = Instant::now();
        stopwatches.toggle_at(1, t0);
        stopwatches.toggle_at(1, t0 + Duration::from_secs(5));
        stopwatches.toggle_at(1, t0 + Duration::from_secs(6));
        assert_eq!(
            stopwatches.toggle_at(1, t0 + Duration::from_secs(8)),
            Toggle::Stopped(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_clock_going_backwards_is_absolute() {
        let stopwatches = Stopwatches::new();
        let t0 = Instant::now() + Duration::from_secs(30);
        stopwatches.toggle_at(1, t0);
        assert_eq!(
            stopwatches.toggle_at(1, t0 - Duration::from_secs(10)),
            Toggle::Stopped(Duration::from_secs(10))
        );
    }

    #[test]
    fn test_users_are_independent() {
        let stopwatches = Stopwatches::new();
        let t0 = Instant::now();
        stopwatches.toggle_at(1, t0);
        stopwatches.toggle_at(2, t0 + Duration::from_secs(3));
        assert_eq!(
            stopwatches.toggle_at(1, t0 + Duration::from_secs(10)),
            Toggle::Stopped(Duration::from_secs(10))
        );
        assert!(stopwatches.is_running(2));
        assert_eq!(
            stopwatches.toggle_at(2, t0 + Duration::from_secs(10)),
            Toggle::Stopped(Duration::from_secs(7))
        );
    }

    #[test]
    fn test_concurrent_toggles_pair_up() {
        let stopwatches = Arc::new(Stopwatches::new());
        let handles: Vec<_> = (0..8u64)
            .map(|user| {
                let stopwatches = stopwatches.clone();
                std::thread::spawn(move || {
                    (0..1000)
                        .filter(|_| matches!(stopwatches.toggle(user % 2), Toggle::Stopped(_)))
                        .count()
                })
            })
            .collect();
        let stops: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        // 8000 toggles over two users, all balanced: every start has its stop.
        assert_eq!(stops, 4000);
        assert!(!stopwatches.is_running(0));
        assert!(!stopwatches.is_running(1));
    }
}
