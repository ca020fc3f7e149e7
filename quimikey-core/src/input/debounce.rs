//! Contact debouncing
//!
//! Turns a stream of raw samples ("which contact is closed right now, if
//! any") into press events. A contact fires only when it is seen closed on
//! two samples at least `window_ms` apart with nothing else seen in
//! between. It fires once per press and must be seen open before it can
//! fire again. A different contact seen during a hold starts its own
//! window, so rolling from one key to the next is not lost.

/// Debounce state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase<T> {
    /// Nothing closed
    Open,
    /// Closure seen, waiting for it to hold through the window
    Pending { contact: T, since_ms: u32 },
    /// Press reported, waiting for release
    Latched { contact: T },
}

/// Press detector for one or many contacts
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u32,
    phase: Phase<T>,
}

impl<T: Copy + PartialEq> Debouncer<T> {
    /// Create a debouncer with the given window
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            phase: Phase::Open,
        }
    }

    /// Feed one sample; returns the contact on a stable press
    pub fn update(&mut self, sample: Option<T>, now_ms: u32) -> Option<T> {
        match (self.phase, sample) {
            (_, None) => {
                self.phase = Phase::Open;
                None
            }
            (Phase::Open, Some(contact)) => {
                self.phase = Phase::Pending {
                    contact,
                    since_ms: now_ms,
                };
                None
            }
            (Phase::Pending { contact, since_ms }, Some(seen)) => {
                if seen != contact {
                    // Bounced onto another contact; restart the window
                    self.phase = Phase::Pending {
                        contact: seen,
                        since_ms: now_ms,
                    };
                    None
                } else if now_ms.wrapping_sub(since_ms) >= self.window_ms {
                    self.phase = Phase::Latched { contact };
                    Some(contact)
                } else {
                    None
                }
            }
            (Phase::Latched { contact }, Some(seen)) => {
                if seen != contact {
                    self.phase = Phase::Pending {
                        contact: seen,
                        since_ms: now_ms,
                    };
                }
                None
            }
        }
    }

    /// Returns true while a reported press has not been released
    pub fn is_latched(&self) -> bool {
        matches!(self.phase, Phase::Latched { .. })
    }

    /// Forget any pending or latched press
    pub fn reset(&mut self) {
        self.phase = Phase::Open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_press_fires_once() {
        let mut d = Debouncer::new(50);

        assert_eq!(d.update(Some(7u8), 0), None);
        assert_eq!(d.update(Some(7), 20), None);
        assert_eq!(d.update(Some(7), 50), Some(7));

        // Held: no auto-repeat
        assert_eq!(d.update(Some(7), 100), None);
        assert_eq!(d.update(Some(7), 500), None);
        assert!(d.is_latched());
    }

    #[test]
    fn test_bounce_shorter_than_window_is_ignored() {
        let mut d = Debouncer::new(50);

        assert_eq!(d.update(Some(1u8), 0), None);
        assert_eq!(d.update(Some(1), 30), None);
        assert_eq!(d.update(None, 40), None);
        // Closing again restarts the window
        assert_eq!(d.update(Some(1), 60), None);
        assert_eq!(d.update(Some(1), 100), None);
        assert_eq!(d.update(Some(1), 110), Some(1));
    }

    #[test]
    fn test_release_rearms() {
        let mut d = Debouncer::new(10);

        d.update(Some(3u8), 0);
        assert_eq!(d.update(Some(3), 10), Some(3));
        assert_eq!(d.update(None, 20), None);
        assert!(!d.is_latched());

        d.update(Some(3), 30);
        assert_eq!(d.update(Some(3), 40), Some(3));
    }

    #[test]
    fn test_rollover_to_other_contact_fires_after_window() {
        let mut d = Debouncer::new(50);

        d.update(Some((0u8, 0u8)), 0);
        assert_eq!(d.update(Some((0, 0)), 50), Some((0, 0)));

        // First key released while a second stays held
        assert_eq!(d.update(Some((5, 5)), 60), None);
        assert!(!d.is_latched());
        assert_eq!(d.update(Some((5, 5)), 105), None);
        assert_eq!(d.update(Some((5, 5)), 110), Some((5, 5)));

        // And the second key is now the held one
        assert_eq!(d.update(Some((5, 5)), 1000), None);
        assert!(d.is_latched());
    }

    #[test]
    fn test_same_contact_held_never_refires() {
        let mut d = Debouncer::new(10);

        d.update(Some(1u8), 0);
        assert_eq!(d.update(Some(1), 10), Some(1));
        for t in (15..1000).step_by(5) {
            assert_eq!(d.update(Some(1), t), None);
        }
    }

    #[test]
    fn test_contact_change_restarts_window() {
        let mut d = Debouncer::new(10);

        d.update(Some(1u8), 0);
        assert_eq!(d.update(Some(2), 8), None);
        assert_eq!(d.update(Some(2), 12), None);
        assert_eq!(d.update(Some(2), 18), Some(2));
    }

    #[test]
    fn test_timer_wraparound() {
        let mut d = Debouncer::new(10);

        d.update(Some(()), u32::MAX - 4);
        assert_eq!(d.update(Some(()), 5), Some(()));
    }
}
