//! Presentation pacing between dealer draws.

#[cfg(feature = "std")]
use core::time::Duration;

/// Hook invoked by the dealer before each draw decision.
///
/// The engine never sleeps on its own; a pacer decides whether the dealer's
/// play is slowed down for the viewer.
pub trait Pacer {
    /// Waits before the dealer's next decision.
    fn pause(&mut self);
}

/// Plays the dealer's hand without delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self) {}
}

/// Sleeps the current thread for a fixed duration.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPacer(pub Duration);

#[cfg(feature = "std")]
impl Pacer for SleepPacer {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}
