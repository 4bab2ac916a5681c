//! Session configuration options.

use core::time::Duration;

/// Configuration options for a betting session.
///
/// Game rules are fixed; these options only cover the bankroll and pacing.
///
/// ```
/// use core::time::Duration;
/// use bjsim::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_balance(250.0)
///     .with_dealer_pause(Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    /// Balance the player starts with.
    pub starting_balance: f64,
    /// Pause before each dealer draw decision when played interactively.
    pub dealer_pause: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100.0,
            dealer_pause: Duration::from_secs(1),
        }
    }
}

impl SessionOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_balance(500.0);
    /// assert_eq!(options.starting_balance, 500.0);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the pause before each dealer draw decision.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjsim::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_dealer_pause(Duration::from_millis(250));
    /// assert_eq!(options.dealer_pause, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_dealer_pause(mut self, pause: Duration) -> Self {
        self.dealer_pause = pause;
        self
    }
}
