//! Table configuration options.

use alloc::string::String;

use crate::player::STARTING_CHIPS;

/// Configuration for a blackjack session.
///
/// The house rules themselves are fixed; these options only cover the
/// session around them. Use the builder methods to customize:
///
/// ```
/// use bjcore::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(250)
///     .with_player_name("Ada");
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips the player starts with, and is restored to on a reset.
    pub starting_chips: usize,
    /// Display name of the human player.
    pub player_name: String,
    /// Display name of the dealer.
    pub dealer_name: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            player_name: String::from("You"),
            dealer_name: String::from("Dealer"),
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_name("Ada");
    /// assert_eq!(options.player_name, "Ada");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }
}
