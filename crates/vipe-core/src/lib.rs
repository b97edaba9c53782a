//! Shared constants for the vipe banner: ANSI style codes, the animation
//! palette, and pacing parameters.

use std::time::Duration;

/// Resets all colors and attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold attribute.
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const PURPLE: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

/// Colors the greeting animation cycles through, one per character.
pub const PALETTE: [&str; 6] = [RED, GREEN, YELLOW, BLUE, PURPLE, CYAN];

/// Banner width in terminal columns.
pub const BANNER_WIDTH: usize = 50;

/// Pacing for the animated greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause after each printed character.
    pub char_delay: Duration,
    /// Pause after each full pass over the message.
    pub pass_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(50),
            pass_delay: Duration::from_millis(500),
        }
    }
}

impl Timing {
    /// Timing with every delay removed, so tests can drain the animation
    /// without sleeping.
    pub const fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
            pass_delay: Duration::ZERO,
        }
    }
}
