//! Styled border and centered-text line rendering.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;
use vipe_core::RESET;

/// Write a horizontal rule of `ch` repeated `width` times.
///
/// The rule is prefixed with `style` and followed by a reset so later
/// output is unaffected. A zero width yields an empty line still framed
/// by the style and reset codes.
pub fn border(out: &mut impl Write, width: usize, ch: char, style: &str) -> io::Result<()> {
    let rule: String = std::iter::repeat_n(ch, width).collect();
    writeln!(out, "{style}{rule}")?;
    write!(out, "{RESET}")
}

/// Write `text` centered within `width` columns, padded with spaces.
///
/// Padding is split by truncating division, so an odd leftover column
/// goes to the right side. Width is measured as terminal display width,
/// which keeps double-width characters centered. Text wider than `width`
/// is written verbatim with no padding on either side, never truncated.
pub fn centered(out: &mut impl Write, text: &str, width: usize, style: &str) -> io::Result<()> {
    let text_width = text.width();
    let left = width.saturating_sub(text_width) / 2;
    let right = width.saturating_sub(text_width + left);
    writeln!(out, "{style}{}{text}{}", " ".repeat(left), " ".repeat(right))?;
    write!(out, "{RESET}")
}
