//! The character-by-character greeting animation.

use std::io::{self, Write};
use std::thread;

use vipe_core::{BOLD, PALETTE, RESET, Timing};

/// The message spelled out by the animation.
pub const MESSAGE: &str = "Hello World";

/// How many times the message is spelled out.
pub const PASSES: usize = 5;

/// Spell out [`MESSAGE`] one character at a time, [`PASSES`] times.
///
/// Each character is written bold in the palette color for its position
/// (the palette wraps every six characters), then reset, then the output
/// is flushed so the character is visible through a line-buffered stdout
/// before the per-character pause. Each completed pass ends with a
/// newline and the longer per-pass pause.
pub fn animated_greeting(out: &mut impl Write, timing: Timing) -> io::Result<()> {
    for _ in 0..PASSES {
        for (i, ch) in MESSAGE.chars().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            write!(out, "{color}{BOLD}{ch}{RESET}")?;
            out.flush()?;
            thread::sleep(timing.char_delay);
        }
        writeln!(out)?;
        out.flush()?;
        thread::sleep(timing.pass_delay);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vipe_core::RED;

    fn drain() -> String {
        let mut buf = Vec::new();
        animated_greeting(&mut buf, Timing::instant()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Drop ANSI SGR sequences, keeping only printable text.
    fn strip_ansi(s: &str) -> String {
        let mut plain = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn spells_message_once_per_pass() {
        let out = drain();
        assert_eq!(strip_ansi(&out), format!("{MESSAGE}\n").repeat(PASSES));
    }

    #[test]
    fn uses_every_palette_color() {
        let out = drain();
        for color in PALETTE {
            assert!(out.contains(color), "palette color missing: {color:?}");
        }
    }

    #[test]
    fn every_character_is_bold_and_reset() {
        let out = drain();
        let chars_written = MESSAGE.chars().count() * PASSES;
        assert_eq!(out.matches(BOLD).count(), chars_written);
        assert_eq!(out.matches(RESET).count(), chars_written);
    }

    #[test]
    fn palette_wraps_after_six_characters() {
        let out = drain();
        // 'H' is position 0 and 'W' is position 6, so both take the
        // first palette color.
        assert!(out.starts_with(&format!("{RED}{BOLD}H{RESET}")));
        assert!(out.contains(&format!("{RED}{BOLD}W{RESET}")));
    }
}
