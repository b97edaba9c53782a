//! The fixed banner layout.

use std::io::{self, Write};

use vipe_core::{BANNER_WIDTH, BLUE, BOLD, CYAN, GREEN, PURPLE, Timing, YELLOW};
use vipe_render::{animated_greeting, border, centered};

const TITLE: &str = "🌟 WELCOME TO VIPE CODING 🌟";
const GREETING_LABEL: &str = "Animated Hello World:";
const CLOSING: &str = "✨ Decorated with style! ✨";

/// Write the full decorated banner: framed title, greeting label, the
/// animated greeting, and the closing line.
pub fn render(out: &mut impl Write, timing: Timing) -> io::Result<()> {
    let width = BANNER_WIDTH;
    let cyan_bold = format!("{CYAN}{BOLD}");
    let yellow_bold = format!("{YELLOW}{BOLD}");
    let green_bold = format!("{GREEN}{BOLD}");
    let purple_bold = format!("{PURPLE}{BOLD}");

    border(out, width, '═', &cyan_bold)?;
    centered(out, "", width, "")?;
    centered(out, TITLE, width, &yellow_bold)?;
    centered(out, "", width, "")?;
    border(out, width, '─', BLUE)?;
    centered(out, "", width, "")?;
    centered(out, GREETING_LABEL, width, &green_bold)?;
    centered(out, "", width, "")?;

    animated_greeting(out, timing)?;

    centered(out, "", width, "")?;
    border(out, width, '═', &cyan_bold)?;
    centered(out, CLOSING, width, &purple_bold)?;
    border(out, width, '═', &cyan_bold)
}
