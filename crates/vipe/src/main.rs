use std::io::{self, Write};

use vipe_core::Timing;

mod banner;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let mut stdout = io::stdout().lock();
    banner::render(&mut stdout, Timing::default())?;
    stdout.flush()?;
    Ok(())
}
