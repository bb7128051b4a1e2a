//! Countdown timer use case

use crate::domain::countdown::{format_remaining, Countdown, DONE_MESSAGE};
use crate::error::Result;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Length of one countdown tick in real time
pub const TICK: Duration = Duration::from_secs(1);

/// Run a countdown, writing the remaining time once per tick and a
/// completion message at the end.
pub fn run_timer<W: Write>(countdown: Countdown, tick: Duration, out: &mut W) -> Result<()> {
    for remaining in countdown.ticks() {
        writeln!(out, "{}", format_remaining(remaining))?;
        out.flush()?;
        thread::sleep(tick);
    }
    writeln!(out, "{}", DONE_MESSAGE)?;
    Ok(())
}
