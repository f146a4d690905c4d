//! tetrisrun: keyboard driver for a Tetris game reading commands on stdin.
//!
//! ```text
//! stty raw -echo && tetrisrun | ./tetris
//! ```
//!
//! Controls:
//!
//! - `i` / `w` / up arrow: rotate
//! - `j` / `a` / left arrow: move left
//! - `k` / `s` / down arrow: drop
//! - `l` / `d` / right arrow: move right
//! - `p` / space: pause and resume
//! - ESC / `q` / Ctrl-C / Ctrl-D / Ctrl-Z: quit
//!
//! A drop is also sent on a timer that starts at one second and speeds up by
//! a millisecond with every drop.

use anyhow::Result;
use tracing::debug;

use tetrisrun::adapter::{init_logging, run_stdio, DriverConfig};

fn main() -> Result<()> {
    let config = DriverConfig::from_env()?;
    init_logging(config.log_filter.as_deref())?;

    let report = run_stdio(&config)?;
    debug!(
        forwarded = report.forwarder.forwarded,
        drops = report.gravity.drops,
        "exiting"
    );
    Ok(())
}
