//! Main binary entry point for the `patcov` coverage tool.
//!
//! The binary simply delegates to the shared `entry_point::run_with_args()`
//! function so the CLI and integration tests dispatch identically.

use anyhow::Result;

fn main() -> Result<()> {
    let code = patcov::entry_point::run_with_args(std::env::args(), &mut std::io::stdout())?;
    std::process::exit(code);
}
