//! Extension-method demo: read a line, print it fizzed.
//!
//! Run with: cargo run --bin fizzle

use std::io::{self, Write};
use sugar::embellish::Fizzle;
use sugar::report::{read_input_line, write_fizzle_report, write_prompt};
use sugar::telemetry::init_logging;
use sugar::{DemoConfig, SugarError};
use tracing::debug;

fn main() -> Result<(), SugarError> {
    let config = DemoConfig::load()?;
    init_logging(&config.log_level)?;
    let color = config.output.color;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_prompt(&mut out, color)?;

    let input = read_input_line(&mut io::stdin().lock());
    let fizzed = input.fizzle();
    debug!(input_len = input.len(), "fizzled input");

    write_fizzle_report(&mut out, &input, &fizzed, color)?;
    out.flush()?;
    Ok(())
}
