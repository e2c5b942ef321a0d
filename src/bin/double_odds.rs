//! Lazy query demo: the fluent view is forced before `11` is appended,
//! the query view after, so only the query list ends with 22.
//!
//! Run with: cargo run --bin double_odds

use std::io::{self, Write};
use sugar::pipeline::run_demo;
use sugar::report::write_labeled_list;
use sugar::telemetry::init_logging;
use sugar::{DemoConfig, SugarError};

fn main() -> Result<(), SugarError> {
    let config = DemoConfig::load()?;
    init_logging(&config.log_level)?;

    let outcome = run_demo(&config.pipeline);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_labeled_list(&mut out, "Fluent List:", &outcome.fluent, config.output.color)?;
    write_labeled_list(&mut out, "Query List:", &outcome.query, config.output.color)?;
    out.flush()?;
    Ok(())
}
