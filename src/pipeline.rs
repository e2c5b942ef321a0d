//! The lazy-evaluation demo: force one view early, mutate, force the other.

use crate::config::PipelineConfig;
use crate::query::{double_odd_fluent, double_odd_query};
use crate::sequence::IntegerSequence;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    /// Materialized before the source was appended to.
    pub fluent: Vec<i32>,
    /// Materialized after, so it includes the appended odds.
    pub query: Vec<i32>,
}

pub fn run_demo(config: &PipelineConfig) -> DemoOutcome {
    let integers = IntegerSequence::from_range(config.source_range());

    let fluent_results = double_odd_fluent(&integers);
    let query_results = double_odd_query(&integers);

    // Neither view has looked at the source yet; force the fluent one now.
    let fluent = fluent_results.materialize();
    info!(items = fluent.len(), "fluent view materialized");

    integers.extend(config.appended.iter().copied());
    info!(appended = ?config.appended, len = integers.len(), "source extended");

    let query = query_results.materialize();
    info!(items = query.len(), "query view materialized");

    DemoOutcome { fluent, query }
}
