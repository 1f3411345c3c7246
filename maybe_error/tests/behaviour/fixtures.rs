//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use maybe_error::{Fault, Maybe, MaybeEx};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::faults::InvalidOperation;

/// Scenario state shared between outcome steps.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeContext {
    pub outcome: Slot<Maybe<String>>,
    pub typed: Slot<MaybeEx<String, InvalidOperation>>,
    pub typed_fault: Slot<Arc<InvalidOperation>>,
    pub raised: Slot<Fault>,
    pub projected: Slot<usize>,
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn outcome_context() -> OutcomeContext {
    OutcomeContext::default()
}
