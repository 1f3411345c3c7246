//! Step definitions for the outcome scenarios.

use anyhow::{Result, anyhow, ensure};
use maybe_error::{Error, FaultError, Maybe, MaybeEx, Project};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{
    faults::{InvalidOperation, same_allocation},
    text::unquote,
};

use crate::fixtures::OutcomeContext;

fn current(outcome_context: &OutcomeContext) -> Result<Maybe<String>> {
    outcome_context
        .outcome
        .get()
        .ok_or_else(|| anyhow!("no outcome has been produced"))
}

#[given("a success outcome holding {value}")]
fn success_outcome(outcome_context: &OutcomeContext, value: String) {
    outcome_context
        .outcome
        .set(Maybe::ok(unquote(&value).to_owned()));
}

#[given("an outcome wrapping an invalid operation fault")]
fn fault_outcome(outcome_context: &OutcomeContext) {
    outcome_context
        .outcome
        .set(Maybe::from_fault(InvalidOperation));
}

#[given("an outcome carrying the error {message}")]
fn error_outcome(outcome_context: &OutcomeContext, message: String) {
    outcome_context
        .outcome
        .set(Error::new(unquote(&message)).into());
}

#[given("a typed outcome wrapping an invalid operation fault")]
fn typed_outcome(outcome_context: &OutcomeContext) {
    let error = FaultError::new(InvalidOperation);
    outcome_context.typed_fault.set(error.shared_fault());
    outcome_context.typed.set(MaybeEx::err(error));
}

#[when("the outcome is widened")]
fn widen(outcome_context: &OutcomeContext) -> Result<()> {
    let typed = outcome_context
        .typed
        .take()
        .ok_or_else(|| anyhow!("no typed outcome to widen"))?;
    outcome_context.outcome.set(typed.widen());
    Ok(())
}

#[when("the value is requested")]
fn request_value(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = current(outcome_context)?;
    let raised = outcome
        .into_value()
        .err()
        .ok_or_else(|| anyhow!("value access unexpectedly succeeded"))?;
    outcome_context.raised.set(raised);
    Ok(())
}

#[when("the value length is projected with a default")]
fn project_length(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = current(outcome_context)?;
    outcome_context
        .projected
        .set(outcome.project_or_default(|value| value.len()));
    Ok(())
}

#[then("the outcome has a value")]
fn has_value(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = current(outcome_context)?;
    ensure!(outcome.has_value(), "expected a value, got {outcome:?}");
    Ok(())
}

#[then("the outcome has an error")]
fn has_error(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = current(outcome_context)?;
    ensure!(outcome.has_error(), "expected an error, got {outcome:?}");
    Ok(())
}

#[then("the outcome carries no error")]
fn no_error(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = current(outcome_context)?;
    ensure!(outcome.error().is_none(), "unexpected error in {outcome:?}");
    Ok(())
}

#[then("the value equals {expected}")]
fn value_equals(outcome_context: &OutcomeContext, expected: String) -> Result<()> {
    let value = current(outcome_context)?
        .into_value()
        .map_err(|fault| anyhow!("value access failed: {fault}"))?;
    ensure!(value == unquote(&expected), "value was {value}");
    Ok(())
}

#[then("the error message equals {expected}")]
fn error_message(outcome_context: &OutcomeContext, expected: String) -> Result<()> {
    let outcome = current(outcome_context)?;
    let message = outcome
        .error()
        .map(Error::message)
        .ok_or_else(|| anyhow!("outcome carries no error"))?;
    ensure!(message == unquote(&expected), "message was {message}");
    Ok(())
}

#[then("the raised fault is the invalid operation fault")]
fn raised_invalid_operation(outcome_context: &OutcomeContext) -> Result<()> {
    let raised = outcome_context
        .raised
        .get()
        .ok_or_else(|| anyhow!("no fault was raised"))?;
    ensure!(
        raised.downcast_ref::<InvalidOperation>().is_some(),
        "raised fault was {raised:?}"
    );
    let outcome = current(outcome_context)?;
    let wrapped = outcome
        .error()
        .and_then(Error::wrapped_fault)
        .ok_or_else(|| anyhow!("error does not wrap a fault"))?;
    ensure!(
        same_allocation(&raised, wrapped),
        "raised fault must be the wrapped allocation"
    );
    Ok(())
}

#[then("the raised fault mentions {expected}")]
fn raised_mentions(outcome_context: &OutcomeContext, expected: String) -> Result<()> {
    let raised = outcome_context
        .raised
        .get()
        .ok_or_else(|| anyhow!("no fault was raised"))?;
    let text = raised.to_string();
    ensure!(text.contains(unquote(&expected)), "fault text was {text}");
    Ok(())
}

#[then("the projected length is {expected:usize}")]
fn projected_length(outcome_context: &OutcomeContext, expected: usize) -> Result<()> {
    let projected = outcome_context
        .projected
        .get()
        .ok_or_else(|| anyhow!("nothing was projected"))?;
    ensure!(projected == expected, "projected {projected}");
    Ok(())
}

#[then("the raised fault is the typed fault itself")]
fn raised_typed_fault(outcome_context: &OutcomeContext) -> Result<()> {
    let raised = outcome_context
        .raised
        .get()
        .ok_or_else(|| anyhow!("no fault was raised"))?;
    let typed = outcome_context
        .typed_fault
        .get()
        .ok_or_else(|| anyhow!("typed fault was not recorded"))?;
    ensure!(
        same_allocation(&typed, &raised),
        "widening must not reallocate the fault"
    );
    Ok(())
}
