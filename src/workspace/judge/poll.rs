extern crate serde_json;
extern crate tokio;

use crate::error::Result;
use serde_json::Value;
use std::{future::Future, time::Duration};
use tokio::time::sleep;

/// Lifecycle of an uploaded run or submission on the remote judge.
#[derive(Debug)]
pub(crate) enum State {
    Submitted,
    Pending,
    Succeeded(Value),
    Failed(Value),
    TimedOut,
}
impl State {
    fn is_terminal(&self) -> bool {
        matches!(self, State::Succeeded(_) | State::Failed(_) | State::TimedOut)
    }
}

/// Pure transition from the latest check payload. The judge reports
/// SUCCESS for any finished run, including wrong answers; FAILURE only for
/// judge-side breakage.
pub(crate) fn advance(state: State, payload: Value) -> State {
    if state.is_terminal() {
        return state;
    }
    match payload.get("state").and_then(Value::as_str) {
        Some("SUCCESS") => State::Succeeded(payload),
        Some("FAILURE") => State::Failed(payload),
        _ => State::Pending,
    }
}

/// Polls `fetch` at a fixed cadence until a terminal state, for at most
/// `rounds` attempts. Transport errors abort immediately; an exhausted
/// bound yields `TimedOut`, never a hang.
pub(crate) async fn drive<F, Fut>(mut fetch: F, delay: Duration, rounds: u32) -> Result<State>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value>>,
{
    let mut state = State::Submitted;
    for round in 0..rounds {
        state = advance(state, fetch().await?);
        if state.is_terminal() {
            return Ok(state);
        }
        if round + 1 < rounds {
            sleep(delay).await;
        }
    }
    Ok(State::TimedOut)
}
