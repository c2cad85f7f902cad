use tracing::{debug, error};

use crate::core::classify::{Decision, classify};
use crate::core::pairs::Pair;
use crate::error::{Error, Result};

/// Accumulator threaded through the left-to-right walk.
///
/// Only the last entry of `terms` is ever rewritten; earlier entries are committed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReductionState {
    pub terms: Vec<u32>,
    pub repetition: u32,
}

impl ReductionState {
    pub fn total(&self) -> u32 {
        self.terms.iter().sum()
    }

    fn last_mut(&mut self, input: &str) -> Result<&mut u32> {
        self.terms.last_mut().ok_or_else(|| Error::InternalInvariant {
            input: input.to_string(),
            detail: "no committed term to fold into".to_string(),
        })
    }
}

fn missing_value(input: &str, pair: Pair, decision: Decision) -> Error {
    Error::InternalInvariant {
        input: input.to_string(),
        detail: format!("{decision} on pair {pair} without a current value"),
    }
}

/// Walk the pair sequence and fold it into a total.
pub fn reduce(pairs: &[Pair], input: &str) -> Result<u32> {
    let mut state = ReductionState::default();

    for (step, &pair) in pairs.iter().enumerate() {
        let decision = classify(state.repetition, pair);
        debug!(step, %pair, repetition = state.repetition, %decision, "classified pair");

        match decision {
            Decision::End => return Ok(state.total()),

            Decision::FirstSymbol | Decision::DescendingAfterEqualOrGreater => {
                let curr = pair.curr.ok_or_else(|| missing_value(input, pair, decision))?;
                state.terms.push(curr);
                state.repetition = 1;
            }

            Decision::RepeatAccumulate => {
                let curr = pair.curr.ok_or_else(|| missing_value(input, pair, decision))?;
                *state.last_mut(input)? += curr;
                state.repetition += 1;
            }

            Decision::SubtractValid => {
                let curr = pair.curr.ok_or_else(|| missing_value(input, pair, decision))?;
                let smaller = *state.last_mut(input)?;
                let difference =
                    curr.checked_sub(smaller)
                        .ok_or_else(|| Error::InternalInvariant {
                            input: input.to_string(),
                            detail: format!("subtraction on pair {pair} would go below zero"),
                        })?;
                *state.last_mut(input)? = difference;
                state.repetition = 1;
            }

            Decision::TooManyRepeats => {
                return Err(Error::TooManyRepeats {
                    input: input.to_string(),
                });
            }
            Decision::NonRepeatableSymbolRepeated => {
                return Err(Error::NonRepeatableSymbolRepeated {
                    input: input.to_string(),
                });
            }
            Decision::SubtractInvalid => {
                return Err(Error::IllegalSubtraction {
                    input: input.to_string(),
                });
            }

            Decision::Unreachable => {
                error!(step, %pair, repetition = state.repetition, input, "classifier reached an unreachable state");
                return Err(Error::InternalInvariant {
                    input: input.to_string(),
                    detail: format!(
                        "no rule matched pair {pair} at step {step} with repetition {}",
                        state.repetition
                    ),
                });
            }
        }
    }

    Err(Error::InternalInvariant {
        input: input.to_string(),
        detail: "pair sequence ended without an end marker".to_string(),
    })
}
