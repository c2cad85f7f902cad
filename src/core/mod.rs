//! Core parsing building blocks: symbol lookup, pair construction, the
//! classification table, and the reduction loop. These are internal primitives
//! consumed by the high-level `api` module.
pub mod classify;
pub mod lookup;
pub mod pairs;
pub mod params;
pub mod reduce;

use crate::error::{Error, Result};
use crate::types::MAX_VALUE;

/// Validate and evaluate an upper-case Roman numeral in a single pass.
pub fn parse(input: &str) -> Result<u32> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    let values = lookup::resolve_values(input)?;
    let pairs = pairs::build_pairs(&values);
    let value = reduce::reduce(&pairs, input)?;
    check_range(value, input)
}

/// Reject totals above the largest representable numeral.
pub fn check_range(value: u32, input: &str) -> Result<u32> {
    if value > MAX_VALUE {
        return Err(Error::ValueTooLarge {
            input: input.to_string(),
            value,
        });
    }
    Ok(value)
}
