//! Pair classification: the decision table that drives the reduction loop.
//!
//! `classify` looks at one [`Pair`] and the current repetition count and returns
//! exactly one [`Decision`]. Rules are tried in a fixed order and are mutually
//! exclusive; anything left over is [`Decision::Unreachable`], which the reducer
//! reports as an internal invariant violation rather than a user error.
use std::cmp::Ordering;

use crate::core::pairs::Pair;
use crate::types::DigitClass;

/// Repeatable symbols may appear at most this many times in a row.
pub const MAX_REPEATS: u32 = 3;

/// The smaller half of a subtractive pair may be at most one order of magnitude below.
const MAX_SUBTRACTIVE_RATIO: u32 = 10;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Decision {
    End,
    FirstSymbol,
    DescendingAfterEqualOrGreater,
    RepeatAccumulate,
    TooManyRepeats,
    NonRepeatableSymbolRepeated,
    SubtractValid,
    SubtractInvalid,
    Unreachable,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Decision::End => "End",
            Decision::FirstSymbol => "FirstSymbol",
            Decision::DescendingAfterEqualOrGreater => "DescendingAfterEqualOrGreater",
            Decision::RepeatAccumulate => "RepeatAccumulate",
            Decision::TooManyRepeats => "TooManyRepeats",
            Decision::NonRepeatableSymbolRepeated => "NonRepeatableSymbolRepeated",
            Decision::SubtractValid => "SubtractValid",
            Decision::SubtractInvalid => "SubtractInvalid",
            Decision::Unreachable => "Unreachable",
        };
        write!(f, "{}", s)
    }
}

fn subtractive_ratio_ok(prev: u32, curr: u32) -> bool {
    curr <= prev.saturating_mul(MAX_SUBTRACTIVE_RATIO)
}

pub fn classify(repetition: u32, pair: Pair) -> Decision {
    let prev_class = pair.prev.map(DigitClass::of);
    let curr_class = pair.curr.map(DigitClass::of);

    match (repetition, prev_class, curr_class, pair.sign()) {
        (_, Some(_), None, _) => Decision::End,
        (_, None, Some(_), _) => Decision::FirstSymbol,
        (_, Some(_), Some(_), Ordering::Greater) => Decision::DescendingAfterEqualOrGreater,

        (r, Some(Some(DigitClass::One)), Some(Some(DigitClass::One)), Ordering::Equal)
            if r < MAX_REPEATS =>
        {
            Decision::RepeatAccumulate
        }
        (_, Some(Some(DigitClass::One)), Some(Some(DigitClass::One)), Ordering::Equal) => {
            Decision::TooManyRepeats
        }
        (_, Some(Some(DigitClass::Five)), Some(Some(DigitClass::Five)), Ordering::Equal) => {
            Decision::NonRepeatableSymbolRepeated
        }

        (_, Some(Some(DigitClass::One)), Some(Some(_)), Ordering::Less) => {
            match (pair.prev, pair.curr) {
                (Some(p), Some(c)) if subtractive_ratio_ok(p, c) => Decision::SubtractValid,
                _ => Decision::SubtractInvalid,
            }
        }
        (_, Some(Some(DigitClass::Five)), Some(Some(_)), Ordering::Less) => {
            Decision::SubtractInvalid
        }

        _ => Decision::Unreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Numeral;

    fn pair(p: Option<Numeral>, c: Option<Numeral>) -> Pair {
        Pair::new(p.map(Numeral::value), c.map(Numeral::value))
    }

    #[test]
    fn ends_and_starts() {
        assert_eq!(classify(1, pair(Some(Numeral::X), None)), Decision::End);
        assert_eq!(classify(0, pair(None, Some(Numeral::V))), Decision::FirstSymbol);
    }

    #[test]
    fn descending_starts_a_new_term() {
        for rep in 0..5 {
            assert_eq!(
                classify(rep, pair(Some(Numeral::V), Some(Numeral::I))),
                Decision::DescendingAfterEqualOrGreater
            );
        }
    }

    #[test]
    fn repeats_up_to_three() {
        let ii = pair(Some(Numeral::I), Some(Numeral::I));
        assert_eq!(classify(1, ii), Decision::RepeatAccumulate);
        assert_eq!(classify(2, ii), Decision::RepeatAccumulate);
        assert_eq!(classify(3, ii), Decision::TooManyRepeats);
        assert_eq!(classify(7, ii), Decision::TooManyRepeats);
    }

    #[test]
    fn half_units_never_repeat() {
        for n in [Numeral::V, Numeral::L, Numeral::D] {
            assert_eq!(
                classify(1, pair(Some(n), Some(n))),
                Decision::NonRepeatableSymbolRepeated
            );
        }
    }

    #[test]
    fn subtraction_needs_a_unit_one_step_below() {
        assert_eq!(
            classify(1, pair(Some(Numeral::I), Some(Numeral::V))),
            Decision::SubtractValid
        );
        assert_eq!(
            classify(1, pair(Some(Numeral::C), Some(Numeral::M))),
            Decision::SubtractValid
        );
        assert_eq!(
            classify(1, pair(Some(Numeral::I), Some(Numeral::C))),
            Decision::SubtractInvalid
        );
        // A repeated group may still be subtracted as a whole.
        assert_eq!(
            classify(2, pair(Some(Numeral::I), Some(Numeral::X))),
            Decision::SubtractValid
        );
        assert_eq!(
            classify(1, pair(Some(Numeral::V), Some(Numeral::X))),
            Decision::SubtractInvalid
        );
    }

    #[test]
    fn impossible_shapes_are_unreachable() {
        assert_eq!(classify(1, Pair::new(None, None)), Decision::Unreachable);
        // Values outside the symbol table have no digit class.
        assert_eq!(classify(1, Pair::new(Some(2), Some(2))), Decision::Unreachable);
        assert_eq!(classify(1, Pair::new(Some(1), Some(3))), Decision::Unreachable);
    }

    #[test]
    fn every_reachable_symbol_pair_is_classified() {
        let symbols = std::iter::once(None).chain(Numeral::ALL.into_iter().map(Some));
        for p in symbols.clone() {
            for c in symbols.clone() {
                if p.is_none() && c.is_none() {
                    continue;
                }
                for rep in 0..=4 {
                    let d = classify(rep, pair(p, c));
                    assert_ne!(d, Decision::Unreachable, "rep={rep} {:?} {:?}", p, c);
                }
            }
        }
    }
}
