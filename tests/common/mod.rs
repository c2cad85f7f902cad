//! Shared helpers for integration tests.

const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Canonical integer-to-Roman encoding used as a test oracle.
pub fn encode(mut n: u32) -> String {
    let mut out = String::new();
    for (value, symbol) in TABLE {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

pub const SYMBOLS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Every string over the seven symbols with length in `1..=max_len`.
pub fn all_strings(max_len: usize) -> Vec<String> {
    let mut all = Vec::new();
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(layer.len() * SYMBOLS.len());
        for prefix in &layer {
            for c in SYMBOLS {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        all.extend(next.iter().cloned());
        layer = next;
    }
    all
}

/// Outcome kinds shared by the reference reducer and the crate's errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    TooManyRepeats,
    NonRepeatable,
    IllegalSubtraction,
    TooLarge,
}

pub fn kind_of(e: &romanus::Error) -> Option<Kind> {
    match e {
        romanus::Error::TooManyRepeats { .. } => Some(Kind::TooManyRepeats),
        romanus::Error::NonRepeatableSymbolRepeated { .. } => Some(Kind::NonRepeatable),
        romanus::Error::IllegalSubtraction { .. } => Some(Kind::IllegalSubtraction),
        romanus::Error::ValueTooLarge { .. } => Some(Kind::TooLarge),
        _ => None,
    }
}

fn value(c: char) -> u32 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        _ => 1000,
    }
}

fn is_half(v: u32) -> bool {
    matches!(v, 5 | 50 | 500)
}

/// Straightforward recursive reducer over a non-empty symbol string, used as an
/// oracle for the pair classifier.
pub fn reference(numeral: &str) -> Result<u32, Kind> {
    fn step(values: &[u32], terms: &mut Vec<u32>, repetition: u32) -> Result<u32, Kind> {
        let [prev, rest @ ..] = values else {
            return Ok(terms.iter().sum());
        };
        let Some(&curr) = rest.first() else {
            return Ok(terms.iter().sum());
        };
        if *prev > curr {
            terms.push(curr);
            return step(rest, terms, 1);
        }
        if *prev == curr {
            if is_half(curr) {
                return Err(Kind::NonRepeatable);
            }
            if repetition >= 3 {
                return Err(Kind::TooManyRepeats);
            }
            *terms.last_mut().unwrap() += curr;
            return step(rest, terms, repetition + 1);
        }
        if is_half(*prev) || curr > prev * 10 {
            return Err(Kind::IllegalSubtraction);
        }
        let last = terms.last_mut().unwrap();
        *last = curr - *last;
        step(rest, terms, 1)
    }

    let values: Vec<u32> = numeral.chars().map(value).collect();
    let mut terms = vec![values[0]];
    let total = step(&values, &mut terms, 1)?;
    if total > 3999 {
        return Err(Kind::TooLarge);
    }
    Ok(total)
}
