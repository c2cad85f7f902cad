#![doc = r#"
romanus — a validating Roman numeral parser.

This crate converts Roman numeral strings into integers while enforcing the grammar of
the numeral system in a single left-to-right pass: the allowed alphabet, repetition
limits, legal subtractive pairs, and the maximum value of 3999. It powers the `romanus`
CLI and can be embedded in your own Rust applications.

How it works
------------
Each symbol is resolved to its value, the values are viewed as a sequence of adjacent
pairs padded with an empty marker at both ends, and every pair is classified into a
`Decision` by a pure, ordered rule table. A reduction loop applies the decisions to a
running list of terms and either returns their sum or stops at the first violation.

Quick start
-----------
```rust
fn main() -> romanus::Result<()> {
    assert_eq!(romanus::convert("MCMXCIV")?, 1994);
    assert_eq!(romanus::convert(&romanus::normalize(" mmxxvi "))?, 2026);
    Ok(())
}
```

Error handling
--------------
All public functions return `romanus::Result<T>`. Every `romanus::Error` variant except
`InternalInvariant` describes a problem with the input; `InternalInvariant` signals a
defect in the classifier and is reported under a separate `ErrorCategory`.

```rust
use romanus::{convert, Error, ErrorCategory};

match convert("IIII") {
    Ok(n) => println!("{n}"),
    Err(e) if e.category() == ErrorCategory::Internal => eprintln!("bug: {e}"),
    Err(Error::TooManyRepeats { input }) => eprintln!("{input} repeats too often"),
    Err(other) => eprintln!("Error: {other}"),
}
```

Batch helpers
-------------
```rust
let report = romanus::convert_batch(["xiv", "VV", "MMMCMXCIX"]);
assert_eq!(report.converted, 2);
assert_eq!(report.rejected, 1);
```

Useful modules
--------------
- [`api`] — high-level entry points and serializable records.
- [`core`] — lookup, pair construction, classification, and reduction.
- [`types`] — the `Numeral` table, `DigitClass`, and `OutputFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::classify::{Decision, classify};
pub use crate::core::pairs::Pair;
pub use crate::core::params::SessionParams;
pub use error::{Error, ErrorCategory, Result};
pub use types::{DigitClass, MAX_VALUE, Numeral, OutputFormat};

// High-level API re-exports
pub use api::{
    BatchReport, ConversionRecord, convert, convert_batch, convert_option, normalize,
};
