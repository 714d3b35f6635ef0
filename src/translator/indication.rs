//! Braille indication
//!
//! Braille indicators are reserved cells inserted into the braille text to
//! change the interpretation of the unit(s) that follow, rather than
//! encoding a symbol themselves. Two indications exist here: capitalization
//! and digit runs.
//!
//! * [`numeric::Indicator`]: a state machine that knows whether a scan is
//!   inside a digit run, so the number indicator is emitted once per run
//! * [`uppercase`]: the casing pattern of a word on the encoding side and
//!   the capitalization scope opened by indicator cells on the decoding side

pub mod numeric;
pub mod uppercase;
