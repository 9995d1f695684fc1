//! Reader of a bounded natural number.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::debug;

use crate::errors::{AltsortError, Result};

/// Reason a line of input was rejected.
///
/// The `Display` text is the message shown to the user before the next attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The line is not a number, or has trailing characters after one.
    #[error("Invalid input. Input value must be a natural number. Please, try again:")]
    Malformed,

    /// The number has a fractional part.
    #[error("Input value must be a natural number. Please, try again:")]
    NotIntegral,

    /// The number is outside the accepted range.
    #[error("Input value must be in the range from {min} to {max}, try again:")]
    OutOfRange {
        /// Lower bound of the range.
        min: usize,
        /// Upper bound of the range.
        max: usize,
    },
}

/// Parses a single line as a natural number within `range`.
///
/// Surrounding whitespace is ignored. The text is read as a floating-point literal, so `4.0` and
/// `4e0` are accepted as 4, while `4.672` is not.
///
/// # Errors
///
/// [`ValidationError`] is returned when the text is not an integral number within `range`.
pub fn parse_natural_number(
    text: &str,
    range: &RangeInclusive<usize>,
) -> Result<usize, ValidationError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::Malformed)?;
    if !value.is_finite() {
        return Err(ValidationError::Malformed);
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotIntegral);
    }
    let (min, max) = (*range.start(), *range.end());
    if value < min as f64 || value > max as f64 {
        return Err(ValidationError::OutOfRange { min, max });
    }
    // In range and integral, so the cast is exact.
    Ok(value as usize)
}

/// Reads lines from `rdr` until one holds a natural number within `range`.
///
/// Blank lines are skipped. Every rejected line is answered on `wtr` with the message of its
/// [`ValidationError`], and reading continues.
///
/// # Arguments
///
///  - `rdr`: Source of the lines.
///  - `wtr`: Sink of the retry messages.
///  - `range`: Inclusive range of accepted values.
///
/// # Errors
///
/// [`AltsortError::InputExhausted`] is returned when `rdr` ends before a valid value is read,
/// and [`AltsortError::StdIo`] when reading or writing fails.
pub fn read_natural_number<R, W>(
    mut rdr: R,
    mut wtr: W,
    range: &RangeInclusive<usize>,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut buf = vec![];
    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            return Err(AltsortError::InputExhausted);
        }
        // Invalid UTF-8 can never parse as a number, so it is rejected like any other garbage.
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }
        match parse_natural_number(&line, range) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(input = %line.trim_end(), reason = ?e, "rejected input");
                writeln!(wtr, "{e}")?;
                wtr.flush()?;
            }
        }
    }
}
