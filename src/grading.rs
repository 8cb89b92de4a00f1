//! Remark derivation from a student's grade.
//!
//! Grades travel and are stored as text. The remark is recomputed from that
//! text on every write and is never accepted from a client.

use std::fmt;

/// Minimum grade that earns a `PASS` remark.
pub const PASS_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Remark {
    Pass,
    Fail,
    /// No grade entered yet.
    Empty,
}

impl Remark {
    pub fn as_str(&self) -> &'static str {
        match self {
            Remark::Pass => "PASS",
            Remark::Fail => "FAIL",
            Remark::Empty => "",
        }
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps grade text to its remark.
///
/// Empty text yields [`Remark::Empty`]. Anything else is read as a number and
/// compared against [`PASS_THRESHOLD`]; text that is not a number never
/// compares as passing and therefore yields [`Remark::Fail`].
pub fn remark_for(grade: &str) -> Remark {
    if grade.is_empty() {
        return Remark::Empty;
    }

    let value = grade.trim().parse::<f64>().unwrap_or(f64::NAN);
    if value >= PASS_THRESHOLD {
        Remark::Pass
    } else {
        Remark::Fail
    }
}

/// Parses grade text into a finite number, `None` when it is not one.
pub fn parse_grade(grade: &str) -> Option<f64> {
    grade
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
