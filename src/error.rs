// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

use thiserror::Error;

/// Errors surfaced by every closest-pair solver.
///
/// Both variants are invalid input: a call either returns a real pair or
/// fails fast with one of these, never a partial result.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid input: need at least 2 points, got {len}")]
    TooFewPoints { len: usize },
    #[error("invalid input: point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

impl Error {
    /// True for every input-validation failure.
    pub fn is_invalid_input(&self) -> bool {
        return matches!(
            self,
            Error::TooFewPoints { .. } | Error::NonFiniteCoordinate { .. }
        );
    }
}

/// Check a point set before solving.
pub(crate) fn validate(points: &[crate::Point]) -> Result<(), Error> {
    if points.len() < 2 {
        return Err(Error::TooFewPoints { len: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(Error::NonFiniteCoordinate { index });
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn rejects_empty_and_single() {
        assert_eq!(validate(&[]), Err(Error::TooFewPoints { len: 0 }));
        assert_eq!(
            validate(&[Point::new(1.0, 1.0)]),
            Err(Error::TooFewPoints { len: 1 })
        );
    }

    #[test]
    fn rejects_nan() {
        let points = [Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        let err = validate(&points).unwrap_err();
        assert_eq!(err, Error::NonFiniteCoordinate { index: 1 });
        assert!(err.is_invalid_input());
    }

    #[test]
    fn message_names_the_problem() {
        let err = Error::TooFewPoints { len: 1 };
        assert_eq!(err.to_string(), "invalid input: need at least 2 points, got 1");
    }
}
