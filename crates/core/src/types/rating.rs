//! Average customer rating on a 0-5 scale.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest rating the upstream API hands out.
pub const MAX_RATING: f64 = 5.0;

/// Error constructing a [`Rating`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("rating is not a number")]
    NotANumber,
    #[error("rating {0} is outside 0..=5")]
    OutOfRange(f64),
    #[error("invalid rating text: {0:?}")]
    Invalid(String),
}

/// An average rating, e.g. `4.3`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN or outside `0.0..=5.0`.
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if value.is_nan() {
            return Err(RatingError::NotANumber);
        }
        if !(0.0..=MAX_RATING).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parse the API's textual rating (`"4.3"`).
    ///
    /// Restaurants without enough reviews report `"--"`, which is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a number in range.
    pub fn parse(text: &str) -> Result<Self, RatingError> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| RatingError::Invalid(text.to_string()))?;
        Self::new(value)
    }

    /// The numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether this rating meets a threshold (`rating >= threshold`).
    #[must_use]
    pub fn at_least(self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(Rating::new(4.5).is_ok());
        assert!(Rating::new(0.0).is_ok());
        assert!(Rating::new(5.0).is_ok());
        assert_eq!(Rating::new(5.1), Err(RatingError::OutOfRange(5.1)));
        assert_eq!(Rating::new(-1.0), Err(RatingError::OutOfRange(-1.0)));
        assert_eq!(Rating::new(f64::NAN), Err(RatingError::NotANumber));
    }

    #[test]
    fn test_rating_parse() {
        assert!((Rating::parse("4.3").unwrap().value() - 4.3).abs() < f64::EPSILON);
        assert!((Rating::parse(" 3.9 ").unwrap().value() - 3.9).abs() < f64::EPSILON);
        assert!(matches!(Rating::parse("--"), Err(RatingError::Invalid(_))));
    }

    #[test]
    fn test_rating_threshold_is_inclusive() {
        let rating = Rating::new(4.5).unwrap();
        assert!(rating.at_least(4.5));
        assert!(!rating.at_least(4.6));
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::new(4.0).unwrap().to_string(), "4.0");
        assert_eq!(Rating::new(4.26).unwrap().to_string(), "4.3");
    }

    #[test]
    fn test_rating_deserialize_validates() {
        let rating: Rating = serde_json::from_str("4.6").unwrap();
        assert!((rating.value() - 4.6).abs() < f64::EPSILON);
        assert!(serde_json::from_str::<Rating>("7.0").is_err());
    }
}
