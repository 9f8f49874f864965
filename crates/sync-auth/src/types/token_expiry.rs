//! Renewal token expiry instant.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::{Error, ResponseField};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// The absolute instant after which a renewal token must not be used.
///
/// Stored as fractional seconds since the Unix epoch, matching the
/// precision of the field sent by the server. Always finite and
/// non-negative. An expiry of `0` is valid and simply already in the past.
///
/// # Example
///
/// ```
/// use sync_auth::TokenExpiry;
///
/// let expiry = TokenExpiry::new(1700000000.0).unwrap();
/// assert_eq!(expiry.as_secs_f64(), 1700000000.0);
/// assert!(TokenExpiry::new(-1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct TokenExpiry(f64);

impl TokenExpiry {
    /// Create a new expiry from seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming the expiry field if the
    /// value is NaN, infinite, or negative.
    pub fn new(secs: f64) -> Result<Self, Error> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(Error::malformed(ResponseField::Expiry));
        }
        Ok(Self(secs))
    }

    /// Returns the expiry as seconds since the Unix epoch.
    pub fn as_secs_f64(&self) -> f64 {
        self.0
    }

    /// Converts the expiry to a UTC timestamp.
    ///
    /// Returns `None` if the instant lies beyond the range chrono can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.0.trunc();
        if secs > i64::MAX as f64 {
            return None;
        }
        let nanos = ((self.0 - secs) * NANOS_PER_SEC).round();
        let (secs, nanos) = if nanos >= NANOS_PER_SEC {
            (secs as i64 + 1, 0)
        } else {
            (secs as i64, nanos as u32)
        };
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Returns true if the token is no longer usable at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let now =
            now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / NANOS_PER_SEC;
        now >= self.0
    }

    /// Returns true if the token is no longer usable.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Display for TokenExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(at) => write!(f, "{}", at.to_rfc3339()),
            None => write!(f, "{}s", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_valid_and_expired() {
        let expiry = TokenExpiry::new(0.0).unwrap();
        assert_eq!(expiry.as_secs_f64(), 0.0);
        assert!(expiry.is_expired());
        assert_eq!(expiry.to_datetime(), DateTime::<Utc>::from_timestamp(0, 0));
    }

    #[test]
    fn negative_rejected() {
        let err = TokenExpiry::new(-0.5).unwrap_err();
        assert_eq!(err.malformed_field(), Some(ResponseField::Expiry));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(TokenExpiry::new(f64::NAN).is_err());
        assert!(TokenExpiry::new(f64::INFINITY).is_err());
        assert!(TokenExpiry::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn fractional_seconds_preserved() {
        let expiry = TokenExpiry::new(1700000000.25).unwrap();
        let at = expiry.to_datetime().unwrap();
        assert_eq!(at.timestamp(), 1700000000);
        assert_eq!(at.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn expiry_comparison_against_now() {
        let expiry = TokenExpiry::new(1700000000.0).unwrap();
        let before = DateTime::<Utc>::from_timestamp(1699999999, 0).unwrap();
        let exact = DateTime::<Utc>::from_timestamp(1700000000, 0).unwrap();
        assert!(!expiry.is_expired_at(before));
        assert!(expiry.is_expired_at(exact));
    }

    #[test]
    fn out_of_range_has_no_datetime() {
        let expiry = TokenExpiry::new(f64::MAX).unwrap();
        assert!(expiry.to_datetime().is_none());
        assert!(!expiry.is_expired());
    }

    #[test]
    fn display_uses_rfc3339() {
        let expiry = TokenExpiry::new(0.0).unwrap();
        assert_eq!(expiry.to_string(), "1970-01-01T00:00:00+00:00");
    }
}
