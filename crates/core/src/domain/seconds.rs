// Seconds - the clock delta sent to evm_increaseTime

use crate::error::ClockError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default advance used when no delta is given.
///
/// 480 seconds (8 minutes). The historical invocation was labelled "1 hour"
/// but passed 480; the literal argument is what we keep.
pub const DEFAULT_ADVANCE_SECONDS: u64 = 480;

/// Non-negative number of seconds to move a development node's clock.
///
/// Serializes as a bare JSON integer so it can be dropped straight into the
/// `evm_increaseTime` params array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(u64);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0);
    pub const ONE_HOUR: Seconds = Seconds(3600);

    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for Seconds {
    fn default() -> Self {
        Self(DEFAULT_ADVANCE_SECONDS)
    }
}

impl From<u64> for Seconds {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

impl TryFrom<i64> for Seconds {
    type Error = ClockError;

    fn try_from(secs: i64) -> Result<Self, Self::Error> {
        u64::try_from(secs)
            .map(Self)
            .map_err(|_| ClockError::InvalidInput(format!("seconds must be non-negative, got {}", secs)))
    }
}

impl FromStr for Seconds {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(ClockError::InvalidInput(format!(
                "seconds must be non-negative, got {}",
                trimmed
            )));
        }

        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|e| ClockError::InvalidInput(format!("invalid seconds '{}': {}", trimmed, e)))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_literal_sample_argument() {
        assert_eq!(Seconds::default().get(), 480);
        assert_ne!(Seconds::default(), Seconds::ONE_HOUR);
    }

    #[test]
    fn test_try_from_negative_rejected() {
        let err = Seconds::try_from(-1i64).unwrap_err();
        assert!(matches!(err, ClockError::InvalidInput(_)));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_try_from_zero_accepted() {
        assert_eq!(Seconds::try_from(0i64).unwrap(), Seconds::ZERO);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3600".parse::<Seconds>().unwrap(), Seconds::ONE_HOUR);
        assert_eq!(" 480 ".parse::<Seconds>().unwrap().get(), 480);
    }

    #[test]
    fn test_parse_rejects_negative_and_garbage() {
        let negative = "-480".parse::<Seconds>().unwrap_err();
        assert!(negative.to_string().contains("non-negative"));

        let garbage = "an hour".parse::<Seconds>().unwrap_err();
        assert!(matches!(garbage, ClockError::InvalidInput(_)));

        assert!("".parse::<Seconds>().is_err());
        assert!("1.5".parse::<Seconds>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_value(Seconds::new(480)).unwrap();
        assert_eq!(json, serde_json::json!(480));
    }
}
