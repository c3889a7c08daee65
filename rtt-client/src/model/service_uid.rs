//! RTT service UID type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when a service UID is empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service UID: {reason}")]
pub struct InvalidServiceUid {
    reason: &'static str,
}

/// A Realtime Trains service unique identifier (e.g. `"W12345"`).
///
/// UIDs are opaque: the only rule is that they are non-empty. Combined with
/// a running date, a UID identifies exactly one train service.
///
/// # Examples
///
/// ```
/// use rtt_client::model::ServiceUid;
///
/// let uid: ServiceUid = "W12345".parse().unwrap();
/// assert_eq!(uid.as_str(), "W12345");
///
/// assert!(ServiceUid::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceUid(String);

impl ServiceUid {
    /// Create a service UID, rejecting the empty string.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidServiceUid> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidServiceUid {
                reason: "service UID cannot be empty",
            });
        }
        Ok(ServiceUid(s))
    }

    /// Returns the UID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ServiceUid {
    type Err = InvalidServiceUid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ServiceUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceUid({})", self.0)
    }
}

impl fmt::Display for ServiceUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_string() {
        assert!(ServiceUid::new("W12345").is_ok());
        assert!(ServiceUid::new("C81234").is_ok());
        assert!(ServiceUid::new("x").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = ServiceUid::new("").unwrap_err();
        assert_eq!(err.to_string(), "invalid service UID: service UID cannot be empty");
        assert!("".parse::<ServiceUid>().is_err());
    }

    #[test]
    fn display_and_debug() {
        let uid = ServiceUid::new("P70052").unwrap();
        assert_eq!(uid.to_string(), "P70052");
        assert_eq!(format!("{uid:?}"), "ServiceUid(P70052)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let uid = ServiceUid::new("W12345").unwrap();
        assert_eq!(serde_json::to_string(&uid).unwrap(), r#""W12345""#);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string survives construction unchanged
        #[test]
        fn roundtrip(s in ".+") {
            let uid = ServiceUid::new(s.clone()).unwrap();
            prop_assert_eq!(uid.as_str(), s.as_str());
        }
    }
}
