//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


// Any serializable state can ride in a single path segment as long as it round-trips through Display and FromStr
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display the state in a way that can be parsed by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateParseError {
    #[error("Failed to decode base64: {0}")]
    DecodeError(#[from] base64::DecodeError),
    #[error("Failed to deserialize: {0}")]
    CiboriumError(#[from] ciborium::de::Error<std::io::Error>),
}

// Parse the state from a string that was created by Display
impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE.decode(s.as_bytes())?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))?;
        Ok(parsed)
    }
}
