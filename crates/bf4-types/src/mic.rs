//! Market Identifier Codes.

use serde::{Deserialize, Serialize};

/// Market Identifier Code of the trading venue queried for history data
/// (e.g. `XETR` for Xetra, `XFRA` for the Frankfurt floor).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mic(String);

impl Mic {
    /// Creates a MIC from an arbitrary code. The code is uppercased, since
    /// ISO 10383 codes are always uppercase.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_ascii_uppercase())
    }

    /// Xetra, the electronic venue. Default for all history queries.
    pub fn xetra() -> Self {
        Self("XETR".to_string())
    }

    /// Börse Frankfurt floor trading.
    pub fn frankfurt() -> Self {
        Self("XFRA".to_string())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Mic {
    fn default() -> Self {
        Self::xetra()
    }
}

impl std::fmt::Display for Mic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Mic {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
