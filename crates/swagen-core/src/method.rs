//! HTTP verb classification

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An HTTP request method as used for Swagger path item keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Post,
    Put,
    Get,
    Delete,
    Patch,
    Head,
    Connect,
    Options,
    Trace,
    /// Any token that is not one of the nine standard verbs
    Unknown,
}

impl Method {
    /// The nine standard verbs, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Post,
        Self::Put,
        Self::Get,
        Self::Delete,
        Self::Patch,
        Self::Head,
        Self::Connect,
        Self::Options,
        Self::Trace,
    ];

    /// Case-insensitive parse. Never fails; unrecognized tokens are `Unknown`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| token.eq_ignore_ascii_case(m.as_str()))
            .unwrap_or(Self::Unknown)
    }

    /// Lowercase token, `"unknown"` for [`Method::Unknown`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Put => "put",
            Self::Get => "get",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Head => "head",
            Self::Connect => "connect",
            Self::Options => "options",
            Self::Trace => "trace",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<&str> for Method {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
