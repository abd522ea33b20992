//! Registration identity and record types.

use crate::TagSet;

/// Reserved name for the single native (untemplated) registration.
pub const NATIVE_REGISTRATION_NAME: &str = "$Default";

/// Name of one subscription unit on the hub.
///
/// A device holds at most one native registration plus any number of
/// template registrations, each under a caller-chosen name.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "String", from = "String")]
pub enum RegistrationName {
    /// The untemplated registration, stored under `$Default`.
    Native,
    /// A named template registration.
    Template(String),
}

impl RegistrationName {
    /// Create a template registration name.
    pub fn template(name: impl Into<String>) -> Self {
        Self::Template(name.into())
    }

    /// Parse a stored name string.
    pub fn parse(name: &str) -> Self {
        if name == NATIVE_REGISTRATION_NAME {
            Self::Native
        } else {
            Self::Template(name.to_owned())
        }
    }

    /// The string key this name is stored under.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Native => NATIVE_REGISTRATION_NAME,
            Self::Template(name) => name,
        }
    }

    /// Whether this is a template registration name.
    pub fn is_template(&self) -> bool {
        matches!(self, Self::Template(_))
    }
}

impl std::fmt::Display for RegistrationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RegistrationName {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<RegistrationName> for String {
    fn from(name: RegistrationName) -> Self {
        name.as_str().to_owned()
    }
}

/// One live subscription as confirmed by the hub.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Registration {
    /// Registration name (`$Default` for native).
    pub name: RegistrationName,
    /// Opaque identifier assigned by the hub.
    pub remote_id: String,
    /// Device push-provider token the registration is bound to.
    pub provider_token: String,
    /// Tags the registration is subscribed to.
    pub tags: TagSet,
    /// Message transformation template; `Some` iff this is a template
    /// registration.
    pub body_template: Option<String>,
}

impl Registration {
    /// Whether this is a template registration.
    pub fn is_template(&self) -> bool {
        self.body_template.is_some()
    }
}
