use crate::error::{PolicyError, PolicyResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheme carried by every provider descriptor.
pub const CONTENT_SCHEME: &str = "content";

// ---------------------------------------------------------------------------
// ProviderUri — opaque structured resource descriptor
// ---------------------------------------------------------------------------

/// An opaque structured identifier naming a provider resource.
///
/// Canonical form is `scheme://authority/segment/...`. Scope information
/// (package, feature) travels in the authority and path segments; the type
/// itself attaches no meaning to them -- policies do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderUri {
    scheme: String,
    authority: String,
    segments: Vec<String>,
}

impl ProviderUri {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path_segments(&self) -> &[String] {
        &self.segments
    }

    /// Last path segment, if any. Feature-gated descriptors carry the
    /// feature name here.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for ProviderUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for ProviderUri {
    type Err = PolicyError;

    fn from_str(s: &str) -> PolicyResult<Self> {
        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| PolicyError::Malformed(s.to_string()))?;
        if scheme.is_empty() {
            return Err(PolicyError::MissingScheme);
        }

        let mut parts = rest.split('/');
        let authority = parts.next().unwrap_or("");
        if authority.is_empty() {
            return Err(PolicyError::MissingAuthority);
        }

        let mut segments = Vec::new();
        for segment in parts {
            if segment.is_empty() {
                return Err(PolicyError::EmptyPathSegment);
            }
            segments.push(segment.to_string());
        }

        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            segments,
        })
    }
}

// Serialized as the canonical string form.
impl Serialize for ProviderUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ProviderUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// UriBuilder — consuming builder for ProviderUri
// ---------------------------------------------------------------------------

/// Builder for a `ProviderUri`, rooted at a scheme and authority.
///
/// Policies return their package-scoped base as a builder so variants can
/// push further scope segments before building.
#[derive(Debug, Clone)]
pub struct UriBuilder {
    scheme: String,
    authority: String,
    segments: Vec<String>,
}

impl UriBuilder {
    pub fn new(scheme: impl Into<String>, authority: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            authority: authority.into(),
            segments: Vec::new(),
        }
    }

    /// Builder rooted at `content://{authority}`.
    pub fn content(authority: impl Into<String>) -> Self {
        Self::new(CONTENT_SCHEME, authority)
    }

    /// Append a path segment.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn build(self) -> ProviderUri {
        ProviderUri {
            scheme: self.scheme,
            authority: self.authority,
            segments: self.segments,
        }
    }
}
