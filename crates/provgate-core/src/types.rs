use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Typed identifiers — prevent stringly-typed confusion
// ---------------------------------------------------------------------------

macro_rules! define_name {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_name!(
    PackageName,
    "Package identity of a requesting or hosting application. Stored verbatim."
);
define_name!(
    FeatureName,
    "Name of a gated feature. Ordered lexicographically so allowlists can be \
     sorted and binary-searched."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_construction() {
        let from_str = PackageName::new("com.example.app");
        let from_string = PackageName::from(String::from("com.example.app"));
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.as_str(), "com.example.app");
    }

    #[test]
    fn test_package_name_display() {
        let name = PackageName::new("com.example.app");
        assert_eq!(name.to_string(), "com.example.app");
    }

    #[test]
    fn test_feature_name_lexicographic_ordering() {
        let a = FeatureName::new("export");
        let b = FeatureName::new("premium");
        assert!(a < b);

        let mut features = vec![
            FeatureName::new("premium"),
            FeatureName::new("ads_free"),
            FeatureName::new("export"),
        ];
        features.sort();
        assert_eq!(features[0].as_str(), "ads_free");
        assert_eq!(features[1].as_str(), "export");
        assert_eq!(features[2].as_str(), "premium");
    }

    #[test]
    fn test_typed_names_are_distinct_types() {
        let package = PackageName::new("same");
        let feature = FeatureName::new("same");
        // Same content, different types; comparable only through as_str.
        assert_eq!(package.as_str(), feature.as_str());
    }

    #[test]
    fn test_name_serde_roundtrip() {
        let feature = FeatureName::new("premium");
        let json = serde_json::to_string(&feature).unwrap();
        let back: FeatureName = serde_json::from_str(&json).unwrap();
        assert_eq!(feature, back);
    }
}
