use provgate_core::{
    Authorizer, FeatureName, PackageName, ProviderPolicy, ProviderUri, QueryBuilder, UriBuilder,
};

use crate::package::PackagePolicy;

/// Fixed scope segment under which feature descriptors live.
pub const FEATURES_SEGMENT: &str = "features";

// ---------------------------------------------------------------------------
// FeatureAuthorizationPolicy — sorted-allowlist membership gate
// ---------------------------------------------------------------------------

/// Authorize only a given set of features.
///
/// Construction intent is split into two types: this one owns the
/// allowlist and gates inbound requests; `FeatureQueryPolicy` builds
/// outbound queries and owns no allowlist. An instance without an
/// allowlist therefore cannot be asked for an authorization decision.
#[derive(Debug, Clone)]
pub struct FeatureAuthorizationPolicy {
    base: PackagePolicy,
    /// Sorted ascending and deduplicated at construction; never mutated.
    /// Sorted order is what makes the binary search in `is_authorized`
    /// valid.
    authorized_features: Vec<FeatureName>,
}

impl FeatureAuthorizationPolicy {
    pub fn new<I, F>(package_name: impl Into<PackageName>, authorized_features: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FeatureName>,
    {
        let mut features: Vec<FeatureName> =
            authorized_features.into_iter().map(Into::into).collect();
        features.sort();
        features.dedup();
        Self {
            base: PackagePolicy::new(package_name),
            authorized_features: features,
        }
    }

    /// The allowlist, in its internal sorted order.
    pub fn authorized_features(&self) -> &[FeatureName] {
        &self.authorized_features
    }
}

impl ProviderPolicy for FeatureAuthorizationPolicy {
    fn package_name(&self) -> &PackageName {
        self.base.package_name()
    }

    fn base_uri(&self) -> UriBuilder {
        self.base.base_uri().push(FEATURES_SEGMENT)
    }

    fn matcher_path(&self) -> String {
        format!("{}/*", FEATURES_SEGMENT)
    }
}

impl QueryBuilder for FeatureAuthorizationPolicy {
    fn query_uri(&self) -> Option<ProviderUri> {
        // Constructed for authorization: no queried feature was set, so
        // this instance is not query-capable. A signal, not an error.
        None
    }

    fn query_selection_args(&self) -> Option<Vec<String>> {
        None
    }
}

impl Authorizer for FeatureAuthorizationPolicy {
    fn is_authorized(&self, uri: &ProviderUri, selection_args: &[String]) -> bool {
        // Package identity first; feature membership is never evaluated
        // for a mismatched package.
        if !self.base.is_authorized(uri, selection_args) {
            return false;
        }

        // The feature name travels as the last path segment.
        let Some(feature) = uri.last_segment() else {
            tracing::debug!(
                package = %self.base.package_name(),
                "deny: descriptor has no feature segment"
            );
            return false;
        };

        let found = self
            .authorized_features
            .binary_search_by(|candidate| candidate.as_str().cmp(feature))
            .is_ok();
        if !found {
            tracing::debug!(
                package = %self.base.package_name(),
                feature,
                "deny: feature not in allowlist"
            );
        }
        found
    }
}

// ---------------------------------------------------------------------------
// FeatureQueryPolicy — builds the outbound query for a single feature
// ---------------------------------------------------------------------------

/// Query-building counterpart of `FeatureAuthorizationPolicy`: holds the
/// single feature the caller wants access to.
///
/// Deliberately implements no `Authorizer`: without an allowlist there is
/// nothing sound to authorize against.
#[derive(Debug, Clone)]
pub struct FeatureQueryPolicy {
    base: PackagePolicy,
    queried_feature: FeatureName,
}

impl FeatureQueryPolicy {
    pub fn new(
        package_name: impl Into<PackageName>,
        queried_feature: impl Into<FeatureName>,
    ) -> Self {
        Self {
            base: PackagePolicy::new(package_name),
            queried_feature: queried_feature.into(),
        }
    }

    pub fn queried_feature(&self) -> &FeatureName {
        &self.queried_feature
    }
}

impl ProviderPolicy for FeatureQueryPolicy {
    fn package_name(&self) -> &PackageName {
        self.base.package_name()
    }

    fn base_uri(&self) -> UriBuilder {
        self.base.base_uri().push(FEATURES_SEGMENT)
    }

    fn matcher_path(&self) -> String {
        format!("{}/*", FEATURES_SEGMENT)
    }
}

impl QueryBuilder for FeatureQueryPolicy {
    fn query_uri(&self) -> Option<ProviderUri> {
        // Queried feature as the final segment; it travels in the path,
        // not in selection arguments.
        Some(self.base_uri().push(self.queried_feature.as_str()).build())
    }

    fn query_selection_args(&self) -> Option<Vec<String>> {
        None
    }
}
