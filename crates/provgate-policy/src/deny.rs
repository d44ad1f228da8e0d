use provgate_core::{
    Authorizer, PackageName, ProviderPolicy, ProviderUri, QueryBuilder, UriBuilder,
};

use crate::package::PackagePolicy;

// ---------------------------------------------------------------------------
// DenyAllPolicy — never authorize anything
// ---------------------------------------------------------------------------

/// Never authorize anything.
///
/// Denial is absolute: `is_authorized` does not consult the embedded
/// package check, so even a well-formed request addressed to the matching
/// package is refused.
#[derive(Debug, Clone)]
pub struct DenyAllPolicy {
    base: PackagePolicy,
}

impl DenyAllPolicy {
    pub fn new(package_name: impl Into<PackageName>) -> Self {
        Self {
            base: PackagePolicy::new(package_name),
        }
    }
}

impl ProviderPolicy for DenyAllPolicy {
    fn package_name(&self) -> &PackageName {
        self.base.package_name()
    }

    fn base_uri(&self) -> UriBuilder {
        self.base.base_uri()
    }

    fn matcher_path(&self) -> String {
        self.base.matcher_path()
    }
}

impl QueryBuilder for DenyAllPolicy {
    fn query_uri(&self) -> Option<ProviderUri> {
        // Base identifier unmodified: no extra scoping to ask for.
        Some(self.base_uri().build())
    }

    fn query_selection_args(&self) -> Option<Vec<String>> {
        None
    }
}

impl Authorizer for DenyAllPolicy {
    fn is_authorized(&self, _uri: &ProviderUri, _selection_args: &[String]) -> bool {
        tracing::debug!(
            package = %self.base.package_name(),
            "deny: deny-all policy"
        );
        false
    }
}
