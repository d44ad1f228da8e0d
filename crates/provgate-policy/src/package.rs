use provgate_core::{
    Authorizer, PackageName, ProviderPolicy, ProviderUri, UriBuilder, CONTENT_SCHEME,
};

/// Suffix appended to the package name when deriving the provider
/// authority that serves that package.
pub const AUTHORITY_SUFFIX: &str = "authorization";

// ---------------------------------------------------------------------------
// PackagePolicy — package-identity coherence check
// ---------------------------------------------------------------------------

/// Base policy: holds the requesting package identity and authorizes a
/// request iff the descriptor is addressed to that package's derived
/// authority.
///
/// Variants embed a `PackagePolicy` by value and call `is_authorized`
/// explicitly before applying their own rules.
#[derive(Debug, Clone)]
pub struct PackagePolicy {
    package_name: PackageName,
}

impl PackagePolicy {
    pub fn new(package_name: impl Into<PackageName>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    /// Authority every descriptor for this package must carry:
    /// `{package}.authorization`.
    pub fn expected_authority(&self) -> String {
        format!("{}.{}", self.package_name, AUTHORITY_SUFFIX)
    }
}

impl ProviderPolicy for PackagePolicy {
    fn package_name(&self) -> &PackageName {
        &self.package_name
    }

    fn base_uri(&self) -> UriBuilder {
        UriBuilder::content(self.expected_authority())
    }

    fn matcher_path(&self) -> String {
        // Package root: no path scope of its own.
        String::new()
    }
}

impl Authorizer for PackagePolicy {
    fn is_authorized(&self, uri: &ProviderUri, _selection_args: &[String]) -> bool {
        if uri.scheme() != CONTENT_SCHEME {
            tracing::debug!(
                scheme = uri.scheme(),
                "deny: unexpected descriptor scheme"
            );
            return false;
        }

        let expected = self.expected_authority();
        if uri.authority() != expected {
            tracing::debug!(
                authority = uri.authority(),
                expected = %expected,
                "deny: descriptor addressed to a different package"
            );
            return false;
        }

        true
    }
}
