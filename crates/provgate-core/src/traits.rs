use crate::types::PackageName;
use crate::uri::{ProviderUri, UriBuilder};

// ---------------------------------------------------------------------------
// ProviderPolicy — base capability shared by every policy
// ---------------------------------------------------------------------------

/// Base capability: a stored package identity and the package-scoped base
/// descriptor. Variants extend the base by pushing further path segments;
/// they embed the base policy by value and call its check explicitly
/// instead of inheriting it.
pub trait ProviderPolicy: Send + Sync {
    /// The package identity this policy was constructed with.
    fn package_name(&self) -> &PackageName;

    /// Builder for the base descriptor scoped to the stored package.
    fn base_uri(&self) -> UriBuilder;

    /// Path pattern under which a provider registers this policy's
    /// descriptors for routing (e.g. `features/*`). Empty for the
    /// package root.
    fn matcher_path(&self) -> String;
}

// ---------------------------------------------------------------------------
// QueryBuilder — policies able to build an outbound query
// ---------------------------------------------------------------------------

pub trait QueryBuilder: ProviderPolicy {
    /// Full descriptor to send when this policy issues a query.
    ///
    /// `None` means this instance was not constructed with enough
    /// information to build a query -- a deliberate signal, distinct from
    /// a query for an empty resource.
    fn query_uri(&self) -> Option<ProviderUri>;

    /// Ordered argument list accompanying the query descriptor.
    fn query_selection_args(&self) -> Option<Vec<String>>;
}

// ---------------------------------------------------------------------------
// Authorizer — policies able to gate an inbound request
// ---------------------------------------------------------------------------

pub trait Authorizer: ProviderPolicy {
    /// Decide whether the request described by `uri` and `selection_args`
    /// is permitted. Pure decision function: no side effects, no errors --
    /// anything malformed is simply denied.
    fn is_authorized(&self, uri: &ProviderUri, selection_args: &[String]) -> bool;
}
