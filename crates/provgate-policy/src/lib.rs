//! Authorization policies for package- and feature-gated provider access.
//!
//! A caller constructs a policy instance, either to build an outbound query
//! (`QueryBuilder`) or to validate an inbound one (`Authorizer`), then asks
//! it for a boolean decision. Policies are immutable after construction and
//! safe to share across threads.
//!
//! Variants:
//! - `PackagePolicy` -- package-identity coherence check, embedded by value
//!   in every variant
//! - `DenyAllPolicy` -- unconditional denial
//! - `FeatureAuthorizationPolicy` -- membership test against a sorted
//!   feature allowlist
//! - `FeatureQueryPolicy` -- query-building counterpart of the allowlist
//!   policy; deliberately has no authorization capability

pub mod deny;
pub mod features;
pub mod package;

pub use deny::DenyAllPolicy;
pub use features::{FeatureAuthorizationPolicy, FeatureQueryPolicy, FEATURES_SEGMENT};
pub use package::{PackagePolicy, AUTHORITY_SUFFIX};
