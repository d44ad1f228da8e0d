//! Core vocabulary for the provgate authorization layer.
//!
//! Holds everything the policy variants share: typed identifiers
//! (`PackageName`, `FeatureName`), the provider descriptor type
//! (`ProviderUri`) and its builder, the error type, and the capability
//! traits the policy variants implement.

pub mod error;
pub mod traits;
pub mod types;
pub mod uri;

pub use error::*;
pub use traits::*;
pub use types::*;
pub use uri::*;
