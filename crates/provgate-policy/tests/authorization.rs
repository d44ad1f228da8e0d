//! End-to-end authorization flow: build a query with one policy instance,
//! gate it with another, the way a provider and its client would.

use provgate_core::{Authorizer, ProviderUri, QueryBuilder};
use provgate_policy::{DenyAllPolicy, FeatureAuthorizationPolicy, FeatureQueryPolicy};

#[test]
fn query_built_for_allowlisted_feature_is_authorized() {
    let client = FeatureQueryPolicy::new("com.example.app", "premium");
    let provider =
        FeatureAuthorizationPolicy::new("com.example.app", ["ads_free", "export", "premium"]);

    let uri = client.query_uri().expect("query policy builds a uri");
    let args = client.query_selection_args().unwrap_or_default();
    assert!(provider.is_authorized(&uri, &args));
}

#[test]
fn query_built_for_unknown_feature_is_denied() {
    let client = FeatureQueryPolicy::new("com.example.app", "time_travel");
    let provider =
        FeatureAuthorizationPolicy::new("com.example.app", ["ads_free", "export", "premium"]);

    let uri = client.query_uri().unwrap();
    assert!(!provider.is_authorized(&uri, &[]));
}

#[test]
fn query_from_another_package_is_denied_even_for_allowlisted_feature() {
    let client = FeatureQueryPolicy::new("com.rival.app", "premium");
    let provider =
        FeatureAuthorizationPolicy::new("com.example.app", ["ads_free", "export", "premium"]);

    let uri = client.query_uri().unwrap();
    assert!(!provider.is_authorized(&uri, &[]));
}

#[test]
fn deny_all_refuses_its_own_query() {
    let policy = DenyAllPolicy::new("com.example.app");
    let uri = policy.query_uri().unwrap();
    assert!(!policy.is_authorized(&uri, &[]));
}

#[test]
fn decisions_are_idempotent() {
    let provider = FeatureAuthorizationPolicy::new("com.example.app", ["export", "premium"]);
    let permitted: ProviderUri = "content://com.example.app.authorization/features/export"
        .parse()
        .unwrap();
    let denied: ProviderUri = "content://com.example.app.authorization/features/nope"
        .parse()
        .unwrap();

    for _ in 0..10 {
        assert!(provider.is_authorized(&permitted, &[]));
        assert!(!provider.is_authorized(&denied, &[]));
    }
}

#[test]
fn authorization_policy_is_shareable_across_threads() {
    use std::sync::Arc;

    let provider = Arc::new(FeatureAuthorizationPolicy::new(
        "com.example.app",
        ["export", "premium"],
    ));
    let uri: ProviderUri = "content://com.example.app.authorization/features/premium"
        .parse()
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let provider = Arc::clone(&provider);
            let uri = uri.clone();
            std::thread::spawn(move || provider.is_authorized(&uri, &[]))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn policies_usable_through_trait_objects() {
    let builders: Vec<Box<dyn QueryBuilder>> = vec![
        Box::new(DenyAllPolicy::new("com.example.app")),
        Box::new(FeatureQueryPolicy::new("com.example.app", "premium")),
        Box::new(FeatureAuthorizationPolicy::new(
            "com.example.app",
            ["premium"],
        )),
    ];
    // Deny-all and the query policy build queries; the authorization
    // policy signals that it cannot.
    assert!(builders[0].query_uri().is_some());
    assert!(builders[1].query_uri().is_some());
    assert!(builders[2].query_uri().is_none());

    let gate: Box<dyn Authorizer> = Box::new(FeatureAuthorizationPolicy::new(
        "com.example.app",
        ["premium"],
    ));
    let uri = builders[1].query_uri().unwrap();
    assert!(gate.is_authorized(&uri, &[]));
}

#[test]
fn parsed_external_descriptor_flows_through_the_gate() {
    // A provider receives descriptors as strings from outside.
    let provider = FeatureAuthorizationPolicy::new("com.example.app", ["premium"]);

    let good = "content://com.example.app.authorization/features/premium";
    let uri: ProviderUri = good.parse().unwrap();
    assert!(provider.is_authorized(&uri, &[]));

    // Malformed strings never reach the gate; parsing rejects them first.
    assert!("com.example.app/features/premium"
        .parse::<ProviderUri>()
        .is_err());
}
