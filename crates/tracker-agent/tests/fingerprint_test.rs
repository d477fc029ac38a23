use std::sync::Arc;

use serde_json::json;

use test_fixtures::FakeBrowserEnvironment;
use tracker_agent::codec::{Base64Codec, IdentityCodec};
use tracker_agent::fingerprint::FingerprintResolver;
use tracker_agent::serializer::JsonSerializer;
use tracker_core::config::TrackerConfig;
use tracker_core::models::Resolution;
use tracker_core::traits::{IBrowserEnvironment, ICodec, IKeyValueStorage};

fn identity_config(env: &FakeBrowserEnvironment) -> TrackerConfig {
    TrackerConfig::new(
        Arc::new(JsonSerializer),
        Arc::new(IdentityCodec),
        env.local_storage(),
    )
}

fn base64_config(env: &FakeBrowserEnvironment) -> TrackerConfig {
    TrackerConfig::new(
        Arc::new(JsonSerializer),
        Arc::new(Base64Codec),
        env.local_storage(),
    )
}

// --- Persistent branch ---

#[test]
fn stored_identifier_resolves_with_identity_codec() {
    let env = FakeBrowserEnvironment::new();
    env.seed_storage("_amp", r#"{"id":"abc123"}"#);

    let record = FingerprintResolver::resolve(&identity_config(&env), &env);

    assert_eq!(
        record.persistent,
        Resolution::Present(json!({"id": "abc123"}))
    );
}

#[test]
fn absent_storage_is_unsupported_regardless_of_cookies() {
    let env = FakeBrowserEnvironment::new()
        .without_storage()
        .with_cookie_string("_amp=xyz987;other=1;");

    let record = FingerprintResolver::resolve(&identity_config(&env), &env);

    assert_eq!(record.persistent, Resolution::Unsupported);
    assert_eq!(record.ephemeral, Resolution::Present("xyz987".to_string()));
}

#[test]
fn empty_storage_is_missing_not_unsupported() {
    let env = FakeBrowserEnvironment::new();
    let record = FingerprintResolver::resolve(&identity_config(&env), &env);
    assert_eq!(record.persistent, Resolution::Missing);
}

#[test]
fn corrupt_stored_blob_degrades_to_missing() {
    let env = FakeBrowserEnvironment::new();
    env.seed_storage("_amp", "definitely not json");

    let record = FingerprintResolver::resolve(&identity_config(&env), &env);

    assert_eq!(record.persistent, Resolution::Missing);
}

#[test]
fn blob_that_fails_codec_decode_degrades_to_missing() {
    let env = FakeBrowserEnvironment::new();
    let config = base64_config(&env);
    // Stored under the right (encoded) key, but the value is not base64.
    env.seed_storage(&config.codec.encode("_amp"), "%%garbage%%");

    let record = FingerprintResolver::resolve(&config, &env);

    assert_eq!(record.persistent, Resolution::Missing);
}

#[test]
fn persist_then_resolve_round_trips_with_base64() {
    let env = FakeBrowserEnvironment::new();
    let config = base64_config(&env);
    let value = json!({"id": "abc123"});

    assert!(FingerprintResolver::persist(&config, &value).unwrap());

    // The stored form is obfuscated: keyed and encoded by the codec.
    let storage = env.storage().unwrap();
    let raw = storage.get(&config.codec.encode("_amp")).unwrap();
    assert_ne!(raw, r#"{"id":"abc123"}"#);

    let record = FingerprintResolver::resolve(&config, &env);
    assert_eq!(record.persistent, Resolution::Present(value));
}

#[test]
fn persist_without_storage_reports_unsupported_as_false() {
    let env = FakeBrowserEnvironment::new().without_storage();
    let config = identity_config(&env);
    assert!(!FingerprintResolver::persist(&config, &json!({"id": "x"})).unwrap());
}

// --- Ephemeral branch ---

#[test]
fn disabled_cookies_are_unsupported_even_when_a_cookie_matches() {
    let env = FakeBrowserEnvironment::new()
        .with_cookies_disabled()
        .with_cookie_string("_amp=xyz987;");

    let record = FingerprintResolver::resolve(&identity_config(&env), &env);

    assert_eq!(record.ephemeral, Resolution::Unsupported);
}

#[test]
fn no_cookies_at_all_is_missing() {
    let env = FakeBrowserEnvironment::new();
    let record = FingerprintResolver::resolve(&identity_config(&env), &env);
    assert_eq!(record.ephemeral, Resolution::Missing);
}

#[test]
fn cookies_present_but_none_matching_is_missing() {
    let env = FakeBrowserEnvironment::new().with_cookie_string("other=1;session=deadbeef;");
    let record = FingerprintResolver::resolve(&identity_config(&env), &env);
    assert_eq!(record.ephemeral, Resolution::Missing);
}

#[test]
fn cookie_name_must_match_exactly() {
    let env = FakeBrowserEnvironment::new().with_cookie_string("x_amp=1;_ampx=2;");
    let record = FingerprintResolver::resolve(&identity_config(&env), &env);
    assert_eq!(record.ephemeral, Resolution::Missing);
}

#[test]
fn matching_cookie_is_found_between_neighbors() {
    let env = FakeBrowserEnvironment::new()
        .with_cookie_string("first=1; _amp=xyz987; last=2");
    let record = FingerprintResolver::resolve(&identity_config(&env), &env);
    assert_eq!(record.ephemeral, Resolution::Present("xyz987".to_string()));
}

#[test]
fn ephemeral_value_is_reencoded_not_decoded() {
    // The cookie holds the raw value; the resolved ephemeral identifier is
    // the codec-ENCODED form of it. Locked in as observable behavior.
    let env = FakeBrowserEnvironment::new().with_cookie_string("_amp=xyz987;");
    let record = FingerprintResolver::resolve(&base64_config(&env), &env);

    assert_eq!(
        record.ephemeral,
        Resolution::Present(Base64Codec.encode("xyz987"))
    );
}

#[test]
fn custom_identifier_key_drives_both_branches() {
    let env = FakeBrowserEnvironment::new().with_cookie_string("_visitor=v42;_amp=ignored;");
    env.seed_storage("_visitor", r#""p42""#);

    let config = identity_config(&env).with_identifier_key("_visitor");
    let record = FingerprintResolver::resolve(&config, &env);

    assert_eq!(record.persistent, Resolution::Present(json!("p42")));
    assert_eq!(record.ephemeral, Resolution::Present("v42".to_string()));
}
