//! Live integration tests against dog.ceo - ignored by default, run with:
//! `cargo test --test live_test -- --ignored`

use breedfetch::{CachingBreedProvider, DogApiClient};

#[tokio::test]
#[ignore]
async fn test_live_hound_sub_breeds() {
    let client = DogApiClient::new();

    let subs = client.sub_breeds("hound").await.expect("lookup failed");

    assert!(subs.iter().any(|s| s == "afghan"));
}

#[tokio::test]
#[ignore]
async fn test_live_unknown_breed() {
    let client = DogApiClient::new();

    let err = client.sub_breeds("notabreed").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_live_cached_lookup() {
    let provider = CachingBreedProvider::from_provider(DogApiClient::new());

    let first = provider.sub_breeds("Poodle").await.expect("lookup failed");
    let second = provider.sub_breeds("poodle").await.expect("lookup failed");

    assert_eq!(first, second);
    assert_eq!(provider.calls_made(), 1);
}
