use breedfetch::{BreedFetchError, Result};

#[test]
fn test_not_found_display() {
    let err = BreedFetchError::BreedNotFound("Bogus".to_string());
    assert_eq!(err.to_string(), "breed not found: Bogus");
}

#[test]
fn test_not_found_helpers() {
    let err = BreedFetchError::BreedNotFound("bogus".to_string());
    assert!(err.is_not_found());
    assert_eq!(err.breed(), Some("bogus"));
}

#[test]
fn test_other_kinds_are_not_not_found() {
    let err = BreedFetchError::Configuration("bad".to_string());
    assert!(!err.is_not_found());
    assert_eq!(err.breed(), None);
    assert!(err.to_string().contains("configuration error"));
}

#[test]
fn test_json_error_converts() {
    fn parse() -> Result<Vec<String>> {
        Ok(serde_json::from_str("not json")?)
    }
    assert!(matches!(parse(), Err(BreedFetchError::Json(_))));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(BreedFetchError::BreedNotFound("x".into()))
    }
    assert!(returns_error().is_err());
}
