//! Provider trait for sub-breed lookups.
//!
//! A single narrow capability keeps implementations interchangeable:
//! - Remote: [`DogApiClient`](super::DogApiClient) talks to dog.ceo
//! - Local: [`StaticBreedProvider`](super::StaticBreedProvider) serves a fixed map
//! - Decorators: [`CachingBreedProvider`](crate::cache::CachingBreedProvider)
//!   wraps any of the above and is itself a provider
//!
//! # Failure semantics
//!
//! Every failure, whatever its cause (unknown breed, network error,
//! malformed response), surfaces as
//! [`BreedNotFound`](crate::BreedFetchError::BreedNotFound) carrying the
//! breed string the caller passed in. Callers do not distinguish causes.
//!
//! # Example
//!
//! ```ignore
//! struct Kennel;
//!
//! #[async_trait]
//! impl BreedProvider for Kennel {
//!     fn name(&self) -> &str {
//!         "kennel"
//!     }
//!
//!     async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
//!         match breed {
//!             "poodle" => Ok(vec!["toy".into(), "standard".into()]),
//!             _ => Err(BreedFetchError::BreedNotFound(breed.to_string())),
//!         }
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::Result;

/// Looks up the sub-breeds of a breed.
#[async_trait]
pub trait BreedProvider: Send + Sync {
    /// Provider name for logging and metrics.
    fn name(&self) -> &str;

    /// Sub-breed names of `breed`, in provider order.
    ///
    /// An empty list is a successful answer (the breed exists but has no
    /// sub-breeds) and is distinct from a `BreedNotFound` error.
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>>;
}
