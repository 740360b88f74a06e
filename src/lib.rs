//! breedfetch - dog sub-breed lookups with a memoizing provider decorator
//!
//! This crate provides a narrow [`BreedProvider`] trait for looking up the
//! sub-breeds of a dog breed, an HTTP implementation backed by the
//! [dog.ceo](https://dog.ceo) API, and [`CachingBreedProvider`], a decorator
//! that shields any provider from redundant lookups.
//!
//! # Example
//!
//! ```rust,no_run
//! use breedfetch::{CachingBreedProvider, DogApiClient};
//!
//! #[tokio::main]
//! async fn main() -> breedfetch::Result<()> {
//!     let provider = CachingBreedProvider::from_provider(DogApiClient::new());
//!
//!     let hounds = provider.sub_breeds("hound").await?;
//!     println!("{}", hounds.join(", "));
//!
//!     // Served from cache; the API is not called again.
//!     provider.sub_breeds("Hound").await?;
//!     assert_eq!(provider.calls_made(), 1);
//!     Ok(())
//! }
//! ```

pub mod cache;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod providers;
pub mod telemetry;
mod version;

// Re-export main types at crate root
pub use cache::CachingBreedProvider;
pub use error::{BreedFetchError, Result};
pub use providers::{BreedProvider, DogApiClient, StaticBreedProvider};
pub use version::{PKG_VERSION, version_string};
