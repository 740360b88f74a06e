//! Caching subsystem.
//!
//! [`CachingBreedProvider`] memoizes successful sub-breed lookups of any
//! [`BreedProvider`](crate::providers::BreedProvider) and counts the calls
//! that reach it. Failures are never cached.
//!
//! ```rust
//! # use breedfetch::cache::CachingBreedProvider;
//! # use breedfetch::providers::StaticBreedProvider;
//! # #[tokio::main]
//! # async fn main() -> breedfetch::Result<()> {
//! let provider = CachingBreedProvider::from_provider(StaticBreedProvider::new([
//!     ("poodle", vec!["toy", "miniature", "standard"]),
//! ]));
//!
//! provider.sub_breeds("Poodle").await?;
//! provider.sub_breeds("poodle").await?;
//! assert_eq!(provider.calls_made(), 1);
//! # Ok(())
//! # }
//! ```

pub mod breeds;

pub use breeds::CachingBreedProvider;
