//! Sub-breed providers.

pub mod dog_api;
pub mod static_breeds;
pub mod traits;

pub use dog_api::DogApiClient;
pub use static_breeds::StaticBreedProvider;
pub use traits::BreedProvider;
