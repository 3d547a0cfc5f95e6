pub mod error;
pub mod api;
pub mod api_client;
pub mod token_store;

pub use error::ApiError;
pub use api::CockpitApi;
pub use api_client::ApiClient;
pub use token_store::{LocalStorageTokenStore, MemoryTokenStore, TokenStore};
