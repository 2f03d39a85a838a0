mod client;
mod entities;

pub use client::{SportsDbClient, SportsDbSettings, DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use entities::{parse_search_response, PlayerEntity, PlayerSearchResponse};
