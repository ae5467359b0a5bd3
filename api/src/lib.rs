pub mod api_key;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::Settings;
pub use router::create_router;
pub use state::AppState;
