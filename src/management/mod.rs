mod auth;
mod favorites;
mod preferences;
mod session;
mod store;

pub use auth::TokenManager;
pub use favorites::FavoritesManager;
pub use preferences::PreferencesManager;
pub use session::{PlaylistState, SessionManager};
pub use store::StoreError;
