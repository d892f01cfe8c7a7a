pub mod auth;
pub mod crypto;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod stores;
