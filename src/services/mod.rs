//! Thin async wrappers over the collaborator service boundary.

mod server_service;
mod user_service;

pub use server_service::create_server;
pub use user_service::get_user_details;
