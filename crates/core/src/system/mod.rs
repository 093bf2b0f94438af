pub mod auth;
pub mod navigation;
pub mod permissions;
pub mod users;
