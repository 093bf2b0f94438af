//! Core of the Arcus commercial CRM.
//!
//! Everything here is browser-independent: the session and permission model,
//! the section records with their search predicates, and the input masks used
//! by the forms. The `frontend` crate renders on top of it.

pub mod domain;
pub mod shared;
pub mod system;
