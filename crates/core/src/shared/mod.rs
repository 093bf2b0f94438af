pub mod format;
pub mod search;
pub mod validation;
