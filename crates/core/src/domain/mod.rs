pub mod clients;
pub mod contracts;
pub mod opportunities;
pub mod reports;
