pub mod a001_clients;
pub mod a002_contracts;
pub mod a003_opportunities;
