pub mod contact_service;
pub mod crypto;
pub mod transport;
