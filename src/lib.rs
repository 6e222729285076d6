//! Signed contact-form relay for the Hopion landing page.
//!
//! Submissions are serialized, signed with HMAC-SHA256 over
//! `timestamp || body` and posted to `{API_URL}/emails`.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
