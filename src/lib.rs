//! Terminal administrative console for visa records.
//!
//! The console talks to a remote REST backend for the records
//! themselves and to a static JSON source for the country reference
//! list. Access to every screen except sign-in is gated on the presence
//! of a locally stored access token.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod routing;
pub mod services;
pub mod utils;
