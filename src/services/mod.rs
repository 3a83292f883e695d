pub mod auth;
pub mod country_service;
pub mod visa_service;
