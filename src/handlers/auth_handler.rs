use colored::Colorize;

use crate::cli::CLI;
use crate::errors::{AppError, Result};
use crate::services::auth::{AuthContext, TokenStore};

/// Sign-in / sign-out flows. Token issuance belongs to the external
/// identity service; the console only stores what it is handed.
pub struct AuthHandler<'a> {
    store: &'a TokenStore,
}

impl<'a> AuthHandler<'a> {
    pub fn new(store: &'a TokenStore) -> Self {
        Self { store }
    }

    pub fn sign_in_interactive(&self) -> Result<AuthContext> {
        println!("\n{}", "🔐 Sign In".cyan().bold());
        println!("{}", "=".repeat(40).blue());
        CLI::print_info("Paste the access token issued by your administrator");

        let token = CLI::get_password("Access token:")?;
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::AuthenticationError(
                "Token must not be empty".to_string(),
            ));
        }
        self.store.save(token)?;
        CLI::print_success("Signed in");
        Ok(AuthContext::with_token(token))
    }

    pub fn sign_out(&self) -> Result<AuthContext> {
        self.store.clear()?;
        CLI::print_info("Signed out");
        Ok(AuthContext::anonymous())
    }
}
