use colored::Colorize;

use crate::cli::CLI;
use crate::config::Settings;
use crate::errors::{AppError, Result};
use crate::form::fields::FORM_FIELDS;
use crate::handlers::auth_handler::AuthHandler;
use crate::handlers::form_handler::FormHandler;
use crate::handlers::list_handler::ListHandler;
use crate::routing::{self, Route};
use crate::services::auth::{AuthContext, TokenStore};
use crate::services::country_service::CountryService;
use crate::services::visa_service::VisaService;

/// Dispatches a non-interactive subcommand.
pub async fn handle_command(args: &[String]) -> Result<()> {
    let settings = Settings::from_env();
    let store = TokenStore::new(&settings.token_file);
    let auth = AuthContext::from_store(&store);

    match args.first().map(String::as_str).unwrap_or("help") {
        "login" => {
            let handler = AuthHandler::new(&store);
            handler.sign_in_interactive()?;
            Ok(())
        }
        "logout" => {
            let handler = AuthHandler::new(&store);
            handler.sign_out()?;
            Ok(())
        }
        "list" => {
            if !signed_in(Route::VisaList, &auth) {
                return Ok(());
            }
            let service = VisaService::new(&settings.api_base_url);
            let handler = ListHandler::new(&service);
            let state = handler.load().await?;
            handler.render(&state);
            Ok(())
        }
        "show" => {
            let Some(id) = required_arg(args, 1, "Usage: show <id>") else {
                return Ok(());
            };
            if !signed_in(Route::EditVisa(id.clone()), &auth) {
                return Ok(());
            }
            let service = VisaService::new(&settings.api_base_url);
            match service.get_visa(&id).await {
                Ok(visa) => {
                    println!("\n{}", "🛂 Visa Details".cyan().bold());
                    println!("{}", "=".repeat(40).blue());
                    println!("{:<20} {}", "Id", visa.id.as_deref().unwrap_or("-"));
                    for field in FORM_FIELDS {
                        let value = visa.get(field.name).unwrap_or("");
                        println!("{:<20} {}", field.label, value);
                    }
                    Ok(())
                }
                Err(AppError::NotFound(_)) => {
                    CLI::print_error("Visa not found");
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        "add" => {
            if !signed_in(Route::AddVisa, &auth) {
                return Ok(());
            }
            let service = VisaService::new(&settings.api_base_url);
            let countries = CountryService::new(&settings.countries_url);
            let handler = FormHandler::new(&service, &countries);
            handler.add_visa_interactive(&auth).await?;
            Ok(())
        }
        "edit" => {
            let Some(id) = required_arg(args, 1, "Usage: edit <id>") else {
                return Ok(());
            };
            if !signed_in(Route::EditVisa(id.clone()), &auth) {
                return Ok(());
            }
            let service = VisaService::new(&settings.api_base_url);
            let countries = CountryService::new(&settings.countries_url);
            let handler = FormHandler::new(&service, &countries);
            handler.edit_visa_interactive(&auth, &id).await?;
            Ok(())
        }
        "delete" => {
            let Some(id) = required_arg(args, 1, "Usage: delete <id>") else {
                return Ok(());
            };
            if !signed_in(Route::VisaList, &auth) {
                return Ok(());
            }
            if !CLI::confirm_action("Delete this visa?")? {
                println!("{}", "Delete cancelled.".yellow());
                return Ok(());
            }
            let service = VisaService::new(&settings.api_base_url);
            let handler = ListHandler::new(&service);
            let mut state = handler.load().await?;
            if !state.contains(&id) {
                CLI::print_error("No visa with that id");
                return Ok(());
            }
            if handler.delete(&mut state, &id).await {
                CLI::print_success("Visa deleted");
            } else {
                CLI::print_error("Failed to delete visa");
            }
            Ok(())
        }
        "help" => {
            CLI::print_help();
            Ok(())
        }
        _ => {
            println!(
                "{}",
                "Unknown command. Use 'help' to see available commands.".red()
            );
            Ok(())
        }
    }
}

fn required_arg(args: &[String], index: usize, usage: &str) -> Option<String> {
    match args.get(index) {
        Some(value) if !value.is_empty() => Some(value.clone()),
        _ => {
            println!("{}", usage.yellow());
            None
        }
    }
}

// Command-mode route guard: a redirect to sign-in becomes an error
// message instead of a screen change.
fn signed_in(route: Route, auth: &AuthContext) -> bool {
    match routing::guard(route, auth) {
        Route::SignIn => {
            CLI::print_error("Not signed in. Run 'visa-console login' first.");
            false
        }
        _ => true,
    }
}
