use colored::Colorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use visa_console::cli::{self, CLI};
use visa_console::config::Settings;
use visa_console::errors::Result;
use visa_console::handlers::auth_handler::AuthHandler;
use visa_console::handlers::form_handler::FormHandler;
use visa_console::handlers::list_handler::ListHandler;
use visa_console::routing::{self, Route};
use visa_console::services::auth::{AuthContext, TokenStore};
use visa_console::services::country_service::CountryService;
use visa_console::services::visa_service::VisaService;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().flatten_event(true))
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    dotenv::dotenv().ok();

    if let Err(e) = run().await {
        eprintln!("{}", format!("Application error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // If no arguments provided, show the interactive console
    if args.len() == 1 {
        return run_interactive().await;
    }

    cli::handle_command(&args[1..]).await
}

async fn run_interactive() -> Result<()> {
    CLI::print_header();

    let settings = Settings::from_env();
    let store = TokenStore::new(&settings.token_file);
    let mut auth = AuthContext::from_store(&store);

    let visa_service = VisaService::new(&settings.api_base_url);
    let country_service = CountryService::new(&settings.countries_url);

    let mut route = Route::Dashboard;
    loop {
        // Every screen change passes through the guard first; each arm
        // evaluates to the next route.
        route = match routing::guard(route, &auth) {
            Route::SignIn => {
                println!("\n{}", "You need to sign in to continue.".yellow());
                println!("1. 🔐 Sign In");
                println!("0. 🚪 Exit");
                let choice = CLI::get_input("Select an option:")?;
                match choice.trim() {
                    "1" => {
                        let handler = AuthHandler::new(&store);
                        match handler.sign_in_interactive() {
                            Ok(ctx) => {
                                auth = ctx;
                                Route::Dashboard
                            }
                            Err(e) => {
                                CLI::print_error(&format!("Sign in failed: {}", e));
                                Route::SignIn
                            }
                        }
                    }
                    "0" => break,
                    _ => {
                        CLI::print_error("Invalid option. Please try again.");
                        Route::SignIn
                    }
                }
            }
            Route::Dashboard => {
                println!("\n{}", "🛂 Visa Console".cyan().bold());
                println!("{}", "=".repeat(40).blue());
                println!("1. 📋 View All Visas");
                println!("2. 🆕 Add New Visa");
                println!("3. ✏️  Edit Visa by ID");
                println!("4. 🚪 Sign Out");
                println!("{}", "─".repeat(40).blue());
                println!("0. 🚪 Exit");

                let choice = CLI::get_input("Select an option:")?;
                match choice.trim() {
                    "1" => Route::VisaList,
                    "2" => Route::AddVisa,
                    "3" => {
                        let id = CLI::get_input("Enter visa id:")?;
                        if id.is_empty() {
                            CLI::print_error("An id is required");
                            Route::Dashboard
                        } else {
                            Route::EditVisa(id)
                        }
                    }
                    "4" => {
                        let handler = AuthHandler::new(&store);
                        auth = handler.sign_out()?;
                        Route::Dashboard
                    }
                    "0" => break,
                    _ => {
                        CLI::print_error("Invalid option. Please try again.");
                        Route::Dashboard
                    }
                }
            }
            Route::VisaList => {
                let handler = ListHandler::new(&visa_service);
                match handler.show_interactive().await {
                    Ok(Some(next)) => next,
                    Ok(None) => Route::Dashboard,
                    Err(e) => {
                        CLI::print_error(&format!("Failed to load visas: {}", e));
                        Route::Dashboard
                    }
                }
            }
            Route::AddVisa => {
                let handler = FormHandler::new(&visa_service, &country_service);
                match handler.add_visa_interactive(&auth).await {
                    Ok(Some(next)) => next,
                    Ok(None) => Route::Dashboard,
                    Err(e) => {
                        CLI::print_error(&format!("Add visa failed: {}", e));
                        Route::Dashboard
                    }
                }
            }
            Route::EditVisa(id) => {
                let handler = FormHandler::new(&visa_service, &country_service);
                match handler.edit_visa_interactive(&auth, &id).await {
                    Ok(Some(next)) => next,
                    Ok(None) => Route::Dashboard,
                    Err(e) => {
                        CLI::print_error(&format!("Edit visa failed: {}", e));
                        Route::Dashboard
                    }
                }
            }
        };
    }

    println!("{}", "Goodbye! 👋".cyan());
    Ok(())
}
