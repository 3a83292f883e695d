use colored::Colorize;

use crate::cli::CLI;
use crate::errors::{AppError, Result};
use crate::form::fields::{FieldKind, FORM_FIELDS};
use crate::form::state::FormState;
use crate::form::submit::{SubmissionPipeline, SubmitOutcome};
use crate::models::country::Country;
use crate::routing::Route;
use crate::services::auth::AuthContext;
use crate::services::country_service::CountryService;
use crate::services::visa_service::VisaService;

/// Interactive add/edit screens. Each flow owns one form snapshot,
/// walks the field table to collect edits, and hands the result to the
/// submission pipeline.
pub struct FormHandler<'a> {
    visa_service: &'a VisaService,
    country_service: &'a CountryService,
}

impl<'a> FormHandler<'a> {
    pub fn new(visa_service: &'a VisaService, country_service: &'a CountryService) -> Self {
        Self {
            visa_service,
            country_service,
        }
    }

    /// Add screen: blank snapshot with form defaults, then fill and save.
    pub async fn add_visa_interactive(&self, auth: &AuthContext) -> Result<Option<Route>> {
        println!("\n{}", "🆕 Add New Visa".cyan().bold());
        println!("{}", "=".repeat(40).blue());

        let countries = self.country_service.fetch_countries().await;
        let mut state = FormState::with_new_record();
        self.run_form(&mut state, &countries, auth, false).await
    }

    /// Edit screen: fetch, populate, edit, save. An unknown identifier
    /// renders a not-found message instead of failing the session.
    pub async fn edit_visa_interactive(
        &self,
        auth: &AuthContext,
        id: &str,
    ) -> Result<Option<Route>> {
        println!("\n{}", "✏️  Edit Visa".cyan().bold());
        println!("{}", "=".repeat(40).blue());

        let record = match self.visa_service.get_visa(id).await {
            Ok(record) => record,
            Err(AppError::NotFound(_)) => {
                CLI::print_error("Visa not found");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let countries = self.country_service.fetch_countries().await;
        let mut state = FormState::new();
        state.load(record);
        self.run_form(&mut state, &countries, auth, true).await
    }

    async fn run_form(
        &self,
        state: &mut FormState,
        countries: &[Country],
        auth: &AuthContext,
        editing: bool,
    ) -> Result<Option<Route>> {
        loop {
            self.fill_fields(state, countries, editing)?;

            if !CLI::confirm_action("Save this visa?")? {
                CLI::print_info("Discarded without saving");
                return Ok(None);
            }

            let pipeline = SubmissionPipeline::new(self.visa_service, auth);
            match pipeline.submit(state).await? {
                SubmitOutcome::Saved { message, next } => {
                    CLI::print_success(&message);
                    return Ok(Some(next));
                }
                SubmitOutcome::Rejected { message } => {
                    CLI::print_error(&message);
                    if !CLI::confirm_action("Edit the form again?")? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    // Walks the field table once, prompting per kind. When editing,
    // empty input keeps the current value.
    fn fill_fields(
        &self,
        state: &mut FormState,
        countries: &[Country],
        editing: bool,
    ) -> Result<()> {
        for field in FORM_FIELDS {
            let current = state
                .record()
                .and_then(|r| r.get(field.name))
                .unwrap_or("")
                .to_string();

            let value = match field.kind {
                FieldKind::Text => Self::prompt_text(field.label, &current)?,
                FieldKind::Date => Self::prompt_date(field.label, &current)?,
                FieldKind::Enum(options) => {
                    CLI::select_option(field.label, options, &current)?
                }
                FieldKind::Country => Self::prompt_country(field.label, &current, countries)?,
            };

            if editing && value.is_empty() && !current.is_empty() {
                continue;
            }
            state.set_field(field.name, &value)?;
        }
        Ok(())
    }

    fn prompt_text(label: &str, current: &str) -> Result<String> {
        let prompt = if current.is_empty() {
            format!("{}:", label)
        } else {
            format!("{} [{}]:", label, current)
        };
        CLI::get_input(&prompt)
    }

    fn prompt_date(label: &str, current: &str) -> Result<String> {
        loop {
            let prompt = if current.is_empty() {
                format!("{} (YYYY-MM-DD):", label)
            } else {
                format!("{} (YYYY-MM-DD) [{}]:", label, current)
            };
            let value = CLI::get_input(&prompt)?;
            if value.is_empty() {
                return Ok(value);
            }
            match crate::utils::validation::Validator::validate_date_input(&value) {
                Ok(()) => return Ok(value),
                Err(err) => CLI::print_error(&err.to_string()),
            }
        }
    }

    // Selection degrades to free text when the reference list failed to
    // load and came back empty.
    fn prompt_country(label: &str, current: &str, countries: &[Country]) -> Result<String> {
        if countries.is_empty() {
            return Self::prompt_text(label, current);
        }
        loop {
            let prompt = if current.is_empty() {
                format!("{} (country name):", label)
            } else {
                format!("{} (country name) [{}]:", label, current)
            };
            let value = CLI::get_input(&prompt)?;
            if value.is_empty() {
                return Ok(value);
            }
            if countries.iter().any(|c| c.name == value) {
                return Ok(value);
            }
            CLI::print_error("Select a country from the loaded list");
        }
    }
}
