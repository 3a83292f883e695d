use colored::Colorize;
use tracing::error;

use crate::cli::CLI;
use crate::errors::Result;
use crate::models::visa::VisaRecord;
use crate::routing::Route;
use crate::services::visa_service::VisaService;
use crate::utils::dates;

/// Screen-local state for the visa table. Populated once on entry and
/// pruned in place after successful deletes; no re-fetch per row.
#[derive(Debug, Default)]
pub struct ListState {
    visas: Vec<VisaRecord>,
}

impl ListState {
    pub fn new(visas: Vec<VisaRecord>) -> Self {
        Self { visas }
    }

    pub fn visas(&self) -> &[VisaRecord] {
        &self.visas
    }

    pub fn len(&self) -> usize {
        self.visas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visas.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.visas.iter().any(|v| v.id.as_deref() == Some(id))
    }

    /// Removes exactly the deleted row; every other row keeps its place.
    pub fn remove(&mut self, id: &str) {
        self.visas.retain(|v| v.id.as_deref() != Some(id));
    }
}

pub struct ListHandler<'a> {
    service: &'a VisaService,
}

impl<'a> ListHandler<'a> {
    pub fn new(service: &'a VisaService) -> Self {
        Self { service }
    }

    /// Fetches the full collection for the table.
    pub async fn load(&self) -> Result<ListState> {
        Ok(ListState::new(self.service.list_visas().await?))
    }

    /// Issues the delete and updates local state without a re-fetch. On
    /// failure the row stays in place and the error is only logged.
    pub async fn delete(&self, state: &mut ListState, id: &str) -> bool {
        match self.service.delete_visa(id).await {
            Ok(()) => {
                state.remove(id);
                true
            }
            Err(err) => {
                error!("Failed to delete visa {}: {}", id, err);
                false
            }
        }
    }

    pub fn render(&self, state: &ListState) {
        println!("\n{}", "📋 All Visa List".cyan().bold());
        println!("{}", "=".repeat(118).blue());
        if state.is_empty() {
            println!("{}", "No visas found.".yellow());
            return;
        }
        println!(
            "{:<24} {:<14} {:<12} {:<12} {:<14} {:<12} {:<12} {:<12} {}",
            "Id".bold(),
            "Family Name".bold(),
            "Given Names".bold(),
            "DOB".bold(),
            "Passport No.".bold(),
            "Grant No.".bold(),
            "Grant Date".bold(),
            "Expiry Date".bold(),
            "Status".bold()
        );
        println!("{}", "-".repeat(118).blue());
        for visa in state.visas() {
            println!(
                "{:<24} {:<14} {:<12} {:<12} {:<14} {:<12} {:<12} {:<12} {}",
                visa.id.as_deref().unwrap_or("-"),
                visa.family_name,
                visa.given_names,
                dates::to_display_format(&visa.date_of_birth),
                visa.document_number,
                visa.visa_grant_number,
                dates::to_display_format(&visa.visa_grant_date),
                dates::to_display_format(&visa.visa_expiry_date),
                visa.visa_status.green()
            );
        }
        println!("{}", "-".repeat(118).blue());
        println!("{} visa(s)", state.len());
    }

    /// Interactive table screen: render, then edit/delete/refresh/back.
    pub async fn show_interactive(&self) -> Result<Option<Route>> {
        let mut state = self.load().await?;
        loop {
            self.render(&state);
            println!();
            println!("e. ✏️  Edit a visa");
            println!("d. 🗑️  Delete a visa");
            println!("r. 🔄 Refresh");
            println!("b. 🔙 Back to dashboard");

            let choice = CLI::get_input("Select an option:")?;
            match choice.trim() {
                "e" => {
                    let id = CLI::get_input("Enter visa id to edit:")?;
                    if id.is_empty() {
                        continue;
                    }
                    return Ok(Some(Route::EditVisa(id)));
                }
                "d" => {
                    let id = CLI::get_input("Enter visa id to delete:")?;
                    if id.is_empty() {
                        continue;
                    }
                    if !state.contains(&id) {
                        CLI::print_error("No visa with that id in the list");
                        continue;
                    }
                    if !CLI::confirm_action("Delete this visa?")? {
                        continue;
                    }
                    // Failures are logged only; the row simply stays in
                    // the re-rendered table.
                    self.delete(&mut state, &id).await;
                }
                "r" => {
                    state = self.load().await?;
                }
                "b" => return Ok(None),
                _ => CLI::print_error("Invalid option. Please try again."),
            }
        }
    }
}
