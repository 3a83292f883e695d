use tracing::info;

use crate::errors::{AppError, Result};
use crate::form::state::FormState;
use crate::routing::Route;
use crate::services::auth::AuthContext;
use crate::services::visa_service::VisaService;
use crate::utils::validation::Validator;

/// Terminal outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record persisted; the caller should navigate to the list view.
    Saved { message: String, next: Route },
    /// Submission rejected or failed; stay on the form and show why.
    Rejected { message: String },
}

/// Drives one snapshot from "edited" to "persisted".
///
/// Creates when the record has no identifier, updates otherwise. The
/// `saving` flag on the form state blocks re-entry while a request is
/// in flight and is cleared on every terminal path.
pub struct SubmissionPipeline<'a> {
    service: &'a VisaService,
    auth: &'a AuthContext,
}

impl<'a> SubmissionPipeline<'a> {
    pub fn new(service: &'a VisaService, auth: &'a AuthContext) -> Self {
        Self { service, auth }
    }

    pub async fn submit(&self, state: &mut FormState) -> Result<SubmitOutcome> {
        if state.is_saving() {
            return Ok(SubmitOutcome::Rejected {
                message: "A save is already in progress".to_string(),
            });
        }
        if !self.auth.is_signed_in() {
            return Err(AppError::AuthenticationError(
                "Sign in before saving visa records".to_string(),
            ));
        }
        let record = match state.record() {
            Some(record) => record.clone(),
            None => return Err(AppError::InternalError("No record loaded".to_string())),
        };
        // Required fields gate the network call entirely.
        if let Err(err) = Validator::validate_required(&record) {
            return Ok(SubmitOutcome::Rejected {
                message: err.to_string(),
            });
        }

        state.set_saving(true);
        let result = match record.id.as_deref() {
            None => self.service.create_visa(&record).await,
            Some(id) => self.service.update_visa(id, &record).await,
        };
        state.set_saving(false);

        match result {
            Ok(saved) => {
                let message = if record.id.is_none() {
                    // The add screen starts over with a blank form.
                    state.take_record();
                    "Visa added successfully!".to_string()
                } else {
                    "Visa updated successfully!".to_string()
                };
                info!(id = ?saved.id, "Visa saved");
                Ok(SubmitOutcome::Saved {
                    message,
                    next: Route::VisaList,
                })
            }
            Err(AppError::NetworkError(_)) => Ok(SubmitOutcome::Rejected {
                message: "Network error".to_string(),
            }),
            Err(AppError::BackendError(msg)) => Ok(SubmitOutcome::Rejected {
                message: format!("Error: {}", msg),
            }),
            Err(err) => Err(err),
        }
    }
}
