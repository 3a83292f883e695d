use crate::errors::{AppError, Result};
use crate::form::fields::{self, FieldKind};
use crate::models::visa::VisaRecord;
use crate::utils::dates;
use crate::utils::validation::Validator;

/// Screen-local mutable snapshot of the record being edited.
///
/// Each form screen owns exactly one of these for the duration of its
/// session. The controller applies field-level edits and keeps dates in
/// calendar-input format; required-field validation happens at submit
/// time, not here.
#[derive(Debug, Default)]
pub struct FormState {
    record: Option<VisaRecord>,
    saving: bool,
}

impl FormState {
    /// Empty state for the edit screen, before the fetch resolves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh snapshot for the add screen, with the form defaults applied.
    pub fn with_new_record() -> Self {
        Self {
            record: Some(VisaRecord::default()),
            saving: false,
        }
    }

    /// Installs a fetched record, normalizing every date field from
    /// transport format to calendar-input format.
    pub fn load(&mut self, mut record: VisaRecord) {
        for field in fields::FORM_FIELDS {
            if field.kind != FieldKind::Date {
                continue;
            }
            if let Some(value) = record.get(field.name) {
                let normalized = dates::to_input_format(value);
                let _ = record.set(field.name, normalized);
            }
        }
        self.record = Some(record);
    }

    pub fn record(&self) -> Option<&VisaRecord> {
        self.record.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.record.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub(crate) fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    /// Replaces a single field, leaving every other field untouched.
    /// Enum fields are constrained to their option set and date fields
    /// to ISO calendar dates; free-text fields accept any string.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        let field = fields::descriptor(name).ok_or_else(|| {
            AppError::ValidationError(format!("Unknown field: {}", name))
        })?;
        match field.kind {
            FieldKind::Date => Validator::validate_date_input(value)?,
            FieldKind::Enum(options) => Validator::validate_option(value, options)?,
            FieldKind::Text | FieldKind::Country => {}
        }
        let record = self
            .record
            .as_mut()
            .ok_or_else(|| AppError::InternalError("No record loaded".to_string()))?;
        record.set(name, value.to_string())
    }

    /// Discards and returns the snapshot, e.g. after a successful create.
    pub fn take_record(&mut self) -> Option<VisaRecord> {
        self.record.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::FORM_FIELDS;

    fn loaded_state() -> FormState {
        let mut record = VisaRecord::default();
        record.id = Some("abc".to_string());
        record.family_name = "Doe".to_string();
        record.given_names = "Jane".to_string();
        record.document_number = "X123".to_string();
        record.visa_grant_date = "2024-01-01T00:00:00.000Z".to_string();
        record.visa_expiry_date = "01-06-2025".to_string();
        let mut state = FormState::new();
        state.load(record);
        state
    }

    #[test]
    fn load_normalizes_dates_to_input_format() {
        let state = loaded_state();
        let record = state.record().unwrap();
        assert_eq!(record.visa_grant_date, "2024-01-01");
        assert_eq!(record.visa_expiry_date, "2025-06-01");
        // Non-date fields arrive untouched.
        assert_eq!(record.family_name, "Doe");
    }

    #[test]
    fn set_field_leaves_every_other_field_untouched() {
        let mut state = loaded_state();
        let before = state.record().unwrap().clone();
        state.set_field("documentNumber", "Y999").unwrap();
        let after = state.record().unwrap();
        for field in FORM_FIELDS {
            if field.name == "documentNumber" {
                assert_eq!(after.get(field.name), Some("Y999"));
            } else {
                assert_eq!(after.get(field.name), before.get(field.name), "{}", field.name);
            }
        }
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn enum_fields_are_constrained() {
        let mut state = loaded_state();
        assert!(state.set_field("visaType", "Student").is_ok());
        assert!(state.set_field("visaType", "Tourist").is_err());
        assert!(state.set_field("visaStatus", "Expired").is_ok());
    }

    #[test]
    fn date_fields_require_iso_input() {
        let mut state = loaded_state();
        assert!(state.set_field("dateOfBirth", "1990-05-04").is_ok());
        assert!(state.set_field("dateOfBirth", "04/05/1990").is_err());
        assert!(state.set_field("dateOfBirth", "").is_ok());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut state = loaded_state();
        assert!(state.set_field("stream", "x").is_err());
    }

    #[test]
    fn editing_before_load_is_an_error() {
        let mut state = FormState::new();
        assert!(!state.is_loaded());
        assert!(state.set_field("familyName", "Doe").is_err());
    }
}
