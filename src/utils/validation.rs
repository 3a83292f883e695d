use crate::errors::{AppError, Result};
use crate::form::fields;
use crate::models::visa::VisaRecord;
use chrono::NaiveDate;
use regex::Regex;

pub struct Validator;

impl Validator {
    /// Checks that every required field in the form table is non-empty.
    /// This is the only gate between an edited snapshot and the network.
    pub fn validate_required(record: &VisaRecord) -> Result<()> {
        for field in fields::required_fields() {
            let value = record.get(field.name).unwrap_or("");
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "{} is required",
                    field.label
                )));
            }
        }
        Ok(())
    }

    /// Calendar inputs must be ISO dates; empty is allowed so optional
    /// date fields can stay blank.
    pub fn validate_date_input(value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        let date_regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$")
            .map_err(|e| AppError::InternalError(format!("Regex error: {}", e)))?;
        if !date_regex.is_match(value) {
            return Err(AppError::ValidationError(
                "Date must be in YYYY-MM-DD format".to_string(),
            ));
        }
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            return Err(AppError::ValidationError(format!(
                "{} is not a valid calendar date",
                value
            )));
        }
        Ok(())
    }

    pub fn validate_option(value: &str, options: &[&str]) -> Result<()> {
        if options.contains(&value) {
            return Ok(());
        }
        Err(AppError::ValidationError(format!(
            "'{}' is not one of the allowed options",
            value
        )))
    }
}
