use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

/// One visa grant record as stored by the backend.
///
/// The identifier is assigned by the backend on create and never changes
/// afterwards. Every other field travels as a plain string; dates are
/// calendar dates with no time component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub family_name: String,
    pub given_names: String,
    pub visa_description: String,
    pub date_of_birth: String,
    pub document_number: String,
    pub visa_grant_number: String,
    pub visa_class: String,
    pub visa_applicant: String,
    pub visa_grant_date: String,
    pub visa_expiry_date: String,
    pub location: String,
    pub visa_status: String,
    pub period_of_stay: String,
    pub visa_type: String,
    pub enter_before_date: String,
    pub passport_country: String,
    pub application_id: String,
    pub transaction_ref: String,
}

impl Default for VisaRecord {
    fn default() -> Self {
        Self {
            id: None,
            family_name: String::new(),
            given_names: String::new(),
            visa_description: String::new(),
            date_of_birth: String::new(),
            document_number: String::new(),
            visa_grant_number: String::new(),
            visa_class: String::new(),
            visa_applicant: "Primary".to_string(),
            visa_grant_date: String::new(),
            visa_expiry_date: String::new(),
            location: String::new(),
            visa_status: "In Effect".to_string(),
            period_of_stay: String::new(),
            visa_type: "Visitor".to_string(),
            enter_before_date: String::new(),
            passport_country: String::new(),
            application_id: String::new(),
            transaction_ref: String::new(),
        }
    }
}

impl VisaRecord {
    /// Reads a form field by its wire name.
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "familyName" => &self.family_name,
            "givenNames" => &self.given_names,
            "visaDescription" => &self.visa_description,
            "dateOfBirth" => &self.date_of_birth,
            "documentNumber" => &self.document_number,
            "visaGrantNumber" => &self.visa_grant_number,
            "visaClass" => &self.visa_class,
            "visaApplicant" => &self.visa_applicant,
            "visaGrantDate" => &self.visa_grant_date,
            "visaExpiryDate" => &self.visa_expiry_date,
            "location" => &self.location,
            "visaStatus" => &self.visa_status,
            "periodOfStay" => &self.period_of_stay,
            "visaType" => &self.visa_type,
            "enterBeforeDate" => &self.enter_before_date,
            "passportCountry" => &self.passport_country,
            "applicationId" => &self.application_id,
            "transactionRef" => &self.transaction_ref,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Writes a single form field by its wire name, leaving every other
    /// field untouched. The identifier is not addressable this way.
    pub fn set(&mut self, field: &str, value: String) -> Result<()> {
        let slot = match field {
            "familyName" => &mut self.family_name,
            "givenNames" => &mut self.given_names,
            "visaDescription" => &mut self.visa_description,
            "dateOfBirth" => &mut self.date_of_birth,
            "documentNumber" => &mut self.document_number,
            "visaGrantNumber" => &mut self.visa_grant_number,
            "visaClass" => &mut self.visa_class,
            "visaApplicant" => &mut self.visa_applicant,
            "visaGrantDate" => &mut self.visa_grant_date,
            "visaExpiryDate" => &mut self.visa_expiry_date,
            "location" => &mut self.location,
            "visaStatus" => &mut self.visa_status,
            "periodOfStay" => &mut self.period_of_stay,
            "visaType" => &mut self.visa_type,
            "enterBeforeDate" => &mut self.enter_before_date,
            "passportCountry" => &mut self.passport_country,
            "applicationId" => &mut self.application_id,
            "transactionRef" => &mut self.transaction_ref,
            _ => {
                return Err(AppError::ValidationError(format!(
                    "Unknown field: {}",
                    field
                )))
            }
        };
        *slot = value;
        Ok(())
    }
}
