//! Static description of the visa form.
//!
//! The form is rendered and validated by iterating this table rather
//! than by inspecting record keys, so the rendering code never has to
//! guess a field's type from its name.

pub const VISA_APPLICANTS: &[&str] = &["Primary", "Secondary"];
pub const VISA_STATUSES: &[&str] = &["In Effect", "Expired", "Cancelled"];
pub const VISA_TYPES: &[&str] = &["Visitor", "Student", "Work", "Transit"];

/// How a form field is rendered and constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, any string accepted.
    Text,
    /// ISO calendar date entered through a date prompt.
    Date,
    /// Selection from the loaded country reference list.
    Country,
    /// Selection from a fixed option set.
    Enum(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const FORM_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor { name: "familyName", label: "Family Name", kind: FieldKind::Text, required: true },
    FieldDescriptor { name: "givenNames", label: "Given Names", kind: FieldKind::Text, required: true },
    FieldDescriptor { name: "visaDescription", label: "Visa Description", kind: FieldKind::Text, required: false },
    FieldDescriptor { name: "dateOfBirth", label: "Date of Birth", kind: FieldKind::Date, required: false },
    FieldDescriptor { name: "documentNumber", label: "Document Number", kind: FieldKind::Text, required: true },
    FieldDescriptor { name: "visaGrantNumber", label: "Visa Grant Number", kind: FieldKind::Text, required: true },
    FieldDescriptor { name: "visaClass", label: "Visa Class", kind: FieldKind::Text, required: false },
    FieldDescriptor { name: "visaApplicant", label: "Visa Applicant", kind: FieldKind::Enum(VISA_APPLICANTS), required: false },
    FieldDescriptor { name: "visaGrantDate", label: "Visa Grant Date", kind: FieldKind::Date, required: true },
    FieldDescriptor { name: "visaExpiryDate", label: "Visa Expiry Date", kind: FieldKind::Date, required: true },
    FieldDescriptor { name: "location", label: "Location", kind: FieldKind::Country, required: false },
    FieldDescriptor { name: "visaStatus", label: "Visa Status", kind: FieldKind::Enum(VISA_STATUSES), required: false },
    FieldDescriptor { name: "periodOfStay", label: "Period of Stay", kind: FieldKind::Text, required: false },
    FieldDescriptor { name: "visaType", label: "Visa Type", kind: FieldKind::Enum(VISA_TYPES), required: true },
    FieldDescriptor { name: "enterBeforeDate", label: "Enter Before Date", kind: FieldKind::Date, required: false },
    FieldDescriptor { name: "passportCountry", label: "Passport Country", kind: FieldKind::Country, required: false },
    FieldDescriptor { name: "applicationId", label: "Application ID", kind: FieldKind::Text, required: false },
    FieldDescriptor { name: "transactionRef", label: "Transaction Ref", kind: FieldKind::Text, required: false },
];

/// Looks a field up by its wire name.
pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FORM_FIELDS.iter().find(|field| field.name == name)
}

pub fn required_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
    FORM_FIELDS.iter().filter(|field| field.required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_resolves_by_name() {
        for field in FORM_FIELDS {
            assert!(descriptor(field.name).is_some());
        }
        assert!(descriptor("_id").is_none());
    }

    #[test]
    fn required_set_is_exactly_the_submission_invariant() {
        let required: Vec<&str> = required_fields().map(|f| f.name).collect();
        assert_eq!(
            required,
            vec![
                "familyName",
                "givenNames",
                "documentNumber",
                "visaGrantNumber",
                "visaGrantDate",
                "visaExpiryDate",
                "visaType",
            ]
        );
    }

    #[test]
    fn date_fields_are_the_ones_named_like_dates() {
        for field in FORM_FIELDS {
            let looks_like_date = field.name.to_lowercase().contains("date");
            assert_eq!(field.kind == FieldKind::Date, looks_like_date, "{}", field.name);
        }
    }
}
