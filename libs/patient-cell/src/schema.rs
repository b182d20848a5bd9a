use shared_models::FieldErrors;
use shared_utils::validation::{FormValidator, IntegerRule};

use crate::models::{Gender, NewPatientForm};

pub const MAX_AGE: i64 = 120;

const AGE_RULE: IntegerRule<'static> = IntegerRule {
    not_a_number: "Age must be a number.",
    not_integer: "Age must be an integer.",
    not_positive: "Age must be a positive number.",
    max: Some((MAX_AGE, "Age seems too high. Please enter a valid age.")),
};

/// A new-patient form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPatient {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
    pub medical_history: Option<String>,
}

impl NewPatientForm {
    pub fn validate(&self) -> Result<ValidPatient, FieldErrors> {
        let mut v = FormValidator::new();

        let name = v.text("name", self.name.as_ref(), 2, "Name must be at least 2 characters long.");
        let age = v.integer("age", self.age.as_ref(), &AGE_RULE);
        let gender = v.choice::<Gender>(
            "gender",
            self.gender.as_ref(),
            "Gender is required.",
            "Please select a valid gender.",
        );
        let contact = v.text(
            "contact",
            self.contact.as_ref(),
            5,
            "Contact information must be at least 5 characters long.",
        );
        let address = v.text("address", self.address.as_ref(), 5, "Address must be at least 5 characters long.");
        let medical_history = v.optional_text("medicalHistory", self.medical_history.as_ref(), 0, "");

        let (Some(name), Some(age), Some(gender), Some(contact), Some(address), Some(medical_history)) =
            (name, age, gender, contact, address, medical_history)
        else {
            return Err(v.into_errors());
        };
        v.finish()?;

        Ok(ValidPatient {
            name,
            // bounded to 1..=MAX_AGE above
            age: age as u8,
            gender,
            contact,
            address,
            medical_history: medical_history.filter(|h| !h.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> NewPatientForm {
        NewPatientForm {
            name: Some(json!("Test User")),
            age: Some(json!(40)),
            gender: Some(json!("Male")),
            contact: Some(json!("t@example.com")),
            address: Some(json!("1 Test St")),
            medical_history: None,
        }
    }

    #[test]
    fn test_valid_form() {
        let valid = form().validate().unwrap();
        assert_eq!(valid.name, "Test User");
        assert_eq!(valid.age, 40);
        assert_eq!(valid.gender, Gender::Male);
        assert_eq!(valid.medical_history, None);
    }

    #[test]
    fn test_age_string_is_coerced() {
        let mut f = form();
        f.age = Some(json!("120"));
        assert_eq!(f.validate().unwrap().age, 120);
    }

    #[test]
    fn test_empty_history_is_treated_as_absent() {
        let mut f = form();
        f.medical_history = Some(json!(""));
        assert_eq!(f.validate().unwrap().medical_history, None);
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let f = NewPatientForm {
            name: Some(json!("A")),
            age: Some(json!(150)),
            gender: Some(json!("Unknown")),
            contact: Some(json!("x")),
            address: None,
            medical_history: None,
        };

        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("name").unwrap(), ["Name must be at least 2 characters long."]);
        assert_eq!(errors.get("age").unwrap(), ["Age seems too high. Please enter a valid age."]);
        assert_eq!(errors.get("gender").unwrap(), ["Please select a valid gender."]);
        assert_eq!(
            errors.get("contact").unwrap(),
            ["Contact information must be at least 5 characters long."]
        );
        assert!(errors.contains("address"));
        assert!(!errors.contains("medicalHistory"));
    }

    #[test]
    fn test_numeric_contact_is_accepted() {
        let mut f = form();
        f.contact = Some(json!(5551234567u64));
        assert_eq!(f.validate().unwrap().contact, "5551234567");
    }

    #[test]
    fn test_missing_gender_message() {
        let mut f = form();
        f.gender = None;
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("gender").unwrap(), ["Gender is required."]);
    }
}
