use shared_models::FieldErrors;
use shared_utils::validation::FormValidator;

use crate::models::NewDoctorForm;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidDoctor {
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub contact: String,
    pub availability_description: Option<String>,
}

impl NewDoctorForm {
    pub fn validate(&self) -> Result<ValidDoctor, FieldErrors> {
        let mut v = FormValidator::new();

        let name = v.text("name", self.name.as_ref(), 2, "Name must be at least 2 characters.");
        let specialization = v.text(
            "specialization",
            self.specialization.as_ref(),
            3,
            "Specialization is required.",
        );
        let department = v.text("department", self.department.as_ref(), 3, "Department is required.");
        let contact = v.text(
            "contact",
            self.contact.as_ref(),
            5,
            "Contact information is required. (e.g., email or phone)",
        );
        let availability_description = v.optional_text(
            "availabilityDescription",
            self.availability_description.as_ref(),
            10,
            "Please provide a brief description of availability.",
        );

        let (Some(name), Some(specialization), Some(department), Some(contact), Some(availability_description)) =
            (name, specialization, department, contact, availability_description)
        else {
            return Err(v.into_errors());
        };
        v.finish()?;

        Ok(ValidDoctor {
            name,
            specialization,
            department,
            contact,
            availability_description,
        })
    }
}
