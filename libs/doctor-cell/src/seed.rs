use shared_utils::display::avatar_url;

use crate::models::{AvailabilitySlot, Doctor};

fn doctor(
    id: &str,
    name: &str,
    specialization: &str,
    department: &str,
    contact: &str,
    availability: Vec<AvailabilitySlot>,
    initials: &str,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        department: department.to_string(),
        contact: contact.to_string(),
        availability,
        avatar_url: avatar_url(initials),
    }
}

/// Sample doctors loaded into a fresh store.
pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "D001",
            "Dr. Eleanor Rigby",
            "Cardiology",
            "Cardiology",
            "eleanor@meditrack.com",
            vec![
                AvailabilitySlot::new("Mon", &["9am-12pm", "2pm-5pm"]),
                AvailabilitySlot::new("Wed", &["9am-12pm"]),
                AvailabilitySlot::new("Fri", &["2pm-5pm"]),
            ],
            "ER",
        ),
        doctor(
            "D002",
            "Dr. Gregory House",
            "Diagnostics",
            "Internal Medicine",
            "gregory@meditrack.com",
            vec![
                AvailabilitySlot::new("Tue", &["10am-1pm", "3pm-6pm"]),
                AvailabilitySlot::new("Thu", &["10am-1pm"]),
            ],
            "GH",
        ),
        doctor(
            "D003",
            "Dr. Meredith Grey",
            "General Surgery",
            "Surgery",
            "meredith@meditrack.com",
            vec![
                AvailabilitySlot::new("Mon", &["8am-11am"]),
                AvailabilitySlot::new("Wed", &["1pm-4pm"]),
                AvailabilitySlot::new("Fri", &["8am-11am", "1pm-4pm"]),
            ],
            "MG",
        ),
        doctor(
            "D004",
            "Dr. John Watson",
            "Pediatrics",
            "Pediatrics",
            "john.watson@meditrack.com",
            vec![
                AvailabilitySlot::new("Tue", &["9am-5pm"]),
                AvailabilitySlot::new("Thu", &["9am-5pm"]),
            ],
            "JW",
        ),
    ]
}
