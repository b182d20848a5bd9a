use chrono::NaiveDate;

use shared_utils::display::avatar_url;

use crate::models::{Gender, Patient};

fn patient(
    id: &str,
    name: &str,
    age: u8,
    gender: Gender,
    contact: &str,
    address: &str,
    medical_history: &str,
    last_visit: (i32, u32, u32),
    initials: &str,
) -> Patient {
    let (y, m, d) = last_visit;
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender,
        contact: contact.to_string(),
        address: address.to_string(),
        medical_history: medical_history.to_string(),
        last_visit: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        avatar_url: avatar_url(initials),
    }
}

/// Sample patients loaded into a fresh store.
pub fn sample_patients() -> Vec<Patient> {
    vec![
        patient(
            "P001",
            "Alice Wonderland",
            30,
            Gender::Female,
            "alice@example.com",
            "123 Rabbit Hole Ln",
            "None",
            (2023, 10, 15),
            "AW",
        ),
        patient(
            "P002",
            "Bob The Builder",
            45,
            Gender::Male,
            "bob@example.com",
            "456 Fixit St",
            "Hypertension",
            (2023, 11, 1),
            "BB",
        ),
        patient(
            "P003",
            "Charlie Brown",
            8,
            Gender::Male,
            "charlie@example.com",
            "789 Kite Hill",
            "Asthma",
            (2023, 9, 20),
            "CB",
        ),
        patient(
            "P004",
            "Diana Prince",
            35,
            Gender::Female,
            "diana@example.com",
            "1 Wonder Way",
            "Healthy",
            (2024, 1, 10),
            "DP",
        ),
        patient(
            "P005",
            "Edward Scissorhands",
            28,
            Gender::Male,
            "edward@example.com",
            "55 Suburbia Ave",
            "Requires specialized care",
            (2024, 2, 1),
            "ES",
        ),
    ]
}
