use chrono::NaiveDate;

use crate::models::{Appointment, AppointmentStatus, AppointmentType};

fn appointment(
    id: &str,
    patient: (&str, &str),
    doctor: (&str, &str),
    date: (i32, u32, u32),
    time: &str,
    appointment_type: AppointmentType,
    status: AppointmentStatus,
) -> Appointment {
    let (y, m, d) = date;
    Appointment {
        id: id.to_string(),
        patient_id: patient.0.to_string(),
        patient_name: patient.1.to_string(),
        doctor_id: doctor.0.to_string(),
        doctor_name: doctor.1.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        time: time.to_string(),
        appointment_type,
        status,
        notes: None,
    }
}

/// Sample appointments referencing the sample patients and doctors.
pub fn sample_appointments() -> Vec<Appointment> {
    const ALICE: (&str, &str) = ("P001", "Alice Wonderland");
    const BOB: (&str, &str) = ("P002", "Bob The Builder");
    const CHARLIE: (&str, &str) = ("P003", "Charlie Brown");
    const DIANA: (&str, &str) = ("P004", "Diana Prince");
    const RIGBY: (&str, &str) = ("D001", "Dr. Eleanor Rigby");
    const HOUSE: (&str, &str) = ("D002", "Dr. Gregory House");
    const GREY: (&str, &str) = ("D003", "Dr. Meredith Grey");

    vec![
        appointment(
            "A001",
            ALICE,
            RIGBY,
            (2024, 7, 15),
            "10:00 AM",
            AppointmentType::CheckUp,
            AppointmentStatus::Scheduled,
        ),
        appointment(
            "A002",
            BOB,
            HOUSE,
            (2024, 7, 16),
            "11:30 AM",
            AppointmentType::Consultation,
            AppointmentStatus::Completed,
        ),
        appointment(
            "A003",
            CHARLIE,
            GREY,
            (2024, 7, 17),
            "02:00 PM",
            AppointmentType::FollowUp,
            AppointmentStatus::Scheduled,
        ),
        appointment(
            "A004",
            DIANA,
            RIGBY,
            (2024, 7, 18),
            "09:00 AM",
            AppointmentType::CheckUp,
            AppointmentStatus::Cancelled,
        ),
        appointment(
            "A005",
            ALICE,
            HOUSE,
            (2024, 7, 20),
            "03:30 PM",
            AppointmentType::Consultation,
            AppointmentStatus::Pending,
        ),
    ]
}
