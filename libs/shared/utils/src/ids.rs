use chrono::Utc;
use uuid::Uuid;

use shared_config::IdStrategy;

pub const PATIENT_PREFIX: &str = "P";
pub const DOCTOR_PREFIX: &str = "D";
pub const APPOINTMENT_PREFIX: &str = "A";

/// Synthesizes a new record id carrying `prefix`.
pub fn generate_id(strategy: IdStrategy, prefix: &str) -> String {
    match strategy {
        IdStrategy::Random => format!("{}_{}", prefix, Uuid::new_v4().simple()),
        IdStrategy::Timestamp => timestamp_id(prefix, Utc::now().timestamp_millis()),
    }
}

/// `<prefix>_SIM_<last five digits of millis>`, zero padded.
pub fn timestamp_id(prefix: &str, epoch_millis: i64) -> String {
    format!("{}_SIM_{:05}", prefix, epoch_millis.rem_euclid(100_000))
}
