use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::db::Tables;
use crate::models::Summary;

pub const SYSTEM_STATUS: &str = "operational";

/// Computes the dashboard statistics over the current tables.
pub fn summarize(tables: &Tables, now: DateTime<Utc>) -> Summary {
    Summary {
        total_patients: tables.patients.len(),
        total_doctors: tables.doctors.len(),
        total_appointments: tables.appointments.len(),
        total_prescriptions: tables.prescriptions.len(),
        appointments_by_status: count_by(tables.appointments.iter().map(|a| a.status.as_str())),
        doctors_by_specialty: count_by(tables.doctors.iter().map(|d| d.specialty.as_str())),
        average_patient_age: rounded_mean(tables.patients.iter().map(|p| p.age)),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        system_status: SYSTEM_STATUS.to_string(),
    }
}

fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    keys.fold(BTreeMap::new(), |mut counts, key| {
        *counts.entry(key.to_string()).or_insert(0) += 1;
        counts
    })
}

/// Mean rounded half up; 0 for an empty input.
fn rounded_mean(values: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));
    if count == 0 {
        return 0;
    }
    ((sum + count / 2) / count) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seed_summary() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 8, 30, 0).unwrap();
        let summary = summarize(&Tables::seeded(), now);

        assert_eq!(summary.total_patients, 15);
        assert_eq!(summary.total_doctors, 10);
        assert_eq!(summary.total_appointments, 20);
        assert_eq!(summary.total_prescriptions, 20);
        assert_eq!(summary.average_patient_age, 41);
        assert_eq!(summary.appointments_by_status["scheduled"], 13);
        assert_eq!(summary.appointments_by_status["completed"], 5);
        assert_eq!(summary.appointments_by_status["cancelled"], 2);
        assert!(!summary.appointments_by_status.contains_key("in-progress"));
        assert_eq!(summary.doctors_by_specialty.len(), 10);
        assert_eq!(summary.timestamp, "2025-09-20T08:30:00.000Z");
        assert_eq!(summary.system_status, "operational");
    }

    #[test]
    fn empty_tables_average_to_zero() {
        let summary = summarize(&Tables::default(), Utc::now());
        assert_eq!(summary.average_patient_age, 0);
        assert!(summary.appointments_by_status.is_empty());
    }

    #[test]
    fn mean_rounds_half_up() {
        assert_eq!(rounded_mean([40, 41].into_iter()), 41);
        assert_eq!(rounded_mean([40, 40, 41].into_iter()), 40);
        assert_eq!(rounded_mean([1, 2, 2].into_iter()), 2);
    }
}
