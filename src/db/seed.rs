//! Demo data set loaded at startup when `store.seed` is enabled.

use super::{Collection, Record, Tables};
use crate::models::{Appointment, AppointmentStatus, Doctor, Patient, Prescription};

const PATIENTS: [(&str, u32, &str, &str, &str); 15] = [
    ("John Doe", 30, "male", "None", "john.doe@email.com"),
    ("Jane Smith", 25, "female", "Asthma", "jane.smith@email.com"),
    ("Michael Johnson", 45, "male", "Diabetes Type 2, Hypertension", "michael.johnson@email.com"),
    ("Emily Davis", 32, "female", "Allergies (peanuts)", "emily.davis@email.com"),
    ("Robert Brown", 58, "male", "Heart disease, High cholesterol", "robert.brown@email.com"),
    ("Sarah Wilson", 28, "female", "Migraine", "sarah.wilson@email.com"),
    ("David Miller", 67, "male", "Arthritis, Osteoporosis", "david.miller@email.com"),
    ("Lisa Anderson", 41, "female", "Depression, Anxiety", "lisa.anderson@email.com"),
    ("James Taylor", 35, "male", "None", "james.taylor@email.com"),
    ("Maria Garcia", 52, "female", "Thyroid disorder", "maria.garcia@email.com"),
    ("Christopher Lee", 29, "male", "Asthma", "christopher.lee@email.com"),
    ("Amanda White", 39, "female", "Pregnancy (32 weeks)", "amanda.white@email.com"),
    ("Kevin Martinez", 44, "male", "Back injury", "kevin.martinez@email.com"),
    ("Jennifer Clark", 33, "female", "PCOS", "jennifer.clark@email.com"),
    ("Mark Rodriguez", 61, "male", "Prostate enlargement", "mark.rodriguez@email.com"),
];

const DOCTORS: [(&str, &str, &str); 10] = [
    ("Dr. Alice Johnson", "Cardiology", "alice.johnson@hospital.com"),
    ("Dr. Bob Wilson", "Dermatology", "bob.wilson@hospital.com"),
    ("Dr. Carol Martinez", "Endocrinology", "carol.martinez@hospital.com"),
    ("Dr. David Chen", "Neurology", "david.chen@hospital.com"),
    ("Dr. Emma Thompson", "Pediatrics", "emma.thompson@hospital.com"),
    ("Dr. Frank Miller", "Orthopedics", "frank.miller@hospital.com"),
    ("Dr. Grace Lee", "Psychiatry", "grace.lee@hospital.com"),
    ("Dr. Henry Davis", "Internal Medicine", "henry.davis@hospital.com"),
    ("Dr. Isabel Garcia", "Obstetrics & Gynecology", "isabel.garcia@hospital.com"),
    ("Dr. Jack Robinson", "Urology", "jack.robinson@hospital.com"),
];

const APPOINTMENTS: [(u32, u32, &str, &str, &str, AppointmentStatus); 20] = {
    use AppointmentStatus::{Cancelled, Completed, Scheduled};
    [
        (1, 8, "2025-09-20", "10:00", "Annual checkup", Scheduled),
        (2, 2, "2025-09-21", "14:30", "Skin consultation", Scheduled),
        (3, 3, "2025-09-22", "09:15", "Diabetes follow-up", Scheduled),
        (4, 8, "2025-09-23", "11:00", "Allergy test results", Scheduled),
        (5, 1, "2025-09-24", "13:45", "Cardiac evaluation", Scheduled),
        (6, 4, "2025-09-25", "16:00", "Migraine consultation", Scheduled),
        (7, 6, "2025-09-26", "08:30", "Joint pain assessment", Scheduled),
        (8, 7, "2025-09-27", "15:15", "Mental health check", Scheduled),
        (9, 8, "2025-09-28", "10:45", "Physical exam", Scheduled),
        (10, 3, "2025-09-29", "12:30", "Thyroid monitoring", Scheduled),
        (11, 8, "2025-09-18", "09:00", "Asthma review", Completed),
        (12, 9, "2025-09-19", "14:00", "Prenatal checkup", Completed),
        (13, 6, "2025-09-17", "11:30", "Back injury follow-up", Completed),
        (14, 9, "2025-09-16", "16:45", "PCOS consultation", Completed),
        (15, 10, "2025-09-15", "13:00", "Prostate examination", Completed),
        (3, 1, "2025-10-01", "10:00", "Cardiac screening", Scheduled),
        (5, 8, "2025-10-02", "15:30", "Blood pressure check", Scheduled),
        (1, 2, "2025-09-14", "12:00", "Skin check", Cancelled),
        (7, 7, "2025-09-13", "09:45", "Counseling session", Cancelled),
        (12, 9, "2025-10-05", "11:15", "Prenatal scan", Scheduled),
    ]
};

const PRESCRIPTIONS: [(u32, u32, &str, &str, &str, &str); 20] = [
    (1, 8, "Aspirin", "100mg", "Once daily with food", "2025-09-15"),
    (2, 2, "Hydrocortisone cream", "1%", "Apply twice daily to affected area", "2025-09-15"),
    (3, 3, "Metformin", "500mg", "Twice daily with meals", "2025-09-10"),
    (3, 1, "Lisinopril", "10mg", "Once daily in the morning", "2025-09-10"),
    (4, 8, "EpiPen", "0.3mg", "Use only in case of severe allergic reaction", "2025-09-12"),
    (5, 1, "Atorvastatin", "20mg", "Once daily at bedtime", "2025-09-08"),
    (5, 1, "Carvedilol", "6.25mg", "Twice daily", "2025-09-08"),
    (6, 4, "Sumatriptan", "50mg", "As needed for migraine, max 2 per day", "2025-09-14"),
    (7, 6, "Ibuprofen", "400mg", "Three times daily with food", "2025-09-11"),
    (7, 6, "Calcium carbonate", "500mg", "Twice daily with meals", "2025-09-11"),
    (8, 7, "Sertraline", "50mg", "Once daily in the morning", "2025-09-09"),
    (8, 7, "Lorazepam", "0.5mg", "As needed for anxiety, max 3 per day", "2025-09-09"),
    (10, 3, "Levothyroxine", "75mcg", "Once daily on empty stomach", "2025-09-13"),
    (11, 8, "Albuterol inhaler", "90mcg", "2 puffs every 4-6 hours as needed", "2025-09-18"),
    (12, 9, "Prenatal vitamins", "1 tablet", "Once daily", "2025-09-19"),
    (13, 6, "Naproxen", "220mg", "Twice daily with food", "2025-09-17"),
    (14, 9, "Metformin", "500mg", "Twice daily with meals", "2025-09-16"),
    (15, 10, "Tamsulosin", "0.4mg", "Once daily 30 minutes after the same meal", "2025-09-15"),
    (6, 4, "Propranolol", "40mg", "Twice daily for migraine prevention", "2025-09-14"),
    (2, 8, "Montelukast", "10mg", "Once daily in the evening", "2025-09-20"),
];

/// Ids are assigned 1..=n in table order.
fn numbered<T, R: Record>(rows: &[T], build: impl Fn(u32, &T) -> R) -> Collection<R> {
    (1u32..).zip(rows).map(|(id, row)| build(id, row)).collect()
}

pub fn demo_tables() -> Tables {
    Tables {
        patients: numbered(&PATIENTS, |id, &(name, age, gender, history, contact)| Patient {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
            medical_history: history.into(),
            contact_info: contact.into(),
        }),
        doctors: numbered(&DOCTORS, |id, &(name, specialty, contact)| Doctor {
            id,
            name: name.into(),
            specialty: specialty.into(),
            contact_info: contact.into(),
        }),
        appointments: numbered(
            &APPOINTMENTS,
            |id, &(patient_id, doctor_id, date, time, reason, status)| Appointment {
                id,
                patient_id,
                doctor_id,
                date: date.into(),
                time: time.into(),
                reason: reason.into(),
                status,
            },
        ),
        prescriptions: numbered(
            &PRESCRIPTIONS,
            |id, &(patient_id, doctor_id, medication, dosage, instructions, issued)| Prescription {
                id,
                patient_id,
                doctor_id,
                medication: medication.into(),
                dosage: dosage.into(),
                instructions: instructions.into(),
                date_issued: issued.into(),
            },
        ),
    }
}
