use inflam_data::{Doctor, Observation, Patient};

#[test]
fn patient_json_is_flat() {
    let mut alice = Patient::new("Alice");
    alice.add_observation(3.0, None);
    alice.add_observation(4.5, Some(7));

    let json = serde_json::to_value(&alice).unwrap();
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["observations"][1]["day"], 7);

    let back: Patient = serde_json::from_value(json).unwrap();
    assert_eq!(back, alice);
}

#[test]
fn observations_default_to_empty() {
    let p: Patient = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
    assert!(p.observations.is_empty());
    assert_eq!(p.name(), "Bob");
}

#[test]
fn doctor_sees_patient_updates_made_before_borrowing() {
    let mut alice = Patient::new("Alice");
    alice.add_observation(1.0, None);
    alice.add_observation(2.0, None);

    let mut doctor = Doctor::new("Dr. Phil");
    doctor.add_patient(&alice);

    let seen = doctor.patients()[0];
    assert_eq!(
        seen.observations.last(),
        Some(&Observation { day: 1, value: 2.0 })
    );
    assert_eq!(doctor.name(), "Dr. Phil");
}
