use workout_core::{read_package, WorkoutError, WorkoutKind};

#[test]
fn test_codes_resolve_to_variants() {
    let cases = [
        ("RUN", vec![15000.0, 1.0, 75.0], "Running"),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0], "SportsWalking"),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], "Swimming"),
    ];
    for (code, params, label) in cases {
        let w = read_package(code, &params).expect("valid package");
        assert_eq!(w.label(), label);
    }
}

#[test]
fn test_positional_binding_order() {
    let swim = read_package("SWM", &[720.0, 2.0, 80.0, 50.0, 10.0]).unwrap();
    assert_eq!(swim.session().action, 720);
    assert_eq!(swim.session().duration_h, 2.0);
    assert_eq!(swim.session().weight_kg, 80.0);
    // 50 * 10 / 1000 / 2
    assert!((swim.mean_speed_kmh() - 0.25).abs() < 1e-12);
}

#[test]
fn test_unknown_code() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err, WorkoutError::UnknownWorkoutCode("XYZ".to_string()));
}

#[test]
fn test_codes_are_case_sensitive() {
    assert!(matches!(
        read_package("run", &[15000.0, 1.0, 75.0]),
        Err(WorkoutError::UnknownWorkoutCode(_))
    ));
}

#[test]
fn test_arity_mismatch() {
    let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArityMismatch { code: "RUN".to_string(), expected: 3, got: 4 }
    );

    let err = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::ArityMismatch { expected: 5, got: 3, .. }));
}

#[test]
fn test_non_integer_count_rejected() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.5, 40.0]).unwrap_err();
    assert!(matches!(
        err,
        WorkoutError::InvalidParameter { name: "pool_length", .. }
    ));

    let err = read_package("RUN", &[-1.0, 1.0, 75.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidParameter { name: "action", .. }));

    let err = read_package("WLK", &[f64::NAN, 1.0, 75.0, 180.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidParameter { name: "action", .. }));
}

#[test]
fn test_kind_table() {
    for kind in WorkoutKind::ALL {
        assert_eq!(kind.code().parse::<WorkoutKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.code());
        assert_eq!(kind.build(&vec![1.0; kind.arity()]).unwrap().label(), kind.label());
    }
    assert_eq!(WorkoutKind::Running.arity(), 3);
    assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
    assert_eq!(WorkoutKind::Swimming.arity(), 5);
}
