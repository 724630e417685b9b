use workout_core::cli::{run_packages, OutputFormat};
use workout_core::{demo_packages, Package};

#[test]
fn test_demo_report_text() {
    let mut out = Vec::new();
    run_packages(&demo_packages(), OutputFormat::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn test_demo_report_json() {
    let mut out = Vec::new();
    run_packages(&demo_packages(), OutputFormat::Json, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let types: Vec<String> = text
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["training_type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(types, vec!["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn test_failing_package_names_its_index() {
    let packages = vec![
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("XYZ", &[1.0, 1.0, 1.0]),
    ];
    let mut out = Vec::new();
    let err = run_packages(&packages, OutputFormat::Text, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("package #1 (XYZ)"));
    // the record before the failure was still written
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}
