use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn float_distance_command() {
    Command::cargo_bin("point-distance")
        .unwrap()
        .args(["0,0,0", "3,4,0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));
}

#[test]
fn negative_coordinates_are_not_flags() {
    Command::cargo_bin("point-distance")
        .unwrap()
        .args(["-1,-1,-1", "1,1,1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3.464101615"));
}

#[test]
fn integer_distance_command() {
    Command::cargo_bin("point-distance")
        .unwrap()
        .args(["--coords", "int", "(0,0,0)", "(1,1,1)"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1.732050807"));
}

#[test]
fn integer_mode_rejects_fractions() {
    Command::cargo_bin("point-distance")
        .unwrap()
        .args(["--coords", "int", "0,0,0", "0.5,0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid x coordinate \"0.5\""))
        .stderr(predicate::str::contains("InvalidComponent").not());
}

#[test]
fn wrong_component_count_fails() {
    Command::cargo_bin("point-distance")
        .unwrap()
        .args(["1,2", "3,4,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expected 3 comma-separated coordinates, found 2",
        ));
}

#[test]
fn large_integer_coordinates_measure_exactly() {
    Command::cargo_bin("point-distance")
        .unwrap()
        .args(["--coords", "int", "4000000000,0,0", "0,0,0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("4000000000\n"));
}

#[test]
fn integer_points_too_far_apart_report_error() {
    let min = format!("{},0,0", i64::MIN);
    let max = format!("{},0,0", i64::MAX);
    Command::cargo_bin("point-distance")
        .unwrap()
        .args(["--coords", "int", min.as_str(), max.as_str()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too far apart to measure"))
        .stderr(predicate::str::contains("panicked").not());
}
