use crewbook_testing::assertions::{assert_badge_level, assert_error_kind};
use crewbook_testing::{CrewFixture, TestWorld};

#[test]
fn test_duplicate_company_fails_with_envelope() {
    let world = TestWorld::new();
    world.run_json(&["company", "add", "Acme"]).unwrap();

    let result = world.run(&["company", "add", "Acme"]).unwrap();
    assert!(!result.success());
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Error: Company 'Acme' already exists"));

    let json = result.json().unwrap();
    assert_error_kind(&json, "duplicate").unwrap();
    assert_badge_level(&json, "error").unwrap();
}

#[test]
fn test_delete_needs_exact_confirmation() {
    let world = TestWorld::new();
    let fixture = CrewFixture::create(&world).unwrap();
    let ana = fixture.ana.to_string();

    world
        .run_json(&["sick", "add", "--worker", &ana, "--date", "2025-03-03"])
        .unwrap();

    let refused = world
        .run(&["worker", "delete", &ana, "--confirm", "delete"])
        .unwrap();
    assert!(!refused.success());
    assert_error_kind(&refused.json().unwrap(), "confirmation").unwrap();
    world.run_json(&["worker", "show", &ana]).unwrap();

    let deleted = world
        .run_json(&["worker", "delete", &ana, "--confirm", "DELETE"])
        .unwrap();
    assert_eq!(deleted["content"]["deleted"]["sick_hours"], 1);
    assert_badge_level(&deleted, "warning").unwrap();

    let gone = world.run(&["worker", "show", &ana]).unwrap();
    assert_error_kind(&gone.json().unwrap(), "not_found").unwrap();
}

#[test]
fn test_worker_needs_crew_of_same_company() {
    let world = TestWorld::new();
    let fixture = CrewFixture::create(&world).unwrap();
    let birch = world.run_json(&["company", "add", "Birch"]).unwrap()["content"]["id"]
        .as_i64()
        .unwrap();

    let result = world
        .run(&[
            "worker",
            "add",
            "--company",
            &birch.to_string(),
            "--crew",
            &fixture.crew_a.to_string(),
            "Mia Ruiz",
        ])
        .unwrap();
    assert!(!result.success());
    assert_error_kind(&result.json().unwrap(), "validation").unwrap();
}

#[test]
fn test_sleeves_take_no_size() {
    let world = TestWorld::new();
    let fixture = CrewFixture::create(&world).unwrap();

    let result = world
        .run(&[
            "ppe",
            "log",
            "--worker",
            &fixture.ana.to_string(),
            "--item",
            "sleeves",
            "--action",
            "issue",
            "--size",
            "9",
        ])
        .unwrap();
    assert!(!result.success());
    assert_error_kind(&result.json().unwrap(), "validation").unwrap();
}

#[test]
fn test_negative_hours_rejected() {
    let world = TestWorld::new();
    let fixture = CrewFixture::create(&world).unwrap();

    let result = world
        .run(&[
            "sick",
            "add",
            "--worker",
            &fixture.ana.to_string(),
            "--hours=-2",
        ])
        .unwrap();
    assert!(!result.success());
    assert_error_kind(&result.json().unwrap(), "validation").unwrap();
}

#[test]
fn test_unknown_warning_type_is_a_usage_error() {
    let world = TestWorld::new();
    let fixture = CrewFixture::create(&world).unwrap();

    let result = world
        .run(&[
            "warning",
            "add",
            "--worker",
            &fixture.ana.to_string(),
            "--type",
            "late",
        ])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("no_safety_glasses"));
}
