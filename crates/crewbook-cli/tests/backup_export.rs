use crewbook_testing::assertions::created_id;
use crewbook_testing::{CrewFixture, TestWorld};

#[test]
fn test_backup_then_restore_rolls_back() {
    let world = TestWorld::new();
    CrewFixture::create(&world).unwrap();

    let created = world
        .run_json(&["backup", "create", "--output", "snap.zip"])
        .unwrap();
    assert_eq!(created["content"]["backup"]["entry"], "crewbook.db");
    assert!(world.cwd().join("snap.zip").exists());

    created_id(&world.run_json(&["company", "add", "Birch"]).unwrap()).unwrap();
    let before = world.run_json(&["company", "list"]).unwrap();
    assert_eq!(before["content"]["companies"].as_array().unwrap().len(), 2);

    let restored = world.run_json(&["backup", "restore", "snap.zip"]).unwrap();
    assert_eq!(restored["badge"]["label"], "Store restored");

    let after = world.run_json(&["company", "list"]).unwrap();
    let companies = after["content"]["companies"].as_array().unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0]["name"], "Acme");
}

#[test]
fn test_restore_from_missing_archive_fails() {
    let world = TestWorld::new();

    let result = world.run(&["backup", "restore", "nope.zip"]).unwrap();
    assert!(!result.success());
    assert_eq!(result.json().unwrap()["content"]["kind"], "backup");
}

#[test]
fn test_export_writes_every_table() {
    let world = TestWorld::new();
    let fixture = CrewFixture::create(&world).unwrap();
    world
        .run_json(&[
            "warning",
            "add",
            "--worker",
            &fixture.ana.to_string(),
            "--type",
            "other",
            "--date",
            "2025-04-01",
        ])
        .unwrap();

    let export = world.run_json(&["export", "--dir", "out"]).unwrap();
    let tables = export["content"]["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 7);

    let out = world.cwd().join("out");
    let workers = std::fs::read_to_string(out.join("workers.csv")).unwrap();
    assert_eq!(workers.lines().count(), 3);

    let accidents = std::fs::read(out.join("accidents.csv")).unwrap();
    assert!(accidents.is_empty());
}
