use project_tracker_core::{Project, ProjectId, ProjectStatus};
use uuid::Uuid;

#[test]
fn new_project_starts_active_with_fresh_id() {
    let first = Project::new("Website", "relaunch the site", 3);
    let second = Project::new("Website", "relaunch the site", 3);

    assert_eq!(first.status, ProjectStatus::Active);
    assert!(first.is_active());
    assert_ne!(first.id, second.id);
}

#[test]
fn project_id_round_trips_through_text() {
    let id = ProjectId::generate();
    let parsed: ProjectId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-an-id".parse::<ProjectId>().is_err());
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let id = ProjectId::from_uuid(uuid).unwrap();
    let mut project = Project::with_id(id, "Docs", "write the handbook", 2);
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Docs");
    assert_eq!(json["people"], 2);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn nil_project_id_is_rejected_on_deserialize() {
    let nil = "\"00000000-0000-0000-0000-000000000000\"";
    assert!(serde_json::from_str::<ProjectId>(nil).is_err());

    let value = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "Ghost",
        "description": "never created by the store",
        "people": 0,
        "status": "active"
    });
    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(
        err.to_string().contains("invalid project id"),
        "unexpected error: {err}"
    );
}
