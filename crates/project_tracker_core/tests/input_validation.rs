use project_tracker_core::{InputRules, ProjectInput, ProjectStore, ValidationError};

#[test]
fn valid_input_is_trimmed_and_parsed() {
    let input = ProjectInput::new("  Website ", " relaunch the site ", " 3 ");

    let valid = input.validate(&InputRules::default()).unwrap();

    assert_eq!(valid.title, "Website");
    assert_eq!(valid.description, "relaunch the site");
    assert_eq!(valid.people, 3);
}

#[test]
fn blank_title_is_reported_first() {
    let input = ProjectInput::new("   ", "", "0");

    let err = input.validate(&InputRules::default()).unwrap_err();

    assert_eq!(err, ValidationError::Missing { field: "title" });
    assert_eq!(err.field(), "title");
}

#[test]
fn short_description_is_rejected() {
    let err = ProjectInput::new("Docs", "tiny", "2")
        .validate(&InputRules::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ValidationError::TooShort {
            field: "description",
            min: 5,
            actual: 4
        }
    ));
}

#[test]
fn people_bounds_are_inclusive() {
    let rules = InputRules::default();
    assert_eq!(
        ProjectInput::new("Docs", "write docs", "1")
            .validate(&rules)
            .unwrap()
            .people,
        1
    );
    assert_eq!(
        ProjectInput::new("Docs", "write docs", "5")
            .validate(&rules)
            .unwrap()
            .people,
        5
    );

    let too_many = ProjectInput::new("Docs", "write docs", "6")
        .validate(&rules)
        .unwrap_err();
    assert!(matches!(too_many, ValidationError::AboveMaximum { max: 5, .. }));

    let none = ProjectInput::new("Docs", "write docs", "0")
        .validate(&rules)
        .unwrap_err();
    assert!(matches!(none, ValidationError::BelowMinimum { min: 1, .. }));
}

#[test]
fn non_numeric_people_is_rejected() {
    let err = ProjectInput::new("Docs", "write docs", "three")
        .validate(&InputRules::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "people must be a whole number, got `three`");
}

#[test]
fn rejected_input_never_reaches_the_store() {
    let mut store = ProjectStore::new();
    let input = ProjectInput::new("Docs", "tiny", "2");

    if let Ok(valid) = input.validate(&InputRules::default()) {
        store.add_project(valid.title, valid.description, valid.people);
    }

    assert!(store.is_empty());
}

#[test]
fn team_size_outside_u32_reports_the_violated_bound() {
    let mut rules = InputRules::default();
    rules.people.min = None;
    rules.people.max = None;

    let too_large = ProjectInput::new("Docs", "write docs", "5000000000")
        .validate(&rules)
        .unwrap_err();
    assert_eq!(
        too_large,
        ValidationError::AboveMaximum {
            field: "people",
            max: i64::from(u32::MAX),
            actual: 5_000_000_000,
        }
    );

    let negative = ProjectInput::new("Docs", "write docs", "-2")
        .validate(&rules)
        .unwrap_err();
    assert!(matches!(
        negative,
        ValidationError::BelowMinimum { min: 0, actual: -2, .. }
    ));
}
