// tests/load_context.rs

use phaserun::config::loader::{
    ENV_ACTION, ENV_PROJECT_NAME, ENV_SCRIPT_NAME, ENV_SRC_ROOT, REQUIRED_VARS,
    from_lookup,
};
use phaserun::errors::PhaserunError;

fn full_lookup(name: &str) -> Option<String> {
    match name {
        ENV_SRC_ROOT => Some("/build/src".to_string()),
        ENV_PROJECT_NAME => Some("Demo".to_string()),
        ENV_SCRIPT_NAME => Some("phase.sh".to_string()),
        ENV_ACTION => Some("build".to_string()),
        _ => None,
    }
}

#[test]
fn full_environment_maps_onto_context_fields() {
    let context = from_lookup(full_lookup).expect("context should load");

    assert_eq!(context.src_root, "/build/src");
    assert_eq!(context.project_name, "Demo");
    assert_eq!(context.script_name, "phase.sh");
    assert_eq!(context.action, "build");
}

#[test]
fn one_absent_variable_is_reported_by_name() {
    let result = from_lookup(|name| {
        if name == ENV_ACTION {
            None
        } else {
            full_lookup(name)
        }
    });

    match result {
        Err(PhaserunError::MissingVariables(names)) => {
            assert_eq!(names, vec![ENV_ACTION.to_string()]);
        }
        other => panic!("expected MissingVariables, got {other:?}"),
    }
}

#[test]
fn empty_lookup_reports_all_four_in_order() {
    let result = from_lookup(|_| None);

    match result {
        Err(PhaserunError::MissingVariables(names)) => {
            assert_eq!(names, REQUIRED_VARS.map(String::from).to_vec());
        }
        other => panic!("expected MissingVariables, got {other:?}"),
    }
}

#[test]
fn set_but_empty_values_are_still_present() {
    let context = from_lookup(|_| Some(String::new())).expect("empty values are accepted");

    assert_eq!(context.src_root, "");
    assert_eq!(context.script_path(), "/");
}

#[test]
fn missing_variables_error_names_the_variables_in_its_message() {
    let err = from_lookup(|_| None).unwrap_err();
    let message = err.to_string();

    for name in REQUIRED_VARS {
        assert!(
            message.contains(name),
            "error message should mention {name}: {message}"
        );
    }
}
