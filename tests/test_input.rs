use std::io::Write;

use fcfs_disk_scheduler::error::{Error, InvalidInputError};
use fcfs_disk_scheduler::loader::input::{InputAdapter, ScheduleInput, TextInput, load_scenarios};
use fcfs_disk_scheduler::{run_all, run_schedule};

#[test]
fn test_text_input_runs_calculation() {
    let adapter = TextInput::new(Some("50"), Some("98, 183, 37, 122, 14, 124, 65, 67"), None);
    let run = run_schedule(&adapter).unwrap();

    assert_eq!(run.result.total_movement, 640);
    assert_eq!(run.input.head_position, 50);
    assert_eq!(run.name, "command line");
}

#[test]
fn test_non_numeric_request_is_rejected_before_calculation() {
    let adapter = TextInput::new(Some("10"), Some("5, abc, 10"), None);

    match run_schedule(&adapter) {
        Err(Error::InvalidInput(InvalidInputError::NonNumericRequest { position, token })) => {
            assert_eq!(position, 2);
            assert_eq!(token, "abc");
        }
        other => panic!("expected a non-numeric request error, got {:?}", other),
    }
}

#[test]
fn test_missing_fields_are_reported() {
    assert_eq!(TextInput::new(Some("10"), None, None).read_inputs(), Err(InvalidInputError::MissingRequests));
    assert_eq!(TextInput::new(None, Some("1,2"), None).read_inputs(), Err(InvalidInputError::MissingHeadPosition));
    assert_eq!(
        TextInput::new(Some("ten"), Some("1,2"), None).read_inputs(),
        Err(InvalidInputError::NonNumericHeadPosition("ten".to_string()))
    );
}

#[test]
fn test_disk_size_from_text() {
    let adapter = TextInput::new(Some("53"), Some("98,250"), Some("200"));

    assert_eq!(adapter.read_inputs(), Err(InvalidInputError::OutOfRange { value: 250, disk_size: 200 }));

    let adapter = TextInput::new(Some("53"), Some("98,199"), Some("200"));
    assert_eq!(
        adapter.read_inputs(),
        Ok(ScheduleInput { head_position: 53, requests: vec![98, 199], disk_size: Some(200) })
    );
}

#[test]
fn test_scenario_file_loading() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "scenarios": [
                {{ "name": "textbook", "headPosition": 50, "requests": [98, 183, 37, 122, 14, 124, 65, 67], "diskSize": 200 }},
                {{ "headPosition": 0, "requests": [] }},
                {{ "name": "no head", "requests": [1] }}
            ]
        }}"#
    )
    .unwrap();

    let scenarios = load_scenarios(file.path()).unwrap();
    assert_eq!(scenarios.len(), 3);

    let run = run_schedule(&scenarios[0]).unwrap();
    assert_eq!(run.name, "textbook");
    assert_eq!(run.result.total_movement, 640);
    assert_eq!(run.input.disk_size, Some(200));

    assert_eq!(scenarios[1].name(), "scenario #2");
    assert_eq!(scenarios[1].read_inputs(), Err(InvalidInputError::MissingRequests));
    assert_eq!(scenarios[2].read_inputs(), Err(InvalidInputError::MissingHeadPosition));
}

#[test]
fn test_malformed_scenario_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    assert!(matches!(load_scenarios(file.path()), Err(Error::DeserializationError(_))));
    assert!(matches!(load_scenarios("/nonexistent/scenarios.json"), Err(Error::IoError(_))));
}

#[test]
fn test_rejected_scenario_does_not_stop_the_batch() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "scenarios": [
                {{ "name": "first", "headPosition": 0, "requests": [5] }},
                {{ "name": "off the disk", "headPosition": 10, "requests": [250], "diskSize": 200 }},
                {{ "name": "last", "headPosition": 10, "requests": [10] }}
            ]
        }}"#
    )
    .unwrap();

    let adapters: Vec<Box<dyn InputAdapter>> = load_scenarios(file.path())
        .unwrap()
        .into_iter()
        .map(|s| Box::new(s) as Box<dyn InputAdapter>)
        .collect();

    let runs = run_all(&adapters);

    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].as_ref().unwrap().result.total_movement, 5);
    assert!(matches!(
        runs[1],
        Err(Error::InvalidInput(InvalidInputError::OutOfRange { value: 250, disk_size: 200 }))
    ));
    let last = runs[2].as_ref().unwrap();
    assert_eq!(last.name, "last");
    assert_eq!(last.result.path.positions(), &[10, 10]);
}
