use fitness_tracker::error::AppError;
use fitness_tracker::pipeline::dispatch::build;
use fitness_tracker::pipeline::report::{self, BatchPolicy};
use fitness_tracker::types::activity::WorkoutRecord;
use fitness_tracker::types::message::InfoMessage;

const SWIMMING_LINE: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.";
const RUNNING_LINE: &str = "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.";
const WALKING_LINE: &str = "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.";

fn sample_packages() -> Vec<WorkoutRecord> {
    vec![
        WorkoutRecord::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutRecord::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutRecord::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn mixed_packages() -> Vec<WorkoutRecord> {
    vec![
        WorkoutRecord::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutRecord::new("XYZ", [1.0, 2.0, 3.0]),
        WorkoutRecord::new("RUN", [1.0, 2.0]),
        WorkoutRecord::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
    ]
}

#[test]
fn show_renders_sample_packages() {
    let expected = [SWIMMING_LINE, RUNNING_LINE, WALKING_LINE];
    for (record, line) in sample_packages().iter().zip(expected) {
        let training = build(&record.code, &record.values).expect("training");
        assert_eq!(report::show(training.as_ref()), line);
    }
}

#[test]
fn message_rounds_only_when_rendered() {
    let message = InfoMessage {
        training_type: "Running",
        duration: 1.23456,
        distance: 0.0004,
        speed: 10.0,
        calories: 123.4567,
    };

    assert_eq!(message.duration, 1.23456);
    assert_eq!(
        message.get_message(),
        "Тип тренировки: Running; Длительность: 1.235 ч.; Дистанция: 0.000 км; Ср. скорость: 10.000 км/ч; Потрачено ккал: 123.457."
    );
    assert_eq!(message.to_string(), message.get_message());
}

#[test]
fn message_serializes_unrounded_fields() {
    let training = build("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming");
    let value = serde_json::to_value(training.show_training_info()).expect("json");

    assert_eq!(value["training_type"], "Swimming");
    assert_eq!(value["speed"], 1.0);
    assert!((value["distance"].as_f64().expect("distance") - 0.9936).abs() < 1e-9);
}

#[test]
fn batch_renders_every_sample() {
    let batch = report::run_batch(&sample_packages(), BatchPolicy::ContinueOnError);

    assert!(batch.is_complete());
    assert!(batch.errors().is_empty());
    let lines: Vec<String> = batch.messages().iter().map(|m| m.get_message()).collect();
    assert_eq!(lines, vec![SWIMMING_LINE, RUNNING_LINE, WALKING_LINE]);
}

#[test]
fn continue_policy_reports_failures_and_keeps_going() {
    let batch = report::run_batch(&mixed_packages(), BatchPolicy::ContinueOnError);

    assert!(batch.is_complete());
    assert_eq!(batch.outcomes().len(), 4);
    assert_eq!(batch.messages().len(), 2);

    let errors = batch.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], (1, &AppError::UnsupportedActivity("XYZ".to_string())));
    assert!(matches!(errors[1], (2, AppError::InvalidArity { .. })));

    let last = &batch.outcomes()[3];
    assert_eq!(last.code, "SWM");
    assert_eq!(
        last.result.as_ref().map(|m| m.get_message()),
        Ok(SWIMMING_LINE.to_string())
    );
}

#[test]
fn stop_policy_halts_at_first_failure() {
    let batch = report::run_batch(&mixed_packages(), BatchPolicy::StopOnFirstError);

    assert!(!batch.is_complete());
    assert_eq!(batch.outcomes().len(), 2);
    assert_eq!(batch.messages().len(), 1);
    assert_eq!(batch.errors().len(), 1);
    assert_eq!(batch.outcomes()[1].index, 1);
}

#[test]
fn stop_policy_without_failures_processes_everything() {
    let batch = report::run_batch(&sample_packages(), BatchPolicy::StopOnFirstError);
    assert!(batch.is_complete());
    assert_eq!(batch.messages().len(), 3);
}

#[test]
fn parallel_batch_matches_sequential_order() {
    let mut records = Vec::new();
    for _ in 0..50 {
        records.extend(mixed_packages());
    }

    let sequential = report::run_batch(&records, BatchPolicy::ContinueOnError);
    let parallel = report::run_batch_parallel(&records);

    assert!(parallel.is_complete());
    assert_eq!(parallel, sequential);
    for (idx, outcome) in parallel.outcomes().iter().enumerate() {
        assert_eq!(outcome.index, idx);
    }
}

#[test]
fn empty_batch_is_complete() {
    let batch = report::run_batch(&[], BatchPolicy::StopOnFirstError);
    assert!(batch.is_complete());
    assert!(batch.outcomes().is_empty());
}

#[test]
fn policy_names() {
    assert_eq!(BatchPolicy::from_name("continue"), Some(BatchPolicy::ContinueOnError));
    assert_eq!(BatchPolicy::from_name(" STOP "), Some(BatchPolicy::StopOnFirstError));
    assert_eq!(BatchPolicy::from_name("retry"), None);
    assert_eq!(BatchPolicy::default(), BatchPolicy::ContinueOnError);
}
