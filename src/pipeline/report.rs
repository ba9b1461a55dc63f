use rayon::prelude::*;

use crate::error::AppError;
use crate::pipeline::dispatch;
use crate::training::Training;
use crate::types::activity::WorkoutRecord;
use crate::types::message::InfoMessage;

/// What a batch does after a record fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    #[default]
    ContinueOnError,
    StopOnFirstError,
}

impl BatchPolicy {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "continue" => Some(BatchPolicy::ContinueOnError),
            "stop" => Some(BatchPolicy::StopOnFirstError),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub index: usize,
    pub code: String,
    pub result: Result<InfoMessage, AppError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    outcomes: Vec<RecordOutcome>,
    total: usize,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    pub fn messages(&self) -> Vec<&InfoMessage> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .collect()
    }

    pub fn errors(&self) -> Vec<(usize, &AppError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|err| (outcome.index, err)))
            .collect()
    }

    /// True when every input record was attempted.
    pub fn is_complete(&self) -> bool {
        self.outcomes.len() == self.total
    }
}

/// Renders the report line for a single training.
pub fn show(training: &dyn Training) -> String {
    training.show_training_info().get_message()
}

pub fn process_record(record: &WorkoutRecord) -> Result<InfoMessage, AppError> {
    let training = dispatch::build_record(record)?;
    Ok(training.show_training_info())
}

pub fn run_batch(records: &[WorkoutRecord], policy: BatchPolicy) -> BatchReport {
    let mut outcomes = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let outcome = evaluate(index, record);
        let failed = outcome.result.is_err();
        outcomes.push(outcome);

        if failed && policy == BatchPolicy::StopOnFirstError {
            tracing::warn!(
                "Stopping batch after record {} ({} of {} records processed)",
                index,
                index + 1,
                records.len()
            );
            break;
        }
    }

    BatchReport {
        outcomes,
        total: records.len(),
    }
}

/// Evaluates records on the rayon pool. Outcomes keep input order; a failed
/// record never stops the others.
pub fn run_batch_parallel(records: &[WorkoutRecord]) -> BatchReport {
    let outcomes: Vec<RecordOutcome> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| evaluate(index, record))
        .collect();

    BatchReport {
        outcomes,
        total: records.len(),
    }
}

fn evaluate(index: usize, record: &WorkoutRecord) -> RecordOutcome {
    let result = process_record(record);
    match &result {
        Ok(message) => tracing::debug!(
            "Record {} ({}): {:.3} km, {:.3} kcal",
            index,
            record.code,
            message.distance,
            message.calories
        ),
        Err(err) => tracing::warn!("Record {} ({}) rejected: {}", index, record.code, err),
    }

    RecordOutcome {
        index,
        code: record.code.clone(),
        result,
    }
}
