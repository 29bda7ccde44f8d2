use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row identifier assigned by the store on insert, never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaskId(pub i64);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub category: String,
}

/// Input for creating a task; `completed` always starts false.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub category: String,
}

/// Replacement values for an edit; `completed` is untouched by edits.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEdit {
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub category: String,
}
