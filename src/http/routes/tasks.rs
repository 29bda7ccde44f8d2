use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::application::task_service::TaskService;
use crate::domain::task::{NewTask, TaskEdit, TaskId};
use crate::http::{types::ApiError, views};

#[derive(Clone)]
pub struct AppState<S: TaskService> {
    pub service: S,
}

pub fn router<S: TaskService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(index::<S>))
        .route("/add", post(add_task::<S>))
        .route("/delete", get(delete_task::<S>))
        .route("/complete", post(complete_task::<S>))
        .route("/edit", get(edit_form::<S>).post(submit_edit::<S>))
        .with_state(state)
}

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

// Absent form fields deserialize to empty strings so validation below
// decides the status, not the extractor.
#[derive(Deserialize)]
struct AddForm {
    #[serde(default)]
    task: String,
    #[serde(default)]
    due_date: String,
    #[serde(default)]
    category: String,
}

#[derive(Deserialize)]
struct EditForm {
    #[serde(default)]
    id: String,
    #[serde(default)]
    task: String,
    #[serde(default)]
    due_date: String,
    #[serde(default)]
    category: String,
}

async fn index<S: TaskService>(State(state): State<AppState<S>>) -> Result<Html<String>, ApiError> {
    let tasks = state.service.list().await?;
    Ok(Html(views::index_page(&tasks)))
}

async fn add_task<S: TaskService>(
    State(state): State<AppState<S>>,
    Form(form): Form<AddForm>,
) -> Result<Redirect, ApiError> {
    let description = require_description(&form.task)?;
    let due_date = parse_due_date(&form.due_date)?;
    state
        .service
        .create(NewTask { description, due_date, category: form.category })
        .await?;
    Ok(Redirect::to("/"))
}

async fn delete_task<S: TaskService>(
    State(state): State<AppState<S>>,
    Query(query): Query<IdQuery>,
) -> Result<Redirect, ApiError> {
    let id = parse_id(query.id.as_deref())?;
    // deleting an id that no longer exists is still success
    state.service.delete(id).await?;
    Ok(Redirect::to("/"))
}

async fn complete_task<S: TaskService>(
    State(state): State<AppState<S>>,
    Query(query): Query<IdQuery>,
) -> Result<Redirect, ApiError> {
    let id = parse_id(query.id.as_deref())?;
    if !state.service.toggle_completed(id).await? {
        return Err(ApiError::Storage(anyhow::anyhow!("failed to load task {}", id.0)));
    }
    Ok(Redirect::to("/"))
}

async fn edit_form<S: TaskService>(
    State(state): State<AppState<S>>,
    Query(query): Query<IdQuery>,
) -> Result<Html<String>, ApiError> {
    let id = parse_id(query.id.as_deref())?;
    match state.service.get(id).await? {
        Some(task) => Ok(Html(views::edit_page(&task))),
        None => Err(ApiError::NotFound),
    }
}

async fn submit_edit<S: TaskService>(
    State(state): State<AppState<S>>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, ApiError> {
    let id = parse_id(Some(form.id.as_str()))?;
    let description = require_description(&form.task)?;
    let due_date = parse_due_date(&form.due_date)?;
    state
        .service
        .edit(id, TaskEdit { description, due_date, category: form.category })
        .await?;
    Ok(Redirect::to("/"))
}

fn parse_id(raw: Option<&str>) -> Result<TaskId, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadInput("missing id".into()))?;
    raw.parse()
        .map(TaskId)
        .map_err(|_| ApiError::BadInput("invalid id".into()))
}

fn require_description(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadInput("task cannot be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ApiError::BadInput("invalid date format".into()))
}
