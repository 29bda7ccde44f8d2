use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::{SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    repository::TaskRepository,
    task::{NewTask, Task, TaskEdit, TaskId},
};

#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTaskRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task TEXT NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT 0,
                due_date TEXT,
                category TEXT NOT NULL DEFAULT ''
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn insert(&self, input: NewTask) -> Result<Task> {
        let result = sqlx::query(
            "INSERT INTO tasks (task, completed, due_date, category) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&input.description)
        .bind(false)
        .bind(input.due_date)
        .bind(&input.category)
        .execute(&*self.pool)
        .await?;
        Ok(Task {
            id: TaskId(result.last_insert_rowid()),
            description: input.description,
            completed: false,
            due_date: input.due_date,
            category: input.category,
        })
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>> {
        let row = sqlx::query("SELECT id, task, completed, due_date, category FROM tasks WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(row_to_task))
    }

    async fn list(&self) -> Result<Vec<Task>> {
        // ascending order puts NULL due dates first
        let rows = sqlx::query("SELECT id, task, completed, due_date, category FROM tasks ORDER BY due_date ASC")
            .fetch_all(&*self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_task).collect())
    }

    async fn update(&self, id: TaskId, input: TaskEdit) -> Result<()> {
        // no existence check: updating a missing id affects zero rows
        sqlx::query("UPDATE tasks SET task = ?2, due_date = ?3, category = ?4 WHERE id = ?1")
            .bind(id.0)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(&input.category)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn toggle_completed(&self, id: TaskId) -> Result<bool> {
        let result = sqlx::query("UPDATE tasks SET completed = NOT completed WHERE id = ?1")
            .bind(id.0)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id.0)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}

fn row_to_task(row: SqliteRow) -> Task {
    Task {
        id: TaskId(row.get("id")),
        description: row.get("task"),
        completed: row.get("completed"),
        due_date: row.get("due_date"),
        category: row.get("category"),
    }
}
