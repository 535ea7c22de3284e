//! Typed content model shared by the storage layer and the HTTP API.
//!
//! Lesson bodies are structured records, decoded once at the data-source
//! boundary and carried as types from there on; handlers and the editor
//! never re-decode per render. All records serialize camelCase to match
//! the JSON wire shapes the client expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// The narrative half of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub introduction: String,
    pub key_points: Vec<String>,
    pub code_example: String,
}

/// One hands-on exercise inside a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub instruction: String,
    pub initial_code: String,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Module key: `grid`, `flexbox`, or `position`.
    pub module: String,
    pub order: i32,
    /// Estimated duration in minutes.
    pub duration: i32,
    pub difficulty: Difficulty,
    pub content: LessonContent,
    pub exercises: Vec<Exercise>,
}

impl Lesson {
    /// The CSS a fresh editor surface should start from: the first
    /// exercise's starter code, falling back to the lesson's code example.
    pub fn initial_css(&self) -> &str {
        match self.exercises.first() {
            Some(exercise) if !exercise.initial_code.is_empty() => &exercise.initial_code,
            _ => &self.content.code_example,
        }
    }
}

/// A lesson payload without an id, as accepted by create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub title: String,
    pub description: String,
    pub module: String,
    pub order: i32,
    pub duration: i32,
    pub difficulty: Difficulty,
    pub content: LessonContent,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub name: String,
    pub description: String,
    pub order: i32,
    pub icon: String,
    pub total_lessons: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModule {
    pub name: String,
    pub description: String,
    pub order: i32,
    pub icon: String,
    pub total_lessons: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: String,
    pub user_id: String,
    pub lesson_id: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    /// The learner's code attempts, newest last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_submissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgress {
    pub user_id: String,
    pub lesson_id: String,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub code_submissions: Option<Vec<String>>,
}
