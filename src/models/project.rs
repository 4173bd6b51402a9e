use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::comment::Comment;

/// Development phase shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectPhase {
    Ideation,
    Prototyping,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// One step of a project's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub id: String,
    pub name: String,
    pub status: StepStatus,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// A shared engineering project.
///
/// `likes` and `comments_count` are display counters carried from the seed
/// data; they are not recomputed from `discussion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub phase: ProjectPhase,
    pub skills_needed: Vec<String>,
    pub likes: u32,
    pub comments_count: u32,
    pub category: String,
    pub collaborators: u32,
    pub timeline: Vec<TimelineStep>,
    pub discussion: Vec<Comment>,
}

impl Project {
    /// First step marked current. Only one is expected, but that is not enforced.
    pub fn current_step(&self) -> Option<&TimelineStep> {
        self.timeline
            .iter()
            .find(|step| step.status == StepStatus::Current)
    }
}
