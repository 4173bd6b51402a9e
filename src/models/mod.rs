pub mod comment;
pub mod post;
pub mod profile;
pub mod project;

use serde::{Deserialize, Serialize};

pub use comment::{Comment, CommentType, ParseCommentTypeError};
pub use post::{Media, MediaKind, Post};
pub use profile::{KarmaTier, PortfolioProject, PortfolioStatus, UserProfile};
pub use project::{Project, ProjectPhase, StepStatus, TimelineStep};

/// Represents one group of skills a user can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered catalog of selectable skills, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub categories: Vec<SkillCategory>,
}

impl SkillCatalog {
    pub fn category(&self, name: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.name == name)
    }
}
