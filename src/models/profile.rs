use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioStatus {
    Completed,
    Ongoing,
    Paused,
}

/// Entry in a user's portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: PortfolioStatus,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Reputation tier derived from the karma score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KarmaTier {
    Third,
    Second,
    First,
    Trophy,
}

impl KarmaTier {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s > 2000 => KarmaTier::Trophy,
            s if s > 1000 => KarmaTier::First,
            s if s > 500 => KarmaTier::Second,
            _ => KarmaTier::Third,
        }
    }
}

/// The acting user's profile.
///
/// `skills` behaves as an ordered set; go through
/// [`ContentStore::add_skill`](crate::store::ContentStore::add_skill) to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub karma_score: u32,
    pub badge: String,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub projects: Vec<PortfolioProject>,
}

impl UserProfile {
    pub fn karma_tier(&self) -> KarmaTier {
        KarmaTier::for_score(self.karma_score)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn karma_tier_thresholds_are_exclusive() {
        assert_eq!(KarmaTier::for_score(2847), KarmaTier::Trophy);
        assert_eq!(KarmaTier::for_score(2000), KarmaTier::First);
        assert_eq!(KarmaTier::for_score(1001), KarmaTier::First);
        assert_eq!(KarmaTier::for_score(1000), KarmaTier::Second);
        assert_eq!(KarmaTier::for_score(500), KarmaTier::Third);
        assert_eq!(KarmaTier::for_score(0), KarmaTier::Third);
    }
}
