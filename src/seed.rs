// src/seed.rs
//
// Static content loaded at startup.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{
    Comment, CommentType, Media, PortfolioProject, PortfolioStatus, Post, Project, ProjectPhase,
    SkillCatalog, SkillCategory, StepStatus, TimelineStep, UserProfile,
};

/// Category filter values offered by the feed, "All" first.
pub const CATEGORIES: [&str; 6] = ["All", "Electronics", "Mechanical", "IT", "Civil", "Chemical"];

/// Engineering branches listed in the posts sidebar.
pub const BRANCHES: [&str; 5] = ["Electronics", "Mechanical", "IT", "Civil", "Chemical"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn step(
    id: &str,
    name: &str,
    status: StepStatus,
    description: &str,
    date: Option<NaiveDate>,
) -> TimelineStep {
    TimelineStep {
        id: id.to_string(),
        name: name.to_string(),
        status,
        description: description.to_string(),
        date,
    }
}

fn comment(
    id: &str,
    author: &str,
    content: &str,
    comment_type: CommentType,
    upvotes: u32,
    timestamp: DateTime<Utc>,
) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.to_string(),
        content: content.to_string(),
        comment_type,
        upvotes,
        timestamp,
    }
}

/// Feed projects. Discussion timestamps are placed relative to `loaded_at`.
pub fn projects(loaded_at: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Smart Campus Navigation System".to_string(),
            description: "An IoT-based indoor navigation system designed to help students and \
                          visitors navigate large university campuses efficiently. The system \
                          uses beacon technology and machine learning to provide real-time \
                          directions and crowd density information."
                .to_string(),
            author: "Priya Sharma".to_string(),
            phase: ProjectPhase::Prototyping,
            skills_needed: strings(&["React Native", "IoT", "Python", "Machine Learning"]),
            likes: 24,
            comments_count: 8,
            category: "IT".to_string(),
            collaborators: 3,
            timeline: vec![
                step(
                    "1",
                    "Research & Ideation",
                    StepStatus::Completed,
                    "Market research, problem validation, and initial concept development",
                    NaiveDate::from_ymd_opt(2024, 1, 15),
                ),
                step(
                    "2",
                    "Technical Planning",
                    StepStatus::Completed,
                    "Architecture design, technology stack selection, and resource planning",
                    NaiveDate::from_ymd_opt(2024, 2, 1),
                ),
                step(
                    "3",
                    "Prototyping",
                    StepStatus::Current,
                    "Building MVP, beacon integration, and basic mobile app development",
                    NaiveDate::from_ymd_opt(2024, 2, 15),
                ),
                step(
                    "4",
                    "Testing & Validation",
                    StepStatus::Upcoming,
                    "User testing, performance optimization, and bug fixes",
                    None,
                ),
                step(
                    "5",
                    "Deployment",
                    StepStatus::Upcoming,
                    "Campus deployment, training, and maintenance setup",
                    None,
                ),
            ],
            discussion: vec![
                comment(
                    "1",
                    "Dr. Rajesh Kumar",
                    "Have you considered using BLE 5.0 beacons for better accuracy? They offer \
                     improved range and lower power consumption.",
                    CommentType::Resource,
                    8,
                    loaded_at - Duration::hours(2),
                ),
                comment(
                    "2",
                    "Sneha Patel",
                    "One potential risk: What happens if the beacon network fails? Consider \
                     implementing a fallback system using WiFi triangulation.",
                    CommentType::Risk,
                    12,
                    loaded_at - Duration::hours(4),
                ),
                comment(
                    "3",
                    "Arjun Mehta",
                    "Alternative approach: Instead of beacons, what about using computer vision \
                     with existing CCTV cameras for position tracking?",
                    CommentType::Alternative,
                    6,
                    loaded_at - Duration::days(1),
                ),
            ],
        },
        Project {
            id: "2".to_string(),
            title: "Solar Panel Cleaning Robot".to_string(),
            description: "Autonomous robot for maintaining solar panel efficiency.".to_string(),
            author: "Rahul Gupta".to_string(),
            phase: ProjectPhase::Ideation,
            skills_needed: strings(&["Arduino", "CAD", "Mechanical"]),
            likes: 31,
            comments_count: 12,
            category: "Mechanical".to_string(),
            collaborators: 1,
            timeline: Vec::new(),
            discussion: Vec::new(),
        },
        Project {
            id: "3".to_string(),
            title: "Voice-Controlled Home Automation".to_string(),
            description: "Hindi voice commands for smart home control.".to_string(),
            author: "Ananya Singh".to_string(),
            phase: ProjectPhase::Completed,
            skills_needed: strings(&["Python", "ML", "Electronics"]),
            likes: 45,
            comments_count: 18,
            category: "Electronics".to_string(),
            collaborators: 2,
            timeline: Vec::new(),
            discussion: Vec::new(),
        },
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            author: "Priya Sharma".to_string(),
            content: "Completed beacon integration! See demo below.".to_string(),
            media: vec![
                Media::image("https://images.unsplash.com/photo-1506744038136-46273834b3fb"),
                Media::video("https://www.w3schools.com/html/mov_bbb.mp4"),
            ],
            comments: vec![
                comment(
                    "c1",
                    "Rahul Gupta",
                    "Great work!",
                    CommentType::General,
                    0,
                    utc(2025, 7, 30, 10),
                ),
                comment(
                    "c2",
                    "Sneha Patel",
                    "Can you share the code?",
                    CommentType::General,
                    0,
                    utc(2025, 7, 30, 11),
                ),
            ],
            created_at: utc(2025, 7, 30, 9),
        },
        Post {
            id: "2".to_string(),
            author: "Ananya Singh".to_string(),
            content: "Started testing phase. Found some bugs in navigation.".to_string(),
            media: Vec::new(),
            comments: vec![comment(
                "c3",
                "Priya Sharma",
                "Let me help!",
                CommentType::General,
                0,
                utc(2025, 7, 29, 15),
            )],
            created_at: utc(2025, 7, 29, 14),
        },
    ]
}

fn portfolio(
    id: &str,
    title: &str,
    description: &str,
    status: PortfolioStatus,
    technologies: &[&str],
) -> PortfolioProject {
    PortfolioProject {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        technologies: strings(technologies),
        image: None,
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "Priya Sharma".to_string(),
        email: "priya.sharma@example.com".to_string(),
        bio: "Final year Computer Science student passionate about IoT and mobile development. \
              Love solving real-world problems through technology."
            .to_string(),
        karma_score: 2847,
        badge: "Top 10% Helper".to_string(),
        skills: strings(&[
            "React Native",
            "Python",
            "IoT",
            "Machine Learning",
            "Arduino",
            "Node.js",
        ]),
        achievements: strings(&[
            "Hackathon Winner 2023",
            "Best Innovation Award",
            "Community Helper",
        ]),
        projects: vec![
            portfolio(
                "1",
                "Smart Campus Navigation",
                "IoT-based indoor navigation system for university campus",
                PortfolioStatus::Ongoing,
                &["React Native", "IoT", "Python"],
            ),
            portfolio(
                "2",
                "Expense Tracker App",
                "Personal finance management app with voice input support",
                PortfolioStatus::Completed,
                &["React Native", "Node.js", "MongoDB"],
            ),
            portfolio(
                "3",
                "Weather Monitoring System",
                "Arduino-based weather station with cloud integration",
                PortfolioStatus::Completed,
                &["Arduino", "Python", "AWS"],
            ),
            portfolio(
                "4",
                "AI Chatbot for Education",
                "Multilingual chatbot to help students with course queries",
                PortfolioStatus::Paused,
                &["Python", "NLP", "TensorFlow"],
            ),
        ],
    }
}

pub fn skill_catalog() -> SkillCatalog {
    let groups: [(&str, &[&str]); 6] = [
        ("Programming", &["Python", "JavaScript", "Java", "C++"]),
        ("Web Development", &["React", "Node.js", "HTML/CSS", "Express"]),
        ("Mobile Development", &["React Native", "Flutter", "Android"]),
        ("Data Science", &["Machine Learning", "TensorFlow", "Pandas", "Numpy"]),
        ("Hardware", &["Arduino", "Raspberry Pi", "IoT", "Electronics"]),
        ("Design", &["UI/UX", "Figma", "Photoshop", "Illustrator"]),
    ];
    SkillCatalog {
        categories: groups
            .iter()
            .map(|(name, skills)| SkillCategory {
                name: name.to_string(),
                skills: strings(skills),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seeded_ids_are_unique() {
        let projects = projects(Utc::now());
        let ids: HashSet<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());

        let posts = posts();
        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn seeded_profile_skills_are_unique() {
        let profile = profile();
        let skills: HashSet<_> = profile.skills.iter().collect();
        assert_eq!(skills.len(), profile.skills.len());
    }

    #[test]
    fn seeded_post_timestamps_match_feed() {
        let posts = posts();
        assert_eq!(posts[0].created_at.to_rfc3339(), "2025-07-30T09:00:00+00:00");
        assert_eq!(posts[1].created_at.to_rfc3339(), "2025-07-29T14:00:00+00:00");
    }

    #[test]
    fn catalog_lists_hardware_skills() {
        let catalog = skill_catalog();
        let hardware = catalog.category("Hardware").expect("hardware category");
        assert!(hardware.skills.iter().any(|s| s == "Raspberry Pi"));
        assert!(catalog.category("COBOL").is_none());
    }
}
