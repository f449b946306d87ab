//! The client's own dataset for when `/api/skills` itself is unreachable.
//! Six skills, where the server fallback carries eight.

use chrono::{DateTime, Utc};

use crate::trends::fallback::{fallback_technologies, skill, FALLBACK_TITLE};
use crate::trends::models::{iso_timestamp, Difficulty, SkillTrendsDataset};

pub fn local_fallback_dataset(now: DateTime<Utc>) -> SkillTrendsDataset {
    SkillTrendsDataset {
        article_title: FALLBACK_TITLE.to_string(),
        last_updated: iso_timestamp(now),
        skills: vec![
            skill(
                "Software Development",
                "Creating, testing, and maintaining software applications and systems.",
                "$110,140",
                "25%",
                Difficulty::High,
                "6-12 months",
                [
                    "Computer Science Fundamentals",
                    "Full-Stack Web Development",
                    "Mobile App Development",
                ],
            ),
            skill(
                "Data Science",
                "Extracting insights from complex data using statistics and machine learning.",
                "$100,910",
                "36%",
                Difficulty::High,
                "6-12 months",
                ["Data Analysis with Python", "Machine Learning", "Big Data Analytics"],
            ),
            skill(
                "Digital Marketing",
                "Promoting products/services through digital channels.",
                "$77,200",
                "10%",
                Difficulty::Medium,
                "3-6 months",
                ["SEO Fundamentals", "Social Media Marketing", "Content Marketing Strategy"],
            ),
            skill(
                "UX/UI Design",
                "Creating user-friendly and visually appealing digital experiences.",
                "$85,277",
                "13%",
                Difficulty::Medium,
                "4-8 months",
                ["User Experience Design", "UI Design Principles", "Prototyping and Wireframing"],
            ),
            skill(
                "Project Management",
                "Planning, executing, and overseeing projects from start to finish.",
                "$94,500",
                "7%",
                Difficulty::Medium,
                "3-6 months",
                ["Agile Project Management", "PMP Certification Prep", "Scrum Master Training"],
            ),
            skill(
                "Cybersecurity",
                "Protecting systems, networks, and programs from digital attacks.",
                "$103,590",
                "33%",
                Difficulty::High,
                "6-12 months",
                ["Network Security Fundamentals", "Ethical Hacking", "Security Compliance"],
            ),
        ],
        emerging_technologies: fallback_technologies(),
    }
}
