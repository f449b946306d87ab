//! Fixed datasets used when the article is unreachable or too thin.

use crate::trends::models::{
    Difficulty, EmergingTechRecord, Maturity, SkillRecord, SkillTrendsDataset, TechGrowth,
};

pub const FALLBACK_TITLE: &str = "High-Income Skills to Learn in 2025";
pub const FALLBACK_DATE: &str = "January 1, 2025";

/// Minimum skill count of any dataset the service hands out.
pub const MIN_SKILLS: usize = 6;

pub(crate) fn skill(
    name: &str,
    description: &str,
    salary: &str,
    growth: &str,
    difficulty: Difficulty,
    time_to_learn: &str,
    courses: [&str; 3],
) -> SkillRecord {
    SkillRecord {
        name: name.to_string(),
        description: description.to_string(),
        salary: salary.to_string(),
        growth: growth.to_string(),
        difficulty,
        time_to_learn: time_to_learn.to_string(),
        courses: courses.map(String::from),
        bg_gradient: None,
    }
}

pub(crate) fn technology(
    name: &str,
    description: &str,
    growth: TechGrowth,
    maturity: Maturity,
    industries: [&str; 3],
) -> EmergingTechRecord {
    EmergingTechRecord {
        name: name.to_string(),
        description: description.to_string(),
        growth,
        maturity,
        industries: industries.iter().map(|s| s.to_string()).collect(),
        bg_gradient: None,
    }
}

/// The eight high-income skills that back-fill thin scrapes.
pub fn fallback_skills() -> Vec<SkillRecord> {
    vec![
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
            [
                "Data Analysis with Python",
                "Machine Learning",
                "Big Data Analytics",
            ],
        ),
        skill(
            "Digital Marketing",
            "Promoting products/services through digital channels.",
            "$77,200",
            "10%",
            Difficulty::Medium,
            "3-6 months",
            [
                "SEO Fundamentals",
                "Social Media Marketing",
                "Content Marketing Strategy",
            ],
        ),
        skill(
            "UX/UI Design",
            "Creating user-friendly and visually appealing digital experiences.",
            "$85,277",
            "13%",
            Difficulty::Medium,
            "4-8 months",
            [
                "User Experience Design",
                "UI Design Principles",
                "Prototyping and Wireframing",
            ],
        ),
        skill(
            "Project Management",
            "Planning, executing, and overseeing projects from start to finish.",
            "$94,500",
            "7%",
            Difficulty::Medium,
            "3-6 months",
            [
                "Agile Project Management",
                "PMP Certification Prep",
                "Scrum Master Training",
            ],
        ),
        skill(
            "Cybersecurity",
            "Protecting systems, networks, and programs from digital attacks.",
            "$103,590",
            "33%",
            Difficulty::High,
            "6-12 months",
            [
                "Network Security Fundamentals",
                "Ethical Hacking",
                "Security Compliance",
            ],
        ),
        skill(
            "Cloud Computing",
            "Delivering computing services over the internet.",
            "$107,000",
            "15%",
            Difficulty::High,
            "4-8 months",
            [
                "AWS Certified Solutions Architect",
                "Microsoft Azure Fundamentals",
                "Google Cloud Platform",
            ],
        ),
        skill(
            "AI & Machine Learning",
            "Building systems that can learn from and make decisions based on data.",
            "$114,520",
            "40%",
            Difficulty::VeryHigh,
            "8-14 months",
            [
                "Deep Learning Specialization",
                "Natural Language Processing",
                "Computer Vision",
            ],
        ),
    ]
}

pub fn fallback_technologies() -> Vec<EmergingTechRecord> {
    vec![
        technology(
            "Blockchain Development",
            "Building decentralized applications and smart contracts.",
            TechGrowth::High,
            Maturity::Emerging,
            ["Finance", "Supply Chain", "Healthcare"],
        ),
        technology(
            "Quantum Computing",
            "Programming quantum computers to solve complex problems.",
            TechGrowth::Medium,
            Maturity::Early,
            ["Research", "Cryptography", "Pharmaceuticals"],
        ),
        technology(
            "AR/VR Development",
            "Creating immersive augmented and virtual reality experiences.",
            TechGrowth::High,
            Maturity::Growing,
            ["Gaming", "Education", "Real Estate"],
        ),
        technology(
            "Sustainable Technology",
            "Developing eco-friendly tech solutions.",
            TechGrowth::High,
            Maturity::Growing,
            ["Energy", "Manufacturing", "Transportation"],
        ),
    ]
}

/// Dataset served when the article cannot be fetched and nothing is cached.
pub fn fallback_dataset() -> SkillTrendsDataset {
    SkillTrendsDataset {
        article_title: FALLBACK_TITLE.to_string(),
        last_updated: FALLBACK_DATE.to_string(),
        skills: fallback_skills(),
        emerging_technologies: fallback_technologies(),
    }
}

/// Tops `skills` up with fallback skills when it holds fewer than six.
/// Scraped records keep their order; names already present are skipped.
pub fn merge_fallback_skills(skills: &mut Vec<SkillRecord>) {
    if skills.len() >= MIN_SKILLS {
        return;
    }

    let existing: Vec<String> = skills.iter().map(|s| s.name.to_lowercase()).collect();
    skills.extend(
        fallback_skills()
            .into_iter()
            .filter(|s| !existing.contains(&s.name.to_lowercase())),
    );
}
