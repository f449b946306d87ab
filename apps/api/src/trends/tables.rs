//! Keyword tables that classify scraped skills and emerging technologies.
//!
//! Each tier table is evaluated top to bottom; the first tier with a keyword
//! contained in the lower-cased name wins. Matching is plain substring
//! containment, so short keywords like "ai" also hit inside longer words.

use crate::trends::models::{Difficulty, Maturity, TechGrowth};

// ────────────────────────────────────────────────────────────────────────────
// Skill tables
// ────────────────────────────────────────────────────────────────────────────

pub const DIFFICULTY_TIERS: &[(Difficulty, &[&str])] = &[
    (
        Difficulty::VeryHigh,
        &["machine learning", "artificial intelligence", "ai", "quantum"],
    ),
    (
        Difficulty::High,
        &[
            "development",
            "programming",
            "software",
            "data",
            "cyber",
            "cloud",
            "blockchain",
        ],
    ),
    (
        Difficulty::Medium,
        &[
            "design",
            "management",
            "sales",
            "copywriting",
            "digital marketing",
            "project",
        ],
    ),
    (Difficulty::Low, &["writing", "social media", "marketing"]),
];

pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Cloud skills sit in their own tier so they resolve to "4-8 months" even
/// though they share the "High" difficulty tier with development skills.
pub const TIME_TO_LEARN_TIERS: &[(&str, &[&str])] = &[
    (
        "8-14 months",
        &["machine learning", "artificial intelligence", "ai", "quantum"],
    ),
    ("6-12 months", &["development", "programming", "data", "cyber"]),
    ("4-8 months", &["cloud"]),
    ("3-6 months", &["design", "marketing", "management", "project"]),
    ("2-4 months", &["writing", "social media", "sales"]),
];

pub const DEFAULT_TIME_TO_LEARN: &str = "4-8 months";

pub const COURSE_CATEGORIES: &[(&[&str], [&str; 3])] = &[
    (
        &["software", "development", "programming"],
        [
            "Computer Science Fundamentals",
            "Full-Stack Web Development",
            "Mobile App Development",
        ],
    ),
    (
        &["data", "analysis"],
        [
            "Data Analysis with Python",
            "SQL for Data Analysis",
            "Business Intelligence Tools",
        ],
    ),
    (
        &["machine learning", "ai", "artificial intelligence"],
        [
            "Machine Learning Foundations",
            "Deep Learning Specialization",
            "Natural Language Processing",
        ],
    ),
    (
        &["cloud"],
        [
            "AWS Certified Solutions Architect",
            "Microsoft Azure Fundamentals",
            "Google Cloud Platform",
        ],
    ),
    (
        &["cyber", "security"],
        [
            "Network Security Fundamentals",
            "Ethical Hacking",
            "Security Compliance",
        ],
    ),
    (
        &["design"],
        [
            "UI/UX Design Principles",
            "Web Design Fundamentals",
            "Design Thinking",
        ],
    ),
    (
        &["marketing"],
        [
            "Digital Marketing Fundamentals",
            "SEO & Content Marketing",
            "Social Media Strategy",
        ],
    ),
    (
        &["project", "management"],
        [
            "Project Management Fundamentals",
            "Agile Methodologies",
            "Leadership Skills",
        ],
    ),
    (
        &["blockchain"],
        [
            "Blockchain Fundamentals",
            "Smart Contract Development",
            "Cryptocurrency and Tokenomics",
        ],
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Emerging technology tables
// ────────────────────────────────────────────────────────────────────────────

/// Exact-key profile of a known technology (key is lower-case).
pub struct TechProfile {
    pub key: &'static str,
    pub description: &'static str,
    pub industries: [&'static str; 3],
}

pub const TECH_PROFILES: &[TechProfile] = &[
    TechProfile {
        key: "blockchain",
        description: "Building decentralized applications and smart contracts.",
        industries: ["Finance", "Supply Chain", "Healthcare"],
    },
    TechProfile {
        key: "quantum computing",
        description: "Programming quantum computers to solve complex problems.",
        industries: ["Research", "Cryptography", "Pharmaceuticals"],
    },
    TechProfile {
        key: "ar/vr",
        description: "Creating immersive augmented and virtual reality experiences.",
        industries: ["Gaming", "Education", "Real Estate"],
    },
    TechProfile {
        key: "virtual reality",
        description: "Developing fully immersive digital environments.",
        industries: ["Gaming", "Education", "Healthcare"],
    },
    TechProfile {
        key: "augmented reality",
        description: "Overlaying digital information on the physical world.",
        industries: ["Retail", "Manufacturing", "Tourism"],
    },
    TechProfile {
        key: "metaverse",
        description: "Building interconnected virtual worlds and experiences.",
        industries: ["Entertainment", "Social Media", "E-commerce"],
    },
    TechProfile {
        key: "neural interfaces",
        description: "Creating direct communication channels between brains and computers.",
        industries: ["Healthcare", "Military", "Gaming"],
    },
    TechProfile {
        key: "internet of things",
        description: "Connecting everyday objects to the internet for smarter functionality.",
        industries: ["Smart Homes", "Manufacturing", "Urban Planning"],
    },
    TechProfile {
        key: "iot",
        description: "Building networks of connected physical devices that collect and share data.",
        industries: ["Smart Homes", "Manufacturing", "Urban Planning"],
    },
    TechProfile {
        key: "green tech",
        description: "Developing environmentally friendly technological solutions.",
        industries: ["Energy", "Transportation", "Construction"],
    },
    TechProfile {
        key: "sustainable technology",
        description: "Creating tech solutions that meet present needs without compromising future resources.",
        industries: ["Energy", "Manufacturing", "Transportation"],
    },
    TechProfile {
        key: "biotechnology",
        description: "Using biological systems and organisms to develop products and technologies.",
        industries: ["Healthcare", "Agriculture", "Food Production"],
    },
    TechProfile {
        key: "robotics",
        description: "Designing and building robots and automated systems.",
        industries: ["Manufacturing", "Healthcare", "Logistics"],
    },
    TechProfile {
        key: "automation",
        description: "Creating self-operating systems to reduce human intervention.",
        industries: ["Manufacturing", "Customer Service", "Transportation"],
    },
    TechProfile {
        key: "3d printing",
        description: "Building objects layer by layer from digital designs.",
        industries: ["Manufacturing", "Healthcare", "Construction"],
    },
    TechProfile {
        key: "edge computing",
        description: "Processing data near the source rather than in a centralized cloud location.",
        industries: ["Telecommunications", "Autonomous Vehicles", "Smart Cities"],
    },
];

pub const DEFAULT_TECH_INDUSTRIES: [&str; 3] = ["Technology", "Various Industries", "Research"];

pub const TECH_GROWTH_TIERS: &[(TechGrowth, &[&str])] = &[
    (
        TechGrowth::High,
        &[
            "blockchain",
            "ar/vr",
            "virtual reality",
            "augmented reality",
            "metaverse",
            "green tech",
            "sustainable technology",
            "iot",
            "internet of things",
        ],
    ),
    (
        TechGrowth::Medium,
        &[
            "quantum computing",
            "neural interfaces",
            "robotics",
            "biotechnology",
            "3d printing",
            "edge computing",
        ],
    ),
];

pub const DEFAULT_TECH_GROWTH: TechGrowth = TechGrowth::Medium;

pub const MATURITY_TIERS: &[(Maturity, &[&str])] = &[
    (
        Maturity::Early,
        &["quantum computing", "neural interfaces", "metaverse"],
    ),
    (
        Maturity::Emerging,
        &["blockchain", "green tech", "biotechnology", "edge computing"],
    ),
    (
        Maturity::Growing,
        &[
            "ar/vr",
            "virtual reality",
            "augmented reality",
            "iot",
            "internet of things",
            "robotics",
            "automation",
            "3d printing",
            "sustainable technology",
        ],
    ),
];

pub const DEFAULT_MATURITY: Maturity = Maturity::Emerging;

// ────────────────────────────────────────────────────────────────────────────
// Lookups
// ────────────────────────────────────────────────────────────────────────────

/// Returns the first tier whose keyword list hits `name` (case-insensitive).
fn first_tier<T: Copy>(tiers: &[(T, &[&str])], name: &str) -> Option<T> {
    let lower = name.to_lowercase();
    tiers
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(tier, _)| *tier)
}

pub fn estimate_difficulty(skill_name: &str) -> Difficulty {
    first_tier(DIFFICULTY_TIERS, skill_name).unwrap_or(DEFAULT_DIFFICULTY)
}

pub fn estimate_time_to_learn(skill_name: &str) -> &'static str {
    first_tier(TIME_TO_LEARN_TIERS, skill_name).unwrap_or(DEFAULT_TIME_TO_LEARN)
}

/// Three suggested course names; unknown categories get generic names built
/// from the skill itself.
pub fn suggest_courses(skill_name: &str) -> [String; 3] {
    let lower = skill_name.to_lowercase();
    COURSE_CATEGORIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, courses)| courses.map(String::from))
        .unwrap_or_else(|| {
            [
                format!("{skill_name} Fundamentals"),
                format!("Advanced {skill_name}"),
                format!("{skill_name} Certification"),
            ]
        })
}

fn tech_profile(tech: &str) -> Option<&'static TechProfile> {
    let lower = tech.to_lowercase();
    TECH_PROFILES.iter().find(|p| p.key == lower)
}

pub fn tech_description(tech: &str) -> String {
    tech_profile(tech)
        .map(|p| p.description.to_string())
        .unwrap_or_else(|| format!("Developing innovative solutions with {tech} technology."))
}

pub fn tech_growth(tech: &str) -> TechGrowth {
    first_tier(TECH_GROWTH_TIERS, tech).unwrap_or(DEFAULT_TECH_GROWTH)
}

pub fn tech_maturity(tech: &str) -> Maturity {
    first_tier(MATURITY_TIERS, tech).unwrap_or(DEFAULT_MATURITY)
}

pub fn tech_industries(tech: &str) -> Vec<String> {
    tech_profile(tech)
        .map(|p| p.industries)
        .unwrap_or(DEFAULT_TECH_INDUSTRIES)
        .iter()
        .map(|s| s.to_string())
        .collect()
}
