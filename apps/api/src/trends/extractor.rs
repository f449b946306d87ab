//! Heuristic extractor — turns the article HTML into skill and technology records.
//!
//! Pure and side-effect free so it can be exercised against fixed HTML. The
//! result is partial: the service patches short lists with fallback data.
//! The heuristics are tied to the structure of the upstream article, which can
//! change without notice.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::errors::ExtractionError;
use crate::trends::models::{EmergingTechRecord, SkillRecord};
use crate::trends::tables::{
    estimate_difficulty, estimate_time_to_learn, suggest_courses, tech_description,
    tech_growth, tech_industries, tech_maturity,
};

pub const DEFAULT_ARTICLE_TITLE: &str = "8 High-Income Skills to Learn in 2025";
pub const UNKNOWN_DATE: &str = "Unknown";
pub const DEFAULT_SALARY: &str = "Varies";
pub const DEFAULT_GROWTH: &str = "Growing field";

/// Below this many heading-derived skills, paragraphs are scanned as well.
const MIN_HEADING_SKILLS: usize = 4;
const MIN_DESCRIPTION_CHARS: usize = 30;
const MAX_DESCRIPTION_CHARS: usize = 300;
/// Exclusive bounds on paragraph length for the paragraph scan.
const PARAGRAPH_CHARS: (usize, usize) = (100, 500);
const EMERGING_LOOKAHEAD: usize = 5;

static UPDATED_ON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Updated on ([A-Za-z]+ \d+, \d{4})").expect("valid regex"));

static SKILL_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(software|user|development|programming|design|marketing|data|science|analysis|management|writing|AI|sales|coding|blockchain|cyber|security)\b",
    )
    .expect("valid regex")
});

const HEADING_EXCLUSIONS: &[&str] = &["What are", "How to", "Bottom line"];

static SALARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$[\d,]+(\sto\s\$[\d,]+)?(\sper\s(year|hour))?").expect("valid regex")
});

static GROWTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+%\sgrowth)|(\d+%\sexpected\sgrowth)|(grow(ing)?\sby\s\d+%)")
        .expect("valid regex")
});

static SKILL_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(software development|web development|digital marketing|UX/UI design|data analysis|project management|copywriting|sales|blockchain|cybersecurity|artificial intelligence|machine learning|cloud computing)\b",
    )
    .expect("valid regex")
});

static EMERGING_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)emerging|future|upcoming|next-gen|cutting-edge|innovative")
        .expect("valid regex")
});

static TECH_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(blockchain|quantum computing|ar/vr|virtual reality|augmented reality|metaverse|neural interfaces|internet of things|iot|green tech|sustainable technology|biotechnology|robotics|automation|3d printing|edge computing)\b",
    )
    .expect("valid regex")
});

/// What the article yielded before any fallback patching.
#[derive(Debug, Clone)]
pub struct PartialDataset {
    pub article_title: String,
    pub last_updated: String,
    pub skills: Vec<SkillRecord>,
    /// `None` when no emerging-technology heading produced a name.
    pub emerging_technologies: Option<Vec<EmergingTechRecord>>,
}

/// Runs every extraction pass over `html`.
pub fn extract(html: &str) -> Result<PartialDataset, ExtractionError> {
    let document = Html::parse_document(html);

    let article_title =
        extract_title(&document)?.unwrap_or_else(|| DEFAULT_ARTICLE_TITLE.to_string());
    let last_updated =
        extract_last_updated(&document)?.unwrap_or_else(|| UNKNOWN_DATE.to_string());

    let mut skills = extract_heading_skills(&document)?;
    if skills.len() < MIN_HEADING_SKILLS {
        extract_paragraph_skills(&document, &mut skills)?;
    }

    let emerging_technologies = match extract_emerging_technologies(&document) {
        Ok(techs) if !techs.is_empty() => Some(techs),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Emerging technology scan failed: {e}");
            None
        }
    };

    Ok(PartialDataset {
        article_title,
        last_updated,
        skills,
        emerging_technologies,
    })
}

/// Builds a record for `name`, deriving the classification fields from the name.
pub fn derive_skill(name: &str, description: String, salary: String, growth: String) -> SkillRecord {
    SkillRecord {
        name: name.to_string(),
        description,
        salary,
        growth,
        difficulty: estimate_difficulty(name),
        time_to_learn: estimate_time_to_learn(name).to_string(),
        courses: suggest_courses(name),
        bg_gradient: None,
    }
}

fn derive_technology(name: &str) -> EmergingTechRecord {
    EmergingTechRecord {
        name: name.to_string(),
        description: tech_description(name),
        growth: tech_growth(name),
        maturity: tech_maturity(name),
        industries: tech_industries(name),
        bg_gradient: None,
    }
}

fn selector(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|e| ExtractionError::Selector(format!("{css}: {e}")))
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn is_heading(element: &ElementRef<'_>) -> bool {
    matches!(element.value().name(), "h2" | "h3")
}

/// Following element siblings, skipping text and comment nodes.
fn next_elements<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.next_siblings().filter_map(ElementRef::wrap)
}

/// First 300 characters, with an ellipsis when cut.
fn truncate_description(text: &str) -> String {
    if text.chars().count() > MAX_DESCRIPTION_CHARS {
        let cut: String = text.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn extract_title(document: &Html) -> Result<Option<String>, ExtractionError> {
    let h1 = selector("h1")?;
    Ok(document
        .select(&h1)
        .next()
        .map(|e| element_text(&e))
        .filter(|t| !t.is_empty()))
}

fn extract_last_updated(document: &Html) -> Result<Option<String>, ExtractionError> {
    let body = selector("body")?;
    let text: String = document
        .select(&body)
        .next()
        .map(|b| b.text().collect())
        .unwrap_or_default();

    Ok(UPDATED_ON_RE
        .captures(&text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string()))
}

fn is_skill_heading(title: &str) -> bool {
    SKILL_HEADING_RE.is_match(title) && !HEADING_EXCLUSIONS.iter().any(|x| title.contains(x))
}

fn extract_heading_skills(document: &Html) -> Result<Vec<SkillRecord>, ExtractionError> {
    let headings = selector("h2, h3")?;
    let mut skills = Vec::new();

    for heading in document.select(&headings) {
        let title = element_text(&heading);
        if !is_skill_heading(&title) {
            continue;
        }

        let mut description: Option<String> = None;
        let mut salary: Option<String> = None;
        let mut growth: Option<String> = None;

        for sibling in next_elements(&heading).take_while(|e| !is_heading(e)) {
            let text = element_text(&sibling);

            if salary.is_none() {
                salary = SALARY_RE.find(&text).map(|m| m.as_str().to_string());
            }
            if growth.is_none() {
                growth = GROWTH_RE.find(&text).map(|m| m.as_str().to_string());
            }
            if description.is_none() && text.chars().count() > MIN_DESCRIPTION_CHARS {
                description = Some(truncate_description(&text));
            }
        }

        // Headings without a proper description are not skills.
        if let Some(description) = description {
            skills.push(derive_skill(
                &title,
                description,
                salary.unwrap_or_else(|| DEFAULT_SALARY.to_string()),
                growth.unwrap_or_else(|| DEFAULT_GROWTH.to_string()),
            ));
        }
    }

    Ok(skills)
}

fn extract_paragraph_skills(
    document: &Html,
    skills: &mut Vec<SkillRecord>,
) -> Result<(), ExtractionError> {
    let paragraphs = selector("p")?;
    let (min_chars, max_chars) = PARAGRAPH_CHARS;

    for paragraph in document.select(&paragraphs) {
        let text = element_text(&paragraph);
        let length = text.chars().count();
        if !text.contains("skill") || length <= min_chars || length >= max_chars {
            continue;
        }

        for phrase in SKILL_PHRASE_RE.find_iter(&text) {
            let name = phrase.as_str();
            if skills.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
                continue;
            }
            skills.push(derive_skill(
                name,
                truncate_description(&text),
                DEFAULT_SALARY.to_string(),
                DEFAULT_GROWTH.to_string(),
            ));
        }
    }

    Ok(())
}

fn extract_emerging_technologies(
    document: &Html,
) -> Result<Vec<EmergingTechRecord>, ExtractionError> {
    let headings = selector("h2, h3")?;
    let mut seen: HashSet<String> = HashSet::new();
    let mut technologies = Vec::new();

    for heading in document.select(&headings) {
        let title = element_text(&heading);
        if !EMERGING_HEADING_RE.is_match(&title) {
            continue;
        }

        for sibling in next_elements(&heading).take(EMERGING_LOOKAHEAD) {
            let text = element_text(&sibling);
            for tech in TECH_PHRASE_RE.find_iter(&text) {
                if seen.insert(tech.as_str().to_lowercase()) {
                    technologies.push(derive_technology(tech.as_str()));
                }
            }
        }
    }

    Ok(technologies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::models::{Difficulty, Maturity, TechGrowth};

    const ARTICLE: &str = r#"
        <html><body>
        <h1>8 High-Income Skills to Learn in 2025</h1>
        <p>Written by Coursera Staff • Updated on March 5, 2025</p>
        <h2>What are high-income skills and data?</h2>
        <p>High-income skills are abilities that command a strong salary in today's job market.</p>
        <h2>1. Software development</h2>
        <p>Software developers design, build, and maintain the programs that run on computers and phones.</p>
        <p>Median salary: $110,140 per year. The field expects 25% growth over the next decade.</p>
        <h3>2. Data analysis</h3>
        <p>Short.</p>
        <p>Analysts turn raw numbers into insight for decision makers across every industry.</p>
        <p>Average pay is $82,360 to $95,000 per year, growing by 23% through 2032.</p>
        <h2>3. UX design</h2>
        <p>tiny</p>
        <h2>4. Cybersecurity and security engineering</h2>
        <p>Security analysts protect networks from intrusions and respond to incidents as they happen.</p>
        <h2>Emerging technologies to watch</h2>
        <p>Quantum computing and IoT are reshaping research, while blockchain matures.</p>
        <p>Robotics keeps spreading through warehouses. More quantum computing news daily.</p>
        <h2>Bottom line on marketing</h2>
        <p>Keep learning new marketing skills to stay competitive in a crowded market of talent.</p>
        </body></html>
    "#;

    #[test]
    fn test_title_and_updated_date() {
        let partial = extract(ARTICLE).unwrap();
        assert_eq!(partial.article_title, "8 High-Income Skills to Learn in 2025");
        assert_eq!(partial.last_updated, "March 5, 2025");
    }

    #[test]
    fn test_missing_title_and_date_use_defaults() {
        let partial = extract("<html><body><p>nothing here</p></body></html>").unwrap();
        assert_eq!(partial.article_title, DEFAULT_ARTICLE_TITLE);
        assert_eq!(partial.last_updated, UNKNOWN_DATE);
        assert!(partial.skills.is_empty());
        assert!(partial.emerging_technologies.is_none());
    }

    #[test]
    fn test_heading_skills_accepted_in_document_order() {
        let partial = extract(ARTICLE).unwrap();
        let names: Vec<&str> = partial.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "1. Software development",
                "2. Data analysis",
                "4. Cybersecurity and security engineering",
            ]
        );
    }

    #[test]
    fn test_excluded_and_description_less_headings_are_skipped() {
        let partial = extract(ARTICLE).unwrap();
        assert!(!partial.skills.iter().any(|s| s.name.contains("What are")));
        assert!(!partial.skills.iter().any(|s| s.name.contains("Bottom line")));
        assert!(!partial.skills.iter().any(|s| s.name.contains("UX design")));
    }

    #[test]
    fn test_salary_growth_and_description_extraction() {
        let partial = extract(ARTICLE).unwrap();
        let software = &partial.skills[0];
        assert_eq!(software.salary, "$110,140 per year");
        assert_eq!(software.growth, "25% growth");
        assert!(software.description.starts_with("Software developers design"));
        assert_eq!(software.difficulty, Difficulty::High);
        assert_eq!(software.time_to_learn, "6-12 months");
        assert_eq!(software.courses[0], "Computer Science Fundamentals");

        let data = &partial.skills[1];
        assert_eq!(data.salary, "$82,360 to $95,000 per year");
        assert_eq!(data.growth, "growing by 23%");
        assert!(data.description.starts_with("Analysts turn raw numbers"));
    }

    #[test]
    fn test_missing_salary_and_growth_default() {
        let partial = extract(ARTICLE).unwrap();
        let security = &partial.skills[2];
        assert_eq!(security.salary, DEFAULT_SALARY);
        assert_eq!(security.growth, DEFAULT_GROWTH);
    }

    #[test]
    fn test_sibling_walk_stops_at_next_heading() {
        let html = r#"<body>
            <h2>Project management</h2>
            <p>Too short to count.</p>
            <h3>Unrelated heading</h3>
            <p>This paragraph is long enough to be a description but belongs elsewhere.</p>
        </body>"#;
        let partial = extract(html).unwrap();
        assert!(partial.skills.is_empty());
    }

    #[test]
    fn test_long_description_truncated_with_ellipsis() {
        let long = "a".repeat(400);
        let html = format!("<body><h2>Sales</h2><p>{long}</p></body>");
        let partial = extract(&html).unwrap();
        let description = &partial.skills[0].description;
        assert_eq!(description.chars().count(), 303);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_paragraph_scan_when_headings_are_sparse() {
        let html = r#"<body>
            <h2>Sales</h2>
            <p>Closers who sell with words are in demand at agencies and startups alike.</p>
            <p>Employers keep asking for one skill above all: Machine Learning, closely followed by cybersecurity and sales talent across many industries today.</p>
        </body>"#;
        let partial = extract(html).unwrap();
        let names: Vec<&str> = partial.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Sales", "Machine Learning", "cybersecurity"]);

        let ml = &partial.skills[1];
        assert_eq!(ml.difficulty, Difficulty::VeryHigh);
        assert_eq!(ml.salary, DEFAULT_SALARY);
        assert!(ml.description.starts_with("Employers keep asking"));
    }

    #[test]
    fn test_paragraph_scan_skipped_with_enough_heading_skills() {
        let body: String = ["Software", "Data science", "Marketing", "Sales"]
            .iter()
            .map(|h| format!("<h2>{h}</h2><p>A sufficiently long description for {h} goes here.</p>"))
            .collect();
        let html = format!(
            "<body>{body}<p>This skill paragraph mentions blockchain and is comfortably longer than one hundred characters overall.</p></body>"
        );
        let partial = extract(&html).unwrap();
        assert_eq!(partial.skills.len(), 4);
        assert!(!partial.skills.iter().any(|s| s.name == "blockchain"));
    }

    #[test]
    fn test_emerging_technologies_deduplicated_with_lookups() {
        let partial = extract(ARTICLE).unwrap();
        let techs = partial.emerging_technologies.unwrap();
        let names: Vec<&str> = techs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Quantum computing", "IoT", "blockchain", "Robotics"]);

        assert_eq!(techs[0].maturity, Maturity::Early);
        assert_eq!(techs[0].growth, TechGrowth::Medium);
        assert_eq!(techs[1].growth, TechGrowth::High);
        assert_eq!(
            techs[2].industries,
            vec!["Finance", "Supply Chain", "Healthcare"]
        );
    }

    #[test]
    fn test_emerging_lookahead_limited_to_five_siblings() {
        let filler = "<p>filler</p>".repeat(5);
        let html = format!(
            "<body><h2>Future tech</h2>{filler}<p>Robotics</p></body>"
        );
        let partial = extract(&html).unwrap();
        assert!(partial.emerging_technologies.is_none());
    }
}
