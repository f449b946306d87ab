//! Dashboard-side helpers for ordering and linking skills.

use reqwest::Url;

use crate::trends::models::SkillRecord;

const COURSE_SEARCH_URL: &str = "https://www.coursera.org/search";

/// Coarse growth tier from a growth string: 3 above 30%, 2 above 15%, else 1.
/// Strings without a leading number ("Growing field") count as 1.
pub fn growth_indicator(growth: &str) -> u8 {
    let cleaned = growth.replace('%', "");
    let digits: String = cleaned
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u64>() {
        Ok(pct) if pct > 30 => 3,
        Ok(pct) if pct > 15 => 2,
        _ => 1,
    }
}

/// The first `n` skills by growth tier, keeping source order within a tier.
pub fn top_trending(skills: &[SkillRecord], n: usize) -> Vec<&SkillRecord> {
    let mut ranked: Vec<&SkillRecord> = skills.iter().collect();
    ranked.sort_by_key(|s| std::cmp::Reverse(growth_indicator(&s.growth)));
    ranked.truncate(n);
    ranked
}

/// Course search link for a skill or technology name.
pub fn course_search_url(name: &str) -> Option<String> {
    Url::parse_with_params(COURSE_SEARCH_URL, &[("query", name)])
        .ok()
        .map(|url| url.to_string())
}
