// Skill Trends pipeline: fetch → extract → fallback → cache → respond.
// Extraction is pure and runs on the blocking pool; the service never fails a request.

pub mod cache;
pub mod extractor;
pub mod fallback;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod service;
pub mod tables;

pub use cache::{InMemoryTrendsCache, TrendsCache};
pub use fetcher::{HtmlFetcher, HttpHtmlFetcher};
pub use service::SkillTrendsService;
