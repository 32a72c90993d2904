//! Generated devotional content seam.
//!
//! The engine never blocks on content generation: the trait is
//! infallible by contract, and implementations degrade to a usable
//! templated fallback instead of erroring. Streak and plan mutations
//! commit whether or not a generator produced anything interesting.

use serde::{Deserialize, Serialize};

/// What kind of content is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Stand-alone devotional for the day.
    DailyDevotional,
    /// Content for one day of a multi-day plan.
    PlanDay,
    /// Short encouragement line (milestone celebrations).
    Encouragement,
}

/// Context handed to the generator; free-form hints, all optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentContext {
    pub theme: Option<String>,
    pub plan_id: Option<String>,
    pub day: Option<u32>,
    pub streak: Option<u32>,
}

/// Structured devotional content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub title: String,
    pub body: String,
    pub verse: Option<String>,
    /// True when this came from the built-in template bank rather
    /// than a live generator.
    pub is_fallback: bool,
}

/// Produces devotional content. Infallible: implementations return a
/// templated fallback on any internal failure.
pub trait ContentGenerator: Send {
    fn generate(&self, kind: ContentKind, context: &ContentContext) -> GeneratedContent;
}

/// Built-in fallback generator: deterministic rotation over a small
/// devotional bank, keyed by day/streak so repeated calls for the
/// same context produce the same text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

const VERSES: [&str; 5] = [
    "Psalm 46:10",
    "Philippians 4:6-7",
    "Isaiah 40:31",
    "Lamentations 3:22-23",
    "Matthew 6:34",
];

const REFLECTIONS: [&str; 5] = [
    "Be still for a moment and notice where today has already carried grace.",
    "Bring one worry into the open and set it down, without hurrying to pick it back up.",
    "Strength returns in waiting. What are you being asked to wait for?",
    "Mercies restart at dawn. Let yesterday's shortfall stay in yesterday.",
    "Today has enough in it. Attend to what is actually in front of you.",
];

impl TemplateGenerator {
    fn index_for(context: &ContentContext) -> usize {
        let seed = context.day.unwrap_or(0) + context.streak.unwrap_or(0);
        seed as usize % VERSES.len()
    }
}

impl ContentGenerator for TemplateGenerator {
    fn generate(&self, kind: ContentKind, context: &ContentContext) -> GeneratedContent {
        let idx = Self::index_for(context);
        let (title, body) = match kind {
            ContentKind::DailyDevotional => (
                "A moment of stillness".to_string(),
                REFLECTIONS[idx].to_string(),
            ),
            ContentKind::PlanDay => {
                let day = context.day.unwrap_or(1);
                (format!("Day {day}"), REFLECTIONS[idx].to_string())
            }
            ContentKind::Encouragement => {
                let streak = context.streak.unwrap_or(0);
                (
                    format!("{streak} days and counting"),
                    "Small faithfulness, repeated, becomes a life.".to_string(),
                )
            }
        };
        GeneratedContent {
            title,
            body,
            verse: Some(VERSES[idx].to_string()),
            is_fallback: true,
        }
    }
}
