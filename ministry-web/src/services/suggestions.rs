//! Canned suggestions for the helper endpoints
//!
//! Scripture passages and advice per counseling topic, a starter sermon
//! outline, illustration ideas, and a draft apologetics response chosen by
//! the objection's category.

use std::collections::HashMap;

use ministry_common::fields::{Illustration, OutlineSection};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Counseling topics in display order
pub const COUNSELING_TOPICS: [&str; 12] = [
    "Marriage",
    "Family",
    "Grief",
    "Addiction",
    "Anxiety",
    "Depression",
    "Faith Crisis",
    "Relationships",
    "Career",
    "Financial Stewardship",
    "Forgiveness",
    "Guilt",
];

const DEFAULT_SCRIPTURES: &[&str] = &["John 3:16", "Romans 8:28", "Philippians 4:13"];

const DEFAULT_ADVICE: &str = "Seek wisdom from scripture and prayer. Consider professional counseling if needed.";

static SCRIPTURES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: [(&str, &[&str]); 12] = [
        ("Marriage", &["Ephesians 5:22-33", "Genesis 2:24", "1 Corinthians 7:1-16", "Proverbs 5:18-19"]),
        ("Family", &["Deuteronomy 6:6-9", "Ephesians 6:1-4", "Proverbs 22:6", "Psalm 127:3-5"]),
        ("Grief", &["Psalm 34:18", "Matthew 5:4", "John 11:35", "2 Corinthians 1:3-4", "Revelation 21:4"]),
        ("Addiction", &["1 Corinthians 10:13", "James 4:7", "Romans 6:16-18", "Galatians 5:1"]),
        ("Anxiety", &["Philippians 4:6-7", "Matthew 6:25-34", "1 Peter 5:7", "Isaiah 41:10"]),
        ("Depression", &["Psalm 42:11", "Isaiah 40:31", "Jeremiah 29:11", "Romans 8:38-39"]),
        ("Faith Crisis", &["Hebrews 11:1-6", "Mark 9:24", "2 Corinthians 5:7", "Romans 10:17"]),
        ("Relationships", &["John 13:34-35", "1 Corinthians 13:4-7", "Romans 12:18", "Ephesians 4:2-3"]),
        ("Career", &["Colossians 3:23-24", "Proverbs 16:3", "Jeremiah 29:11", "Philippians 4:13"]),
        ("Financial Stewardship", &["Malachi 3:10", "Proverbs 3:9-10", "Luke 16:10-12", "Matthew 6:24"]),
        ("Forgiveness", &["Matthew 6:14-15", "Ephesians 4:31-32", "Colossians 3:13", "Luke 23:34"]),
        ("Guilt", &["Romans 8:1", "Psalm 103:12", "1 John 1:9", "Isaiah 43:25"]),
    ];
    entries.into_iter().collect()
});

static ADVICE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Marriage", "Focus on communication, mutual respect, and spending quality time together."),
        ("Family", "Establish clear boundaries and expectations, and prioritize regular family time."),
        ("Grief", "Acknowledge the pain, allow time for healing, and seek support from community."),
        ("Addiction", "Recognize the problem, seek professional help, and develop healthy alternatives."),
        ("Anxiety", "Practice mindfulness, focus on what can be controlled, and establish routines."),
        ("Depression", "Seek professional help, maintain social connections, and engage in physical activity."),
        ("Faith Crisis", "Ask questions openly, study scripture, and connect with mature believers."),
        ("Relationships", "Practice active listening, express needs clearly, and resolve conflicts quickly."),
        ("Career", "Align work with values, maintain work-life balance, and seek continuous growth."),
        ("Financial Stewardship", "Create a budget, avoid debt, give generously, and save consistently."),
        ("Forgiveness", "Acknowledge hurt, choose to forgive, and focus on moving forward."),
        (
            "Guilt",
            "Distinguish between conviction and condemnation, practice self-forgiveness, and make amends when possible.",
        ),
    ])
});

/// Scripture suggestions for a counseling topic (exact name match)
pub fn scriptures_for_topic(topic: &str) -> &'static [&'static str] {
    SCRIPTURES.get(topic).copied().unwrap_or(DEFAULT_SCRIPTURES)
}

/// One-line advice for a counseling topic
pub fn advice_for_topic(topic: &str) -> &'static str {
    ADVICE.get(topic).copied().unwrap_or(DEFAULT_ADVICE)
}

/// Starter outline: introduction, three main points, conclusion
pub fn sermon_outline() -> Vec<OutlineSection> {
    let main_point = ["Explanation", "Scripture reference", "Application"];
    vec![
        OutlineSection::new("Introduction", &["Context of scripture", "Relevance today", "Main themes"]),
        OutlineSection::new("Main Point 1", &main_point),
        OutlineSection::new("Main Point 2", &main_point),
        OutlineSection::new("Main Point 3", &main_point),
        OutlineSection::new("Conclusion", &["Summary", "Call to action", "Final thought"]),
    ]
}

pub fn sermon_illustrations() -> Vec<Illustration> {
    vec![
        Illustration::new("Personal Story", "Share a personal experience related to the theme"),
        Illustration::new("Historical Example", "Reference a historical event that illustrates the theme"),
        Illustration::new("Modern Analogy", "Use a modern situation or technology as an analogy"),
    ]
}

/// Draft apologetics response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftResponse {
    pub title: String,
    pub response_text: String,
    pub scripture_references: String,
}

const ESCHATOLOGY_RESPONSE: &str = "The amillennial view interprets Revelation 20:1-6 symbolically rather than literally. \
The 'thousand years' represents Christ's current reign in the hearts of believers and in heaven. \
This interpretation is consistent with the highly symbolic nature of apocalyptic literature. \
Consider how Jesus himself frequently used parables and figurative language to describe the Kingdom of God. \
The amillennial view has strong historical support, being held by Augustine, Luther, Calvin, and many church fathers.";

const ISRAEL_RESPONSE: &str = "The amillennial view understands the church as the spiritual Israel, the fulfillment of God's promises to Abraham. \
This is not replacement theology but fulfillment theology. Paul explicitly states in Galatians 3:29, 'If you belong to Christ, \
then you are Abraham's seed, and heirs according to the promise.' The promises to ethnic Israel are ultimately fulfilled in Christ \
and the Church. Romans 9:6 clarifies, 'Not all who are descended from Israel are Israel.'";

const FRAMEWORK_RESPONSE: &str = "The amillennial interpretation offers a cohesive framework that harmonizes Scripture's teaching on Christ's kingdom. \
Rather than dividing God's redemptive plan into dispensations, amillennialism sees the unity of God's people across history. \
The apparent contradictions in premillennial and dispensational views are resolved when we understand apocalyptic literature \
in its proper context and recognize the already-not yet nature of God's kingdom.";

/// Draft a response keyed on the objection's category name
pub fn draft_response(objection_title: &str, category_name: &str) -> DraftResponse {
    let category = category_name.to_lowercase();
    let (text, references) = if category.contains("eschatology") {
        (ESCHATOLOGY_RESPONSE, "John 5:28-29, 2 Peter 3:10-13, Matthew 12:28")
    } else if category.contains("israel") {
        (ISRAEL_RESPONSE, "Romans 9:6-8, Galatians 3:7-9, Galatians 3:29, Romans 2:28-29")
    } else {
        (FRAMEWORK_RESPONSE, "Luke 17:20-21, Colossians 1:13-14, Hebrews 12:22-24")
    };

    DraftResponse {
        title: format!("Response to: {}", objection_title),
        response_text: text.to_string(),
        scripture_references: references.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_suggestions() {
        for topic in COUNSELING_TOPICS {
            assert_ne!(scriptures_for_topic(topic), DEFAULT_SCRIPTURES, "{}", topic);
            assert_ne!(advice_for_topic(topic), DEFAULT_ADVICE, "{}", topic);
        }
    }

    #[test]
    fn test_unknown_topic_defaults() {
        assert_eq!(scriptures_for_topic("grief"), DEFAULT_SCRIPTURES);
        assert_eq!(advice_for_topic("Vocation"), DEFAULT_ADVICE);
        assert_eq!(scriptures_for_topic("Grief").len(), 5);
    }

    #[test]
    fn test_outline_shape() {
        let outline = sermon_outline();
        let titles: Vec<_> = outline.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Introduction", "Main Point 1", "Main Point 2", "Main Point 3", "Conclusion"]
        );
        assert!(outline.iter().all(|s| s.points.len() == 3));
        assert_eq!(sermon_illustrations().len(), 3);
    }

    #[test]
    fn test_draft_response_by_category() {
        let draft = draft_response("A literal thousand years", "Eschatology");
        assert_eq!(draft.title, "Response to: A literal thousand years");
        assert!(draft.response_text.contains("Revelation 20:1-6"));

        let draft = draft_response("Land promises", "Israel and the Church");
        assert!(draft.scripture_references.contains("Galatians 3:29"));

        let draft = draft_response("Dispensations", "Biblical Interpretation");
        assert!(draft.scripture_references.starts_with("Luke 17:20-21"));
    }
}
