use crate::topics::TopicDef;

/// The curated topic set. Verse keys point into the built-in collections.
pub fn builtin_topics() -> Vec<TopicDef> {
    fn t(
        slug: &str,
        name: &str,
        description: &str,
        verse_keys: &[&str],
        related: &[&str],
    ) -> TopicDef {
        TopicDef {
            slug: slug.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            verse_keys: verse_keys.iter().map(|k| k.to_string()).collect(),
            related: related.iter().map(|r| r.to_string()).collect(),
        }
    }

    vec![
        t(
            "peace",
            "Peace",
            "What the Bible says about the peace of God: peace that guards the heart in anxious circumstances, and peace as Christ's parting gift.",
            &["philippians-4-6", "john-14-27", "isaiah-26-3"],
            &["trust", "courage"],
        ),
        t(
            "trust",
            "Trust",
            "Verses on trusting God rather than circumstances, from the psalmist's resolve in fear to Jesus' teaching against worry.",
            &["psalms-56-3", "matthew-6-25", "psalms-46-1"],
            &["peace", "strength"],
        ),
        t(
            "courage",
            "Courage",
            "Commands and promises that undergird courage: God's presence goes ahead of his people.",
            &["joshua-1-9", "deuteronomy-31-6", "2-timothy-1-7"],
            &["strength"],
        ),
        t(
            "strength",
            "Strength",
            "Strength that comes from God rather than self: renewed in waiting, made perfect in weakness.",
            &["isaiah-40-31", "2-corinthians-12-9", "philippians-4-13", "habakkuk-3-19"],
            &["courage", "trust"],
        ),
    ]
}
