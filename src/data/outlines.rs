use crate::outline::{BookOutline, OutlineSection};

/// Book outlines with chapter-range sections, as authored.
pub fn builtin_outlines() -> Vec<BookOutline> {
    fn outline(slug: &str, name: &str, sections: &[(&str, &str, &str)]) -> BookOutline {
        BookOutline {
            book_slug: slug.to_string(),
            book_name: name.to_string(),
            sections: sections
                .iter()
                .map(|(title, chapters, description)| OutlineSection::new(title, chapters, description))
                .collect(),
        }
    }

    vec![
        outline(
            "genesis",
            "Genesis",
            &[
                (
                    "Primeval History",
                    "1-11",
                    "Creation, the fall, the flood, and the nations.",
                ),
                (
                    "Abraham",
                    "12-25",
                    "The call of Abram, the covenant, and the birth of Isaac.",
                ),
                (
                    "Isaac and Jacob",
                    "26-36",
                    "The covenant line through Isaac's sons.",
                ),
                (
                    "Joseph",
                    "37-50",
                    "Joseph in Egypt and the preservation of Israel.",
                ),
            ],
        ),
        outline(
            "exodus",
            "Exodus",
            &[
                (
                    "Deliverance from Egypt",
                    "1-18",
                    "Bondage, the plagues, the Passover, and the Red Sea.",
                ),
                (
                    "Covenant at Sinai",
                    "19-24",
                    "The law given and the covenant sealed.",
                ),
                (
                    "The Tabernacle",
                    "25-40",
                    "Instructions, apostasy with the golden calf, and construction.",
                ),
            ],
        ),
        outline(
            "romans",
            "Romans",
            &[
                (
                    "The Righteousness of God",
                    "1-8",
                    "Sin, justification by faith, and life in the Spirit.",
                ),
                (
                    "Israel and the Gospel",
                    "9-11",
                    "God's faithfulness to his promises.",
                ),
                (
                    "Righteousness in Practice",
                    "12-16",
                    "Living sacrifices, love, and greetings.",
                ),
            ],
        ),
    ]
}
