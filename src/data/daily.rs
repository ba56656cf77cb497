use crate::data::v;
use crate::rotation::DailyVerse;

/// The verse-of-the-day rotation list, in rotation order. The month tag is
/// display metadata; selection is purely day-of-year based.
pub fn daily_rotation() -> Vec<DailyVerse> {
    fn d(
        month: u32,
        reference: &str,
        book: &str,
        book_slug: &str,
        chapter: u32,
        start: u32,
        end: Option<u32>,
        text: &str,
        theme: &str,
        theme_slug: &str,
    ) -> DailyVerse {
        DailyVerse {
            month,
            verse: v(reference, book, book_slug, chapter, start, end, text, theme, theme_slug),
        }
    }

    vec![
        d(
            1,
            "Lamentations 3:22\u{2013}23",
            "Lamentations",
            "lamentations",
            3,
            22,
            Some(23),
            "It is of the LORD\u{2019}s mercies that we are not consumed, because his compassions fail not. They are new every morning: great is thy faithfulness.",
            "Faithfulness",
            "gods-promises",
        ),
        d(
            1,
            "Jeremiah 29:11",
            "Jeremiah",
            "jeremiah",
            29,
            11,
            None,
            "For I know the thoughts that I think toward you, saith the LORD, thoughts of peace, and not of evil, to give you an expected end.",
            "Hope",
            "hope",
        ),
        d(
            2,
            "John 3:16",
            "John",
            "john",
            3,
            16,
            None,
            "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.",
            "Salvation",
            "salvation",
        ),
        d(
            2,
            "Romans 5:8",
            "Romans",
            "romans",
            5,
            8,
            None,
            "But God commendeth his love toward us, in that, while we were yet sinners, Christ died for us.",
            "Love",
            "love",
        ),
        d(
            3,
            "Philippians 4:13",
            "Philippians",
            "philippians",
            4,
            13,
            None,
            "I can do all things through Christ which strengtheneth me.",
            "Strength",
            "strength",
        ),
        d(
            3,
            "Joshua 1:9",
            "Joshua",
            "joshua",
            1,
            9,
            None,
            "Have not I commanded thee? Be strong and of a good courage; be not afraid, neither be thou dismayed: for the LORD thy God is with thee whithersoever thou goest.",
            "Courage",
            "courage",
        ),
        d(
            4,
            "John 11:25\u{2013}26",
            "John",
            "john",
            11,
            25,
            Some(26),
            "Jesus said unto her, I am the resurrection, and the life: he that believeth in me, though he were dead, yet shall he live: And whosoever liveth and believeth in me shall never die.",
            "Resurrection",
            "eternal-life",
        ),
        d(
            4,
            "Ephesians 2:8\u{2013}9",
            "Ephesians",
            "ephesians",
            2,
            8,
            Some(9),
            "For by grace are ye saved through faith; and that not of yourselves: it is the gift of God: Not of works, lest any man should boast.",
            "Grace",
            "grace",
        ),
        d(
            5,
            "Proverbs 3:5\u{2013}6",
            "Proverbs",
            "proverbs",
            3,
            5,
            Some(6),
            "Trust in the LORD with all thine heart; and lean not unto thine own understanding. In all thy ways acknowledge him, and he shall direct thy paths.",
            "Trust",
            "trust",
        ),
        d(
            5,
            "Psalm 119:105",
            "Psalms",
            "psalms",
            119,
            105,
            None,
            "Thy word is a lamp unto my feet, and a light unto my path.",
            "Guidance",
            "wisdom",
        ),
        d(
            6,
            "Philippians 4:6\u{2013}7",
            "Philippians",
            "philippians",
            4,
            6,
            Some(7),
            "Be careful for nothing; but in every thing by prayer and supplication with thanksgiving let your requests be made known unto God. And the peace of God, which passeth all understanding, shall keep your hearts and minds through Christ Jesus.",
            "Peace",
            "peace",
        ),
        d(
            6,
            "Matthew 11:28",
            "Matthew",
            "matthew",
            11,
            28,
            None,
            "Come unto me, all ye that labour and are heavy laden, and I will give you rest.",
            "Rest",
            "comfort",
        ),
        d(
            7,
            "Isaiah 40:31",
            "Isaiah",
            "isaiah",
            40,
            31,
            None,
            "But they that wait upon the LORD shall renew their strength; they shall mount up with wings as eagles; they shall run, and not be weary; and they shall walk, and not faint.",
            "Renewed Strength",
            "strength",
        ),
        d(
            8,
            "Psalm 23:1",
            "Psalms",
            "psalms",
            23,
            1,
            None,
            "The LORD is my shepherd; I shall not want.",
            "Provision",
            "trust",
        ),
        d(
            9,
            "Matthew 6:33",
            "Matthew",
            "matthew",
            6,
            33,
            None,
            "But seek ye first the kingdom of God, and his righteousness; and all these things shall be added unto you.",
            "Priorities",
            "faith",
        ),
        d(
            10,
            "Romans 8:38\u{2013}39",
            "Romans",
            "romans",
            8,
            38,
            Some(39),
            "For I am persuaded, that neither death, nor life, nor angels, nor principalities, nor powers, nor things present, nor things to come, Nor height, nor depth, nor any other creature, shall be able to separate us from the love of God, which is in Christ Jesus our Lord.",
            "Eternal Love",
            "love",
        ),
        d(
            11,
            "1 Thessalonians 5:18",
            "1 Thessalonians",
            "1-thessalonians",
            5,
            18,
            None,
            "In every thing give thanks: for this is the will of God in Christ Jesus concerning you.",
            "Thankfulness",
            "gratitude",
        ),
        d(
            12,
            "Isaiah 9:6",
            "Isaiah",
            "isaiah",
            9,
            6,
            None,
            "For unto us a child is born, unto us a son is given: and the government shall be upon his shoulder: and his name shall be called Wonderful, Counsellor, The mighty God, The everlasting Father, The Prince of Peace.",
            "Promise",
            "jesus",
        ),
    ]
}
