use crate::catalog::VerseCollection;
use crate::data::v;

/// The curated verse collections, in the order they are presented.
pub fn builtin_collections() -> Vec<VerseCollection> {
    vec![anxiety(), strength()]
}

fn anxiety() -> VerseCollection {
    VerseCollection::new(
        "anxiety",
        "Bible Verses About Anxiety",
        vec![
            v(
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
            v(
                "1 Peter 5:7",
                "1 Peter",
                "1-peter",
                5,
                7,
                None,
                "Casting all your care upon him; for he careth for you.",
                "Casting Care",
                "casting-care",
            ),
            v(
                "Matthew 6:25\u{2013}27",
                "Matthew",
                "matthew",
                6,
                25,
                Some(27),
                "Therefore I say unto you, Take no thought for your life, what ye shall eat, or what ye shall drink; nor yet for your body, what ye shall put on. Is not the life more than meat, and the body than raiment? Behold the fowls of the air: for they sow not, neither do they reap, nor gather into barns; yet your heavenly Father feedeth them. Are ye not much better than they? Which of you by taking thought can add one cubit unto his stature?",
                "Trust",
                "trust",
            ),
            v(
                "Isaiah 41:10",
                "Isaiah",
                "isaiah",
                41,
                10,
                None,
                "Fear thou not; for I am with thee: be not dismayed; for I am thy God: I will strengthen thee; yea, I will help thee; yea, I will uphold thee with the right hand of my righteousness.",
                "God's Presence",
                "gods-presence",
            ),
            v(
                "Psalm 55:22",
                "Psalms",
                "psalms",
                55,
                22,
                None,
                "Cast thy burden upon the LORD, and he shall sustain thee: he shall never suffer the righteous to be moved.",
                "Casting Care",
                "casting-care",
            ),
            v(
                "Psalm 94:19",
                "Psalms",
                "psalms",
                94,
                19,
                None,
                "In the multitude of my thoughts within me thy comforts delight my soul.",
                "Comfort",
                "comfort",
            ),
            v(
                "Psalm 34:4",
                "Psalms",
                "psalms",
                34,
                4,
                None,
                "I sought the LORD, and he heard me, and delivered me from all my fears.",
                "Deliverance",
                "deliverance",
            ),
            v(
                "Matthew 11:28\u{2013}30",
                "Matthew",
                "matthew",
                11,
                28,
                Some(30),
                "Come unto me, all ye that labour and are heavy laden, and I will give you rest. Take my yoke upon you, and learn of me; for I am meek and lowly in heart: and ye shall find rest unto your souls. For my yoke is easy, and my burden is light.",
                "Rest",
                "rest",
            ),
            v(
                "John 14:27",
                "John",
                "john",
                14,
                27,
                None,
                "Peace I leave with you, my peace I give unto you: not as the world giveth, give I unto you. Let not your heart be troubled, neither let it be afraid.",
                "Peace",
                "peace",
            ),
            v(
                "2 Timothy 1:7",
                "2 Timothy",
                "2-timothy",
                1,
                7,
                None,
                "For God hath not given us the spirit of fear; but of power, and of love, and of a sound mind.",
                "Courage",
                "courage",
            ),
            v(
                "Psalm 23:4",
                "Psalms",
                "psalms",
                23,
                4,
                None,
                "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me.",
                "God's Presence",
                "gods-presence",
            ),
            v(
                "Proverbs 12:25",
                "Proverbs",
                "proverbs",
                12,
                25,
                None,
                "Heaviness in the heart of man maketh it stoop: but a good word maketh it glad.",
                "Encouragement",
                "encouragement",
            ),
            v(
                "Isaiah 26:3",
                "Isaiah",
                "isaiah",
                26,
                3,
                None,
                "Thou wilt keep him in perfect peace, whose mind is stayed on thee: because he trusteth in thee.",
                "Peace",
                "peace",
            ),
            v(
                "Psalm 46:1\u{2013}2",
                "Psalms",
                "psalms",
                46,
                1,
                Some(2),
                "God is our refuge and strength, a very present help in trouble. Therefore will not we fear, though the earth be removed, and though the mountains be carried into the midst of the sea;",
                "Refuge",
                "refuge",
            ),
            v(
                "Psalm 56:3",
                "Psalms",
                "psalms",
                56,
                3,
                None,
                "What time I am afraid, I will trust in thee.",
                "Trust",
                "trust",
            ),
        ],
    )
}

fn strength() -> VerseCollection {
    VerseCollection::new(
        "strength",
        "Bible Verses About Strength in Hard Times",
        vec![
            v(
                "Isaiah 40:31",
                "Isaiah",
                "isaiah",
                40,
                31,
                None,
                "But they that wait upon the LORD shall renew their strength; they shall mount up with wings as eagles; they shall run, and not be weary; and they shall walk, and not faint.",
                "Renewed Strength",
                "renewed-strength",
            ),
            v(
                "2 Corinthians 12:9",
                "2 Corinthians",
                "2-corinthians",
                12,
                9,
                None,
                "And he said unto me, My grace is sufficient for thee: for my strength is made perfect in weakness. Most gladly therefore will I rather glory in my infirmities, that the power of Christ may rest upon me.",
                "Strength in Weakness",
                "strength-in-weakness",
            ),
            v(
                "Philippians 4:13",
                "Philippians",
                "philippians",
                4,
                13,
                None,
                "I can do all things through Christ which strengtheneth me.",
                "God's Power",
                "gods-power",
            ),
            v(
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
            v(
                "Deuteronomy 31:6",
                "Deuteronomy",
                "deuteronomy",
                31,
                6,
                None,
                "Be strong and of a good courage, fear not, nor be afraid of them: for the LORD thy God, he it is that doth go with thee; he will not fail thee, nor forsake thee.",
                "Courage",
                "courage",
            ),
            v(
                "Romans 8:28",
                "Romans",
                "romans",
                8,
                28,
                None,
                "And we know that all things work together for good to them that love God, to them who are the called according to his purpose.",
                "God's Promises",
                "gods-promises",
            ),
            v(
                "James 1:2\u{2013}3",
                "James",
                "james",
                1,
                2,
                Some(3),
                "My brethren, count it all joy when ye fall into divers temptations; Knowing this, that the trying of your faith worketh patience.",
                "Perseverance",
                "perseverance",
            ),
            v(
                "1 Peter 5:10",
                "1 Peter",
                "1-peter",
                5,
                10,
                None,
                "But the God of all grace, who hath called us unto his eternal glory by Christ Jesus, after that ye have suffered a while, make you perfect, stablish, strengthen, settle you.",
                "Perseverance",
                "perseverance",
            ),
            v(
                "Psalm 46:1",
                "Psalms",
                "psalms",
                46,
                1,
                None,
                "God is our refuge and strength, a very present help in trouble.",
                "Refuge",
                "refuge",
            ),
            v(
                "Habakkuk 3:19",
                "Habakkuk",
                "habakkuk",
                3,
                19,
                None,
                "The LORD God is my strength, and he will make my feet like hinds' feet, and he will make me to walk upon mine high places.",
                "God's Power",
                "gods-power",
            ),
        ],
    )
}
