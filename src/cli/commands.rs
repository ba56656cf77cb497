use chrono::NaiveDate;

use crate::app::{ConcordError, KnowledgeBase, Result};

pub fn show_commentary(kb: &KnowledgeBase, book: &str, chapter: u32, verse: u32) -> Result<()> {
    match kb.resolve_commentary(book, chapter, verse) {
        Some(commentary) => {
            println!("{} {}:{}", book, chapter, verse);
            println!("Source: {} ({})", commentary.source, commentary.author);
            println!();
            println!("{}", commentary.text);
        }
        None => {
            println!("No commentary available for {} {}:{}", book, chapter, verse);
        }
    }
    Ok(())
}

pub fn list_collections(kb: &KnowledgeBase) -> Result<()> {
    for collection in kb.catalog.collections() {
        println!("{}  {} ({} verses)", collection.slug, collection.name, collection.len());
    }
    Ok(())
}

pub fn show_collection(
    kb: &KnowledgeBase,
    slug: &str,
    theme: Option<&str>,
    stats: bool,
) -> Result<()> {
    let collection = kb
        .catalog
        .collection(slug)
        .ok_or_else(|| ConcordError::CollectionNotFound(slug.to_string()))?;

    if stats {
        let stats = collection.stats();
        println!("{}", collection.name);
        println!("  verses: {}", stats.verse_count);
        println!("  books:  {}", stats.book_count);
        println!("  themes: {}", stats.themes.join(", "));
        println!(
            "  testament split: {} OT / {} NT",
            stats.old_testament, stats.new_testament
        );
        return Ok(());
    }

    let verses: Vec<_> = match theme {
        Some(theme) => collection.filter_by_theme(theme),
        None => collection.verses().iter().collect(),
    };
    for verse in verses {
        println!("{} [{}]", verse.reference, verse.theme);
        println!("  {}", verse.text);
    }
    Ok(())
}

pub fn list_topics(kb: &KnowledgeBase) -> Result<()> {
    for topic in kb.topics.all() {
        println!("{}  {} ({} verses)", topic.slug, topic.name, topic.verse_count);
    }
    Ok(())
}

pub fn show_topic(kb: &KnowledgeBase, slug: &str, include_verses: bool) -> Result<()> {
    let topic = kb
        .topic(slug, include_verses)
        .ok_or_else(|| ConcordError::TopicNotFound(slug.to_string()))?;

    println!("{} ({} verses)", topic.name, topic.verse_count);
    println!("{}", topic.description);
    if !topic.related.is_empty() {
        println!("Related: {}", topic.related.join(", "));
    }
    if let Some(verses) = topic.verses {
        println!();
        for verse in verses {
            println!("{} [{}]", verse.reference, verse.theme);
            println!("  {}", verse.text);
        }
    }
    Ok(())
}

pub fn show_daily(kb: &KnowledgeBase, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    match kb.verse_of_the_day(date) {
        Some(daily) => {
            println!("Verse of the day for {}:", date);
            println!("{} [{}]", daily.verse.reference, daily.verse.theme);
            println!("  {}", daily.verse.text);
        }
        None => println!("The rotation list is empty"),
    }
    Ok(())
}

pub fn show_outline(kb: &KnowledgeBase, book: &str, chapter: Option<u32>) -> Result<()> {
    let outline = kb
        .outline(book)
        .ok_or_else(|| ConcordError::OutlineNotFound(book.to_string()))?;

    match chapter {
        Some(chapter) => match outline.section_for_chapter(chapter) {
            Some(section) => {
                println!("{} {}: {}", outline.book_name, section.chapters, section.title);
                println!("  {}", section.description);
            }
            None => println!("No outline section covers {} {}", outline.book_name, chapter),
        },
        None => {
            println!("{}", outline.book_name);
            for section in &outline.sections {
                println!("  {:>6}  {}", section.chapters, section.title);
            }
        }
    }
    Ok(())
}
