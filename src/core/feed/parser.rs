use chrono::Local;
use feed_rs::model::Entry;

use super::types::BlogPost;

pub const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed payload is empty")]
    EmptyPayload,
    #[error("feed parse error: {0}")]
    Xml(#[from] feed_rs::parser::ParseFeedError),
    #[error("feed document error: {0}")]
    Document(#[from] roxmltree::Error),
}

pub fn parse_posts(raw: &[u8]) -> Result<Vec<BlogPost>, FeedParseError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(FeedParseError::EmptyPayload);
    }

    let feed = feed_rs::parser::parse(trimmed)?;
    let creators = collect_entry_creators(trimmed)?;

    let posts = feed
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| post_from_entry(entry, creators.get(index).cloned().flatten()))
        .collect();

    Ok(posts)
}

fn post_from_entry(entry: &Entry, author: Option<String>) -> BlogPost {
    let title = entry
        .title
        .as_ref()
        .map(|text| text.content.clone())
        .unwrap_or_default();
    let description = entry
        .summary
        .as_ref()
        .map(|text| text.content.clone())
        .unwrap_or_default();
    let published_at = entry
        .published
        .or(entry.updated)
        .map(|timestamp| timestamp.with_timezone(&Local));

    BlogPost {
        title,
        description,
        published_at,
        author,
    }
}

// One slot per <item>/<entry> in document order, so the result aligns by
// index with the entries feed-rs produces. First dc:creator wins when an
// entry carries several.
fn collect_entry_creators(raw: &[u8]) -> Result<Vec<Option<String>>, FeedParseError> {
    let text = String::from_utf8_lossy(raw);
    let document = roxmltree::Document::parse(&text)?;
    let creators = document
        .descendants()
        .filter(|node| node.is_element() && matches!(node.tag_name().name(), "item" | "entry"))
        .map(|item| {
            item.children()
                .find(|child| child.has_tag_name((DUBLIN_CORE_NS, "creator")))
                .and_then(|creator| creator.text())
                .map(ToString::to_string)
        })
        .collect();

    Ok(creators)
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let mut index = 0;
    while index < raw.len() && raw[index].is_ascii_whitespace() {
        index += 1;
    }
    &raw[index..]
}
