use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DocumentId;
use super::validation::RequiredFields;
use crate::error::DomainError;

/// Blog categories - editors submit either one label or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    One(String),
    Many(Vec<String>),
}

impl Categories {
    /// True when no non-empty label is present.
    pub fn is_empty(&self) -> bool {
        match self {
            Categories::One(label) => label.is_empty(),
            Categories::Many(labels) => labels.iter().all(String::is_empty),
        }
    }
}

/// Publication date as submitted.
///
/// RFC 3339 timestamps are kept as dates; anything else an editor sends
/// (a bare `2025-04-01` from a date picker, a legacy string) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishDate {
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl From<DateTime<Utc>> for PublishDate {
    fn from(ts: DateTime<Utc>) -> Self {
        PublishDate::Timestamp(ts)
    }
}

/// Dates rank above text, as the document store orders mixed types.
impl Ord for PublishDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PublishDate::Timestamp(a), PublishDate::Timestamp(b)) => a.cmp(b),
            (PublishDate::Text(a), PublishDate::Text(b)) => a.cmp(b),
            (PublishDate::Timestamp(_), PublishDate::Text(_)) => Ordering::Greater,
            (PublishDate::Text(_), PublishDate::Timestamp(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for PublishDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// View counter as submitted: any JSON number, or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Views {
    Count(i64),
    Decimal(f64),
    Text(String),
}

/// Blog entity - a full stored post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub categories: Categories,
    pub author: String,
    pub summary: String,
    pub content: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub publish_date: Option<PublishDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub views: Option<Views>,
}

impl Blog {
    /// Listing projection; `with_id` controls whether `_id` is kept.
    pub fn to_card(&self, with_id: bool) -> BlogCard {
        BlogCard {
            id: with_id.then_some(self.id),
            image_url: self.image_url.clone(),
            categories: self.categories.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            author: self.author.clone(),
            publish_date: self.publish_date.clone(),
        }
    }

    /// Dashboard projection.
    pub fn to_summary(&self) -> BlogSummary {
        BlogSummary {
            id: self.id,
            title: self.title.clone(),
            status: self.status.clone(),
            views: self.views.clone(),
            publish_date: self.publish_date.clone(),
            author: self.author.clone(),
        }
    }
}

/// Card shown in the public listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogCard {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<DocumentId>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    pub categories: Categories,
    pub title: String,
    pub summary: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub publish_date: Option<PublishDate>,
}

/// Row shown in the editor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogSummary {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub views: Option<Views>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub publish_date: Option<PublishDate>,
    pub author: String,
}

/// A validated blog ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub title: String,
    pub categories: Categories,
    pub author: String,
    pub summary: String,
    pub content: String,
    pub image_url: Option<String>,
    pub publish_date: Option<PublishDate>,
    pub status: Option<String>,
    pub views: Option<Views>,
}

impl NewBlog {
    /// Attach the identifier generated at insert time.
    pub fn into_blog(self, id: DocumentId) -> Blog {
        Blog {
            id,
            title: self.title,
            categories: self.categories,
            author: self.author,
            summary: self.summary,
            content: self.content,
            image_url: self.image_url,
            publish_date: self.publish_date,
            status: self.status,
            views: self.views,
        }
    }
}

/// Unvalidated submission input.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub categories: Option<Categories>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub publish_date: Option<PublishDate>,
    pub status: Option<String>,
    pub views: Option<Views>,
}

impl BlogDraft {
    /// Require non-empty `title`, `categories`, `author`, `summary` and `content`.
    pub fn validate(self) -> Result<NewBlog, DomainError> {
        let mut required = RequiredFields::new();
        let title = required.text("title", self.title);
        let categories = required.present("categories", self.categories, Categories::is_empty);
        let author = required.text("author", self.author);
        let summary = required.text("summary", self.summary);
        let content = required.text("content", self.content);
        required.finish()?;

        Ok(NewBlog {
            title,
            categories: categories.unwrap_or(Categories::Many(Vec::new())),
            author,
            summary,
            content,
            image_url: self.image_url,
            publish_date: self.publish_date,
            status: self.status,
            views: self.views,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;
    use chrono::TimeZone;

    fn draft() -> BlogDraft {
        BlogDraft {
            title: Some("Rust 2024 ships".to_string()),
            categories: Some(Categories::One("tech".to_string())),
            author: Some("Desk".to_string()),
            summary: Some("Edition notes".to_string()),
            content: Some("Long form".to_string()),
            publish_date: Some(Utc.with_ymd_and_hms(2025, 2, 20, 9, 0, 0).unwrap().into()),
            ..BlogDraft::default()
        }
    }

    #[test]
    fn complete_draft_validates_and_keeps_optionals() {
        let blog = draft().validate().unwrap();
        assert_eq!(blog.title, "Rust 2024 ships");
        assert!(blog.publish_date.is_some());
        assert!(blog.image_url.is_none());
    }

    #[test]
    fn empty_categories_count_as_missing() {
        let err = BlogDraft {
            categories: Some(Categories::Many(vec![String::new()])),
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("categories")));
    }

    #[test]
    fn every_required_field_is_checked() {
        let err = BlogDraft::default().validate().unwrap_err();
        let DomainError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        for field in ["title", "categories", "author", "summary", "content"] {
            assert!(msg.contains(field), "{field} not reported in {msg}");
        }
    }

    #[test]
    fn categories_accept_string_or_list() {
        let one: Categories = serde_json::from_str("\"world\"").unwrap();
        let many: Categories = serde_json::from_str("[\"world\", \"politics\"]").unwrap();
        assert_eq!(one, Categories::One("world".to_string()));
        assert!(matches!(many, Categories::Many(ref labels) if labels.len() == 2));
    }

    #[test]
    fn card_projection_can_drop_the_id() {
        let blog = draft()
            .validate()
            .unwrap()
            .into_blog(DocumentId::from(ObjectId::from_bytes([7; 12])));

        let card = serde_json::to_value(blog.to_card(false)).unwrap();
        assert!(card.get("_id").is_none());
        assert!(card.get("content").is_none());
        assert_eq!(card["title"], "Rust 2024 ships");

        let with_id = serde_json::to_value(blog.to_card(true)).unwrap();
        assert_eq!(with_id["_id"], "070707070707070707070707");
    }

    #[test]
    fn publish_date_keeps_timestamps_and_raw_text() {
        let ts: PublishDate = serde_json::from_str("\"2025-04-01T10:00:00Z\"").unwrap();
        assert!(matches!(ts, PublishDate::Timestamp(_)));

        for raw in ["2025-04-01", "2025-04-01T10:00", "April 1st"] {
            let date: PublishDate = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(date, PublishDate::Text(raw.to_string()));
            assert_eq!(serde_json::to_value(&date).unwrap(), raw);
        }
    }

    #[test]
    fn timestamps_sort_above_text_dates() {
        let older: PublishDate = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().into();
        let newer: PublishDate = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap().into();
        let text = PublishDate::Text("2099-12-31".to_string());

        assert!(newer > older);
        assert!(older > text);
    }

    #[test]
    fn views_accept_any_number_or_text() {
        let parse = |raw: &str| serde_json::from_str::<Views>(raw).unwrap();

        assert_eq!(parse("12"), Views::Count(12));
        assert_eq!(parse("-3"), Views::Count(-3));
        assert_eq!(parse("1.5"), Views::Decimal(1.5));
        assert_eq!(parse("\"12\""), Views::Text("12".to_string()));
        assert_eq!(serde_json::to_value(Views::Count(110)).unwrap(), 110);
    }
}
