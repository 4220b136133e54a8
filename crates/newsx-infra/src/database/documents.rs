//! BSON document shapes for the `users` and `blogs` collections.
//!
//! `publish_date` and `views` are read as raw BSON: older documents were
//! written straight from request bodies and hold strings where newer ones
//! hold dates and integers.

use bson::oid::ObjectId;
use bson::{Bson, DateTime as BsonDateTime, Document, doc};
use serde::{Deserialize, Serialize};

use newsx_core::domain::{
    Blog, BlogCard, BlogSummary, Categories, NewBlog, NewUser, PublishDate, User, Views,
};

fn publish_date_to_bson(date: PublishDate) -> Bson {
    match date {
        PublishDate::Timestamp(ts) => Bson::DateTime(BsonDateTime::from_chrono(ts)),
        PublishDate::Text(raw) => Bson::String(raw),
    }
}

fn publish_date_from_bson(value: Option<Bson>) -> Option<PublishDate> {
    match value? {
        Bson::Null => None,
        Bson::DateTime(dt) => Some(PublishDate::Timestamp(dt.to_chrono())),
        Bson::String(raw) => Some(PublishDate::Text(raw)),
        other => Some(PublishDate::Text(other.to_string())),
    }
}

fn views_to_bson(views: Views) -> Bson {
    match views {
        Views::Count(count) => Bson::Int64(count),
        Views::Decimal(value) => Bson::Double(value),
        Views::Text(raw) => Bson::String(raw),
    }
}

fn views_from_bson(value: Option<Bson>) -> Option<Views> {
    match value? {
        Bson::Null => None,
        Bson::Int32(count) => Some(Views::Count(i64::from(count))),
        Bson::Int64(count) => Some(Views::Count(count)),
        Bson::Double(value) => Some(Views::Decimal(value)),
        Bson::String(raw) => Some(Views::Text(raw)),
        other => Some(Views::Text(other.to_string())),
    }
}

/// Stored user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<NewUser> for UserDocument {
    fn from(user: NewUser) -> Self {
        Self {
            id: ObjectId::new(),
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.into(),
            name: doc.name,
            email: doc.email,
            password: doc.password,
        }
    }
}

/// Stored blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub categories: Categories,
    pub author: String,
    pub summary: String,
    pub content: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub publish_date: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub views: Option<Bson>,
}

impl From<NewBlog> for BlogDocument {
    fn from(blog: NewBlog) -> Self {
        Self {
            id: ObjectId::new(),
            title: blog.title,
            categories: blog.categories,
            author: blog.author,
            summary: blog.summary,
            content: blog.content,
            image_url: blog.image_url,
            publish_date: blog.publish_date.map(publish_date_to_bson),
            status: blog.status,
            views: blog.views.map(views_to_bson),
        }
    }
}

impl From<BlogDocument> for Blog {
    fn from(doc: BlogDocument) -> Self {
        Self {
            id: doc.id.into(),
            title: doc.title,
            categories: doc.categories,
            author: doc.author,
            summary: doc.summary,
            content: doc.content,
            image_url: doc.image_url,
            publish_date: publish_date_from_bson(doc.publish_date),
            status: doc.status,
            views: views_from_bson(doc.views),
        }
    }
}

/// Listing projection as returned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogCardDocument {
    #[serde(rename = "_id", default)]
    pub id: Option<ObjectId>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    pub categories: Categories,
    pub title: String,
    pub summary: String,
    pub author: String,
    #[serde(default)]
    pub publish_date: Option<Bson>,
}

impl BlogCardDocument {
    /// Projection for cards; `_id` is included by the store unless excluded.
    pub(crate) fn projection(with_id: bool) -> Document {
        doc! {
            "_id": i32::from(with_id),
            "imageUrl": 1,
            "categories": 1,
            "title": 1,
            "summary": 1,
            "author": 1,
            "publish_date": 1,
        }
    }
}

impl From<BlogCardDocument> for BlogCard {
    fn from(doc: BlogCardDocument) -> Self {
        Self {
            id: doc.id.map(Into::into),
            image_url: doc.image_url,
            categories: doc.categories,
            title: doc.title,
            summary: doc.summary,
            author: doc.author,
            publish_date: publish_date_from_bson(doc.publish_date),
        }
    }
}

/// Dashboard projection as returned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogSummaryDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub views: Option<Bson>,
    #[serde(default)]
    pub publish_date: Option<Bson>,
    pub author: String,
}

impl BlogSummaryDocument {
    pub(crate) fn projection() -> Document {
        doc! {
            "title": 1,
            "status": 1,
            "views": 1,
            "publish_date": 1,
            "author": 1,
        }
    }
}

impl From<BlogSummaryDocument> for BlogSummary {
    fn from(doc: BlogSummaryDocument) -> Self {
        Self {
            id: doc.id.into(),
            title: doc.title,
            status: doc.status,
            views: views_from_bson(doc.views),
            publish_date: publish_date_from_bson(doc.publish_date),
            author: doc.author,
        }
    }
}

/// Sort on `publish_date`, newest first.
pub(crate) fn newest_first() -> Document {
    doc! { "publish_date": -1 }
}
