//! Data Transfer Objects - request bodies and query strings.
//!
//! Every field is optional so that a missing value reaches the presence
//! checks and yields a 400 instead of a deserialization failure.

use serde::{Deserialize, Serialize};

use newsx_core::domain::{BlogDraft, Categories, PublishDate, UserDraft, Views};

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

/// Body of `POST /blogs`.
///
/// `publish_date` and `views` take whatever shape the editor sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub categories: Option<Categories>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub publish_date: Option<PublishDate>,
    pub status: Option<String>,
    pub views: Option<Views>,
}

impl From<CreateBlogRequest> for BlogDraft {
    fn from(req: CreateBlogRequest) -> Self {
        Self {
            title: req.title,
            categories: req.categories,
            author: req.author,
            summary: req.summary,
            content: req.content,
            image_url: req.image_url,
            publish_date: req.publish_date,
            status: req.status,
            views: req.views,
        }
    }
}

/// Query string of `GET /resources`.
///
/// `page` stays a raw string; non-numeric values fall back to page 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_request_tolerates_missing_fields() {
        let req: CreateBlogRequest =
            serde_json::from_str(r#"{"title":"Hello","imageUrl":"https://img/1.png"}"#).unwrap();
        let draft = BlogDraft::from(req);

        assert_eq!(draft.title.as_deref(), Some("Hello"));
        assert_eq!(draft.image_url.as_deref(), Some("https://img/1.png"));
        assert!(draft.categories.is_none());
    }

    #[test]
    fn user_request_maps_to_draft() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":"admin","email":"a@b.c"}"#).unwrap();
        let draft = UserDraft::from(req);

        assert_eq!(draft.name.as_deref(), Some("admin"));
        assert!(draft.password.is_none());
    }

    #[test]
    fn blog_request_keeps_loose_optional_fields() {
        let req: CreateBlogRequest = serde_json::from_str(
            r#"{"title":"Hello","publish_date":"2025-04-01","views":"12"}"#,
        )
        .unwrap();

        assert_eq!(
            req.publish_date,
            Some(PublishDate::Text("2025-04-01".to_string()))
        );
        assert_eq!(req.views, Some(Views::Text("12".to_string())));
    }
}
