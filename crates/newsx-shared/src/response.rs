//! Response envelopes (RFC 7807 compliant for errors).

use serde::{Deserialize, Serialize};

use newsx_core::domain::Page;

/// Creation acknowledgement: `{ message, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> CreatedResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Single item: `{ data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Unpaged list: `{ total, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub total: u64,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            total: data.len() as u64,
            data,
        }
    }
}

/// Paged blog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_blogs: u64,
    pub blogs_per_page: u64,
    pub data: Vec<T>,
}

impl<T> From<Page<T>> for PagedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            current_page: page.request.page(),
            total_pages: page.total_pages(),
            total_blogs: page.total_items,
            blogs_per_page: page.request.per_page(),
            data: page.items,
        }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsx_core::domain::PageRequest;

    #[test]
    fn paged_response_uses_camel_case_keys() {
        let page = Page {
            items: vec!["a", "b"],
            request: PageRequest::from_query(Some("2")),
            total_items: 10,
        };

        let json = serde_json::to_value(PagedResponse::from(page)).unwrap();

        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["totalBlogs"], 10);
        assert_eq!(json["blogsPerPage"], 8);
        assert_eq!(json["data"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn problem_details_skip_empty_detail() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert!(json.get("detail").is_none());
    }
}
