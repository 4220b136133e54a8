//! Blog submission and listing handlers.

use actix_web::{HttpResponse, web};

use newsx_core::domain::PageRequest;
use newsx_shared::dto::{CreateBlogRequest, PageQuery};
use newsx_shared::{DataResponse, ListResponse, PagedResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let outcome = state.blogs.create_blog(body.into_inner().into()).await?;

    tracing::info!(blog_id = %outcome.inserted_id, "Blog created");

    Ok(HttpResponse::Created().json(outcome))
}

/// GET /resources?page=N
pub async fn list_paged(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = PageRequest::from_query(query.page.as_deref());
    let page = state.blogs.list_blogs_paged(request).await?;

    Ok(HttpResponse::Ok().json(PagedResponse::from(page)))
}

/// GET /blogs/recent
pub async fn list_recent(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let recent = state.blogs.list_recent_blogs().await?;
    Ok(HttpResponse::Ok().json(ListResponse::from(recent)))
}

/// GET /blogs/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let blog = state.blogs.get_blog_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(DataResponse { data: blog }))
}

/// GET /blogs
pub async fn list_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list_all_blogs().await?;
    Ok(HttpResponse::Ok().json(ListResponse::from(blogs)))
}
