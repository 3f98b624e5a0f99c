use crate::application::post_service::PostService;
use crate::domain::error::DomainError;
use crate::domain::post::EnrichedPost;
use crate::presentation::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, patch, post, web};
use service_common::RequestId;
use tracing::info;

pub fn scope() -> Scope {
    web::scope("/posts")
        .service(create_post)
        .service(get_posts)
        .service(get_posts_by_user)
        .service(get_post)
        .service(update_post)
        .service(delete_post)
}

fn responses(posts: Vec<EnrichedPost>) -> Vec<PostResponse> {
    posts.into_iter().map(PostResponse::from).collect()
}

#[post("")]
async fn create_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let command = payload.into_inner().into_command()?;
    let post = service.create_post(command).await?;

    info!(
        request_id = %RequestId::of(&req),
        post_id = post.post.id,
        user_id = post.post.user_id,
        "post created"
    );

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

#[get("")]
async fn get_posts(service: web::Data<PostService>) -> Result<HttpResponse, DomainError> {
    let posts = service.list_posts().await?;
    Ok(HttpResponse::Ok().json(responses(posts)))
}

#[get("/user/{user_id}")]
async fn get_posts_by_user(
    service: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let posts = service.list_posts_by_author(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(responses(posts)))
}

#[get("/{id}")]
async fn get_post(
    service: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post = service.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

#[patch("/{id}")]
async fn update_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    path: web::Path<i64>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    let changes = payload.into_inner().into_changes()?;
    let post = service.update_post(id, changes).await?;

    info!(request_id = %RequestId::of(&req), post_id = id, "post updated");

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

#[delete("/{id}")]
async fn delete_post(
    req: HttpRequest,
    service: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    service.delete_post(id).await?;

    info!(request_id = %RequestId::of(&req), post_id = id, "post deleted");

    Ok(HttpResponse::NoContent().finish())
}
