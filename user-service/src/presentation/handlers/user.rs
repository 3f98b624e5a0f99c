use crate::application::user_service::UserService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, patch, post, web};
use service_common::RequestId;
use tracing::info;

pub fn scope() -> Scope {
    web::scope("/users")
        .service(create_user)
        .service(list_users)
        .service(get_user_by_username)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
}

#[post("")]
async fn create_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let command = payload.into_inner().into_command()?;
    let user = service.create_user(command).await?;

    info!(
        request_id = %RequestId::of(&req),
        user_id = user.id,
        username = %user.username,
        "user created"
    );

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[get("")]
async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, DomainError> {
    let users: Vec<UserResponse> = service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(users))
}

#[get("/{id}")]
async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let user = service.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("/username/{username}")]
async fn get_user_by_username(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let user = service.get_user_by_username(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[patch("/{id}")]
async fn update_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    let changes = payload.into_inner().into_changes()?;
    let user = service.update_user(id, changes).await?;

    info!(request_id = %RequestId::of(&req), user_id = id, "user updated");

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/{id}")]
async fn delete_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    service.delete_user(id).await?;

    info!(request_id = %RequestId::of(&req), user_id = id, "user deleted");

    Ok(HttpResponse::NoContent().finish())
}
