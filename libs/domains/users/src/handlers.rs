use axum::{
    BoxError, Json, Router,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    track_request_path,
};
use futures::{StreamExt, TryStreamExt, future::ready, stream};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::mapper::UserMapper;
use crate::models::{User, UserRequest, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserRequest, UserResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R, M>(service: UserService<R, M>) -> Router
where
    R: UserRepository + 'static,
    M: UserMapper + 'static,
{
    Router::new()
        .route("/", get(list_users::<R, M>).post(create_user::<R, M>))
        .route(
            "/{id}",
            get(get_user::<R, M>)
                .patch(update_user::<R, M>)
                .delete(delete_user::<R, M>),
        )
        .layer(middleware::from_fn(track_request_path))
        .with_state(Arc::new(service))
}

/// List all users
///
/// The body is a JSON array written element by element as the store cursor
/// advances.
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository + 'static, M: UserMapper + 'static>(
    State(service): State<Arc<UserService<R, M>>>,
) -> UserResult<Response> {
    let mut users = service.find_all();

    // A store that fails before the first document still gets an error envelope.
    let Some(head) = users.try_next().await? else {
        return Ok(Json(Vec::<UserResponse>::new()).into_response());
    };

    let elements = stream::once(ready(Ok(head)))
        .chain(users)
        .enumerate()
        .map(move |(index, result)| encode_element(service.mapper(), index, result));

    let body = elements.chain(stream::once(ready(Ok::<_, BoxError>(b"]".to_vec()))));

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(body),
    )
        .into_response())
}

/// One array element, prefixed with `[` for the first and `,` otherwise.
fn encode_element<M: UserMapper>(
    mapper: &M,
    index: usize,
    result: UserResult<User>,
) -> Result<Vec<u8>, BoxError> {
    let user = result.inspect_err(|e| {
        tracing::error!(error = %e, "User stream failed mid-response");
    })?;

    let mut chunk = if index == 0 { b"[".to_vec() } else { b",".to_vec() };
    serde_json::to_writer(&mut chunk, &mapper.to_response(user))?;
    Ok(chunk)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository + 'static, M: UserMapper + 'static>(
    State(service): State<Arc<UserService<R, M>>>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> UserResult<StatusCode> {
    service.save(request).await?;
    Ok(StatusCode::CREATED)
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository + 'static, M: UserMapper + 'static>(
    State(service): State<Arc<UserService<R, M>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.find_by_id(&id).await?;
    Ok(Json(service.mapper().to_response(user)))
}

/// Replace every field of a user
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository + 'static, M: UserMapper + 'static>(
    State(service): State<Arc<UserService<R, M>>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update(&id, request).await?;
    Ok(Json(service.mapper().to_response(user)))
}

/// Delete a user
///
/// Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted or absent"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository + 'static, M: UserMapper + 'static>(
    State(service): State<Arc<UserService<R, M>>>,
    Path(id): Path<String>,
) -> UserResult<StatusCode> {
    if service.delete(&id).await?.is_none() {
        tracing::debug!(user_id = %id, "Delete of unknown user");
    }
    Ok(StatusCode::OK)
}
