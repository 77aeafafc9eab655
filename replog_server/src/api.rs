//! HTTP handlers for the exercise log API.
//!
//! ```text
//! POST /api/exercise/new-user   username=ada
//! GET  /api/exercise/users
//! POST /api/exercise/add        userId=...&description=run&duration=30&date=2024-03-15
//! GET  /api/exercise/log/{userId}
//! ```
//!
//! Handlers map 1:1 to store operations. The store does blocking file I/O,
//! so every call goes through `web::block` to keep the workers free.

use crate::error::ApiResult;
use crate::params::{AddExerciseParams, NewUserParams};
use actix_web::web::{self, Either, Form, Json};
use actix_web::{get, post, HttpResponse};
use replog_core::{Exercise, JsonDocStore, User, UserStore};
use serde::Serialize;
use uuid::Uuid;

/// Response projection: `{username, _id, count}` plus the log when requested
#[derive(Debug, Serialize)]
pub struct UserView {
    username: String,
    #[serde(rename = "_id")]
    id: Uuid,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    log: Option<Vec<Exercise>>,
}

impl UserView {
    fn summary(user: User) -> Self {
        Self {
            username: user.name,
            id: user.id,
            count: user.log.len(),
            log: None,
        }
    }

    fn with_log(user: User) -> Self {
        Self {
            username: user.name,
            id: user.id,
            count: user.log.len(),
            log: Some(user.log),
        }
    }
}

/// Accept either an urlencoded form or a JSON body
type Body<T> = Either<Form<T>, Json<T>>;

#[post("/api/exercise/new-user")]
pub async fn new_user(
    store: web::Data<JsonDocStore>,
    body: Body<NewUserParams>,
) -> ApiResult<Json<UserView>> {
    let username = body.into_inner().into_username()?;

    let store = store.get_ref().clone();
    let user = web::block(move || store.create_user(&username)).await??;

    Ok(Json(UserView::summary(user)))
}

#[get("/api/exercise/users")]
pub async fn list_users(store: web::Data<JsonDocStore>) -> ApiResult<Json<Vec<UserView>>> {
    let store = store.get_ref().clone();
    let users = web::block(move || store.list_users()).await??;

    Ok(Json(users.into_iter().map(UserView::summary).collect()))
}

#[post("/api/exercise/add")]
pub async fn add_exercise(
    store: web::Data<JsonDocStore>,
    body: Body<AddExerciseParams>,
) -> ApiResult<Json<UserView>> {
    let (user_id, exercise) = body.into_inner().into_parts()?;

    let store = store.get_ref().clone();
    let user = web::block(move || store.add_exercise(&user_id, exercise)).await??;

    Ok(Json(UserView::with_log(user)))
}

#[get("/api/exercise/log/{user_id}")]
pub async fn get_log(
    store: web::Data<JsonDocStore>,
    path: web::Path<String>,
) -> ApiResult<Json<UserView>> {
    let user_id = path.into_inner();

    let store = store.get_ref().clone();
    let user = web::block(move || store.get_user(&user_id)).await??;

    Ok(Json(UserView::with_log(user)))
}

/// Usage page served at `/`
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Exercise Log</title></head>
  <body>
    <h1>Exercise Log</h1>
    <p>POST /api/exercise/new-user with <code>username</code></p>
    <p>GET /api/exercise/users</p>
    <p>POST /api/exercise/add with <code>userId</code>, <code>description</code>,
       <code>duration</code> and optional <code>date</code> (YYYY-MM-DD)</p>
    <p>GET /api/exercise/log/&lt;userId&gt;</p>
  </body>
</html>
"#;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Default service for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("not found")
}

/// Register all routes on the app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(new_user)
        .service(list_users)
        .service(add_exercise)
        .service(get_log);
}
