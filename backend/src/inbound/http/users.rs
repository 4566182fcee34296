//! User account handlers.
//!
//! ```text
//! POST /users/new               {"email","username","firstName","lastName","password"}
//! POST /users/edit/{userId}     same body; replaces every field
//! GET  /users?email=a@x.com
//! ```
//!
//! Every response body is a [`ResponseEnvelope`].

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{CreateUserRequest, EditUserRequest};
use crate::domain::{Error, PlaintextPassword, UserId, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ResponseEnvelope;
use crate::inbound::http::schemas::{ErrorEnvelopeSchema, UserEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Body accepted by both create and edit.
///
/// Example JSON:
/// `{"email":"a@x.com","username":"a","firstName":"Ada","lastName":"Lovelace","password":"p1"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountRequest {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl UserAccountRequest {
    fn into_parts(self) -> (UserProfile, PlaintextPassword) {
        let Self {
            email,
            username,
            first_name,
            last_name,
            password,
        } = self;
        (
            UserProfile::new(email, username, first_name, last_name),
            PlaintextPassword::new(password),
        )
    }
}

/// Query string for `GET /users`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserLookupQuery {
    /// Exact email of the account to fetch.
    pub email: Option<String>,
}

/// Create a user account.
#[utoipa::path(
    post,
    path = "/users/new",
    request_body = UserAccountRequest,
    responses(
        (status = 201, description = "Account created", body = UserEnvelopeSchema),
        (status = 409, description = "Username or email already in use", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/new")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserAccountRequest>,
) -> ApiResult<HttpResponse> {
    let (profile, password) = payload.into_inner().into_parts();
    let user = state
        .accounts
        .create_user(CreateUserRequest { profile, password })
        .await?;
    Ok(HttpResponse::Created().json(ResponseEnvelope::success(user)))
}

/// Replace every field of an existing account.
///
/// A path segment that is not a valid identifier is a `ServerError`, the same
/// as any other request the store cannot act on.
#[utoipa::path(
    post,
    path = "/users/edit/{userId}",
    params(("userId" = i32, Path, description = "Identifier of the account to edit")),
    request_body = UserAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = UserEnvelopeSchema),
        (status = 404, description = "No such account", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "editUser"
)]
#[post("/users/edit/{user_id}")]
pub async fn edit_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserAccountRequest>,
) -> ApiResult<HttpResponse> {
    let user_id: UserId = path
        .into_inner()
        .parse()
        .map_err(|err| Error::server_error(format!("invalid user id: {err}")))?;
    let (profile, password) = payload.into_inner().into_parts();
    let user = state
        .accounts
        .edit_user(EditUserRequest {
            user_id,
            profile,
            password,
        })
        .await?;
    Ok(HttpResponse::Ok().json(ResponseEnvelope::success(user)))
}

/// Fetch the account registered with an email address.
#[utoipa::path(
    get,
    path = "/users",
    params(UserLookupQuery),
    responses(
        (status = 200, description = "Matching account", body = UserEnvelopeSchema),
        (status = 404, description = "No such account", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUserByEmail"
)]
#[get("/users")]
pub async fn get_user_by_email(
    state: web::Data<HttpState>,
    query: web::Query<UserLookupQuery>,
) -> ApiResult<HttpResponse> {
    let email = query.into_inner().email.ok_or_else(Error::user_not_found)?;
    let user = state.accounts.get_user_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(ResponseEnvelope::success(user)))
}

fn invalid_json(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::server_error(err.to_string()).into()
}

fn invalid_query(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::server_error(err.to_string()).into()
}

/// Register the account routes and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use accounts::inbound::http::users::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(invalid_json))
        .app_data(web::QueryConfig::default().error_handler(invalid_query))
        .service(create_user)
        .service(edit_user)
        .service(get_user_by_email);
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
