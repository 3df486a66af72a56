//! Auth handlers — register, login, logout, current user.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use ghiaccio_core::error::AppError;
use ghiaccio_core::types::ApiResponse;
use ghiaccio_entity::session::Session;
use ghiaccio_service::auth::NewAccount;
use ghiaccio_service::validation::into_app_error;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{CurrentUserResponse, MessageResponse, UserResponse};
use crate::extractors::MaybeAuthUser;
use crate::state::AppState;

/// POST /api/register
///
/// Creates the account and logs it in: the response sets the session
/// cookie exactly like a login does.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserResponse>>), AppError> {
    req.validate().map_err(into_app_error)?;

    let (user, session) = state
        .auth_service
        .register(NewAccount {
            name: req.name.trim().to_string(),
            surname: req.surname.trim().to_string(),
            phone_number: req.phone_number.trim().to_string(),
            email: req.email.trim().to_string(),
            password: req.password,
        })
        .await?;

    let jar = jar.add(session_cookie(&state, &session));
    Ok((jar, Json(ApiResponse::ok(user.into()))))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserResponse>>), AppError> {
    req.validate().map_err(into_app_error)?;

    let (user, session) = state
        .auth_service
        .login(req.email.trim(), &req.password, req.remember_me)
        .await?;

    let jar = jar.add(session_cookie(&state, &session));
    Ok((jar, Json(ApiResponse::ok(user.into()))))
}

/// POST /api/logout
///
/// Always succeeds; an anonymous caller just gets the cookie cleared.
pub async fn logout(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), AppError> {
    if let Some(ctx) = auth.0 {
        state.auth_service.logout(ctx.session_id).await?;
    }

    let jar = jar.remove(
        Cookie::build((state.config.session.cookie_name.clone(), ""))
            .path("/")
            .build(),
    );

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    ))
}

/// GET /api/user
///
/// Reports whether the caller is authenticated; never an error.
pub async fn current_user(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
) -> Result<Json<CurrentUserResponse>, AppError> {
    match auth.0 {
        Some(ctx) => {
            let user = state.auth_service.current_user(&ctx).await?;
            Ok(Json(CurrentUserResponse {
                is_auth: true,
                user: Some(user.into()),
            }))
        }
        None => Ok(Json(CurrentUserResponse {
            is_auth: false,
            user: None,
        })),
    }
}

/// Builds the session cookie for a freshly created session.
///
/// Remember-me sessions get an explicit Max-Age; plain sessions stay
/// browser-session cookies (the server-side TTL still applies).
fn session_cookie(state: &AppState, session: &Session) -> Cookie<'static> {
    let config = &state.config.session;
    let mut builder = Cookie::build((config.cookie_name.clone(), session.id.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .path("/");

    if session.remember_me {
        let ttl = state.session_manager.ttl(true);
        builder = builder.max_age(cookie::time::Duration::seconds(ttl.num_seconds()));
    }

    builder.build()
}
