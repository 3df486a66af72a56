//! Session-cookie extractors — pull the session id from the cookie,
//! validate it against the session store, and inject a request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use ghiaccio_core::error::AppError;
use ghiaccio_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Like [`AuthUser`], but anonymous requests pass through as `None`
/// instead of being rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

/// An [`AuthUser`] that must additionally hold the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Resolves the session cookie in `parts` to a request context.
async fn resolve_context(
    parts: &Parts,
    state: &AppState,
) -> Result<Option<RequestContext>, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);
    let Some(cookie) = jar.get(&state.config.session.cookie_name) else {
        return Ok(None);
    };

    let Ok(session_id) = cookie.value().parse::<Uuid>() else {
        return Ok(None);
    };

    let Some(session) = state.session_manager.validate(session_id).await? else {
        return Ok(None);
    };

    Ok(Some(RequestContext::new(
        session.user_id,
        session.id,
        session.role,
    )))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_context(parts, state).await? {
            Some(ctx) => Ok(AuthUser(ctx)),
            None => Err(AppError::authentication("User not authenticated")),
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(resolve_context(parts, state).await?))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;
        if !ctx.is_admin() {
            return Err(AppError::authorization("User not authorized"));
        }
        Ok(AdminUser(ctx))
    }
}
