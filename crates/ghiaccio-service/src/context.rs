//! Request context carrying the authenticated user and session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ghiaccio_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the session cookie and passed into service methods so
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's role at login time.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, session_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            session_id,
            role,
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
