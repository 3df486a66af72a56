//! # ghiaccio-auth
//!
//! Password hashing (scrypt with per-user salts) and cookie-session
//! management for Ghiaccio. The session store is a capability trait so
//! the in-memory map can be swapped for an external store.

pub mod password;
pub mod session;

pub use password::PasswordHasher;
pub use session::{MemorySessionStore, SessionManager, SessionStore};
