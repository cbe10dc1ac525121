//! `intakeflow-auth` — user identity for the intake portal.
//!
//! Registration/login only: user records, Argon2id password hashing and
//! credential verification. Authentication *security design* (sessions,
//! tokens, lockout) is out of scope for this service.

pub mod password;
pub mod user;

pub use password::{hash_password, verify_password, PasswordError};
pub use user::{normalize_username, User};
