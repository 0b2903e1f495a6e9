//! Wire types exchanged with the roster service.

use serde::{Deserialize, Serialize};

/// A student record exactly as the service returns it.
///
/// The service owns the `id`; the client never invents or rewrites one.
/// `name`, `email` and `gender` are free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: String,
}

/// Creation payload for `POST /api/v1/students`.
///
/// No `id` field: the service assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub gender: String,
}
