use axum::Json;

use crate::services::mentors::{Mentor, list_mentors};

pub async fn mentors_handler() -> Json<&'static [Mentor]> {
    Json(list_mentors())
}
