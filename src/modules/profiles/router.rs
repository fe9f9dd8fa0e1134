use axum::{Router, routing::get};

use super::controller::{get_my_profile, get_professor_profile, get_student_profile};
use crate::state::AppState;

pub fn init_profiles_router() -> Router<AppState> {
    Router::new().route("/me", get(get_my_profile))
}

pub fn init_professors_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_professor_profile))
}

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_student_profile))
}
