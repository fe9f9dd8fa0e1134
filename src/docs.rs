use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use unilink_models::{
    ClientUser, LoginRequest, LoginResponse, ProfessorProfile, RegisterRequest, SessionResponse,
    StudentProfile, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_session_user,
        crate::modules::profiles::controller::get_my_profile,
        crate::modules::profiles::controller::get_professor_profile,
        crate::modules::profiles::controller::get_student_profile,
    ),
    components(
        schemas(
            UserRole,
            ClientUser,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            SessionResponse,
            StudentProfile,
            ProfessorProfile,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and session endpoints"),
        (name = "Profiles", description = "Student and professor profiles")
    ),
    info(
        title = "Unilink API",
        version = "0.1.0",
        description = "Student and professor accounts with bearer-token sessions.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
