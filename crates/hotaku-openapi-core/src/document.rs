use indexmap::IndexMap;

use crate::model::components::Components;
use crate::model::operation::{Operation, PathItem};
use crate::model::request_body::RequestBody;
use crate::model::response::Response;
use crate::model::schema::{Schema, SchemaOrRef};
use crate::model::security::{SecurityScheme, requirement};
use crate::model::server::Server;
use crate::model::spec::{Contact, Info, License, OpenApiSpec, Tag};

pub const OPENAPI_VERSION: &str = "3.0.3";

pub const BEARER_AUTH: &str = "bearerAuth";

pub const TAG_HEALTH: &str = "Health";
pub const TAG_AUTHENTICATION: &str = "Authentication";

pub const USER_SCHEMA: &str = "User";
pub const ERROR_SCHEMA: &str = "Error";

/// Build the complete Hotaku API document.
///
/// Every value is a constant; two calls always yield equal documents.
pub fn hotaku_api() -> OpenApiSpec {
    let mut paths = IndexMap::new();
    paths.insert("/health".to_string(), PathItem::get(health_check()));
    paths.insert("/auth/login".to_string(), PathItem::post(login_user()));
    paths.insert("/auth/register".to_string(), PathItem::post(register_user()));

    OpenApiSpec {
        openapi: OPENAPI_VERSION.to_string(),
        info: info(),
        servers: vec![
            Server::new("https://api.hotaku.com", "Production server"),
            Server::new("https://staging-api.hotaku.com", "Staging server"),
        ],
        paths,
        components: Some(components()),
        security: Some(vec![requirement(BEARER_AUTH)]),
        tags: vec![
            Tag::new(TAG_HEALTH, "Health check endpoints"),
            Tag::new(TAG_AUTHENTICATION, "Authentication endpoints"),
        ],
    }
}

fn info() -> Info {
    Info::new("Hotaku API", "1.0.0")
        .description("Go Gin REST API Documentation")
        .contact(Contact::email("API Support", "support@hotaku.com"))
        .license(License::new("MIT", "https://opensource.org/licenses/MIT"))
}

fn error_response(description: &str) -> Response {
    Response::json(description, SchemaOrRef::component(ERROR_SCHEMA))
}

fn health_check() -> Operation {
    let body = Schema::object()
        .property("status", Schema::string().example("healthy"))
        .property("message", Schema::string().example("API is running smoothly"))
        .property("timestamp", Schema::integer().example(1640995200))
        .property("version", Schema::string().example("1.0.0"))
        .required(["status", "message", "timestamp", "version"]);

    // Public endpoint: an empty list overrides the document-wide bearer requirement.
    Operation::new("getHealthCheck", "Health Check", "Returns API health status")
        .tag(TAG_HEALTH)
        .security(Vec::new())
        .response("200", Response::json("API is healthy", body))
        .response("500", error_response("Internal server error"))
}

fn email_property() -> Schema {
    Schema::string().format("email").example("user@example.com")
}

fn password_property() -> Schema {
    Schema::string().format("password").example("password123")
}

fn login_user() -> Operation {
    let credentials = Schema::object()
        .property("email", email_property())
        .property("password", password_property())
        .required(["email", "password"]);

    let success = Schema::object()
        .property(
            "token",
            Schema::string().example("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."),
        )
        .property("user", SchemaOrRef::component(USER_SCHEMA));

    Operation::new(
        "loginUser",
        "User Login",
        "Authenticate user and return JWT token",
    )
    .tag(TAG_AUTHENTICATION)
    .security(vec![requirement(BEARER_AUTH)])
    .request_body(RequestBody::json(credentials))
    .response("200", Response::json("Login successful", success))
    .response("400", error_response("Bad request - Invalid input data"))
    .response("401", error_response("Invalid credentials"))
    .response("422", error_response("Validation error"))
    .response("500", error_response("Internal server error"))
}

fn register_user() -> Operation {
    let registration = Schema::object()
        .property("name", Schema::string().example("John Doe"))
        .property("email", email_property())
        .property("password", password_property())
        .required(["name", "email", "password"]);

    let created = Schema::object()
        .property(
            "message",
            Schema::string().example("User created successfully"),
        )
        .property("user", SchemaOrRef::component(USER_SCHEMA));

    Operation::new(
        "registerUser",
        "User Registration",
        "Register a new user account",
    )
    .tag(TAG_AUTHENTICATION)
    .security(vec![requirement(BEARER_AUTH)])
    .request_body(RequestBody::json(registration))
    .response("201", Response::json("User created successfully", created))
    .response("400", error_response("Bad request - Invalid input data"))
    .response("409", error_response("Conflict - User already exists"))
    .response("422", error_response("Validation error"))
    .response("500", error_response("Internal server error"))
}

fn timestamp_property() -> Schema {
    Schema::string()
        .format("date-time")
        .example("2024-01-01T00:00:00Z")
}

fn components() -> Components {
    let user = Schema::object()
        .property("id", Schema::integer().example(1))
        .property("name", Schema::string().example("John Doe"))
        .property("email", email_property())
        .property("created_at", timestamp_property())
        .property("updated_at", timestamp_property())
        .required(["id", "name", "email"]);

    let error = Schema::object()
        .property("error", Schema::string().example("Bad Request"))
        .property("message", Schema::string().example("Invalid input data"))
        .property("details", Schema::object().additional_properties(true))
        .required(["error", "message"]);

    let mut components = Components::default();
    components
        .schemas
        .insert(USER_SCHEMA.to_string(), user.into());
    components
        .schemas
        .insert(ERROR_SCHEMA.to_string(), error.into());
    components
        .security_schemes
        .insert(BEARER_AUTH.to_string(), SecurityScheme::bearer("JWT"));
    components
}
