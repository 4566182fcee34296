//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the account and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorEnvelopeSchema, UserEnvelopeSchema, UserSchema,
};
use crate::inbound::http::users::UserAccountRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User accounts API",
        description = "Create, edit, and look up user accounts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::edit_user,
        crate::inbound::http::users::get_user_by_email,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorCodeSchema,
        UserEnvelopeSchema,
        ErrorEnvelopeSchema,
        UserAccountRequest
    )),
    tags(
        (name = "users", description = "Account management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const USER_SCHEMA_NAME: &str = "crate.domain.User";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn documents_every_account_route() {
        let doc = ApiDoc::openapi();
        for path in ["/users/new", "/users/edit/{userId}", "/users", "/health/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn user_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get(USER_SCHEMA_NAME).expect("User schema");

        for field in ["id", "email", "username", "firstName", "lastName", "password"] {
            assert_object_schema_has_field(user_schema, field);
        }
    }
}
