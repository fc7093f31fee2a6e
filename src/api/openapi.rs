use super::handlers::{auth, health};
use utoipa::openapi::{Contact, ContactBuilder, Info, License, OpenApi, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> OpenApi {
    // Reuse the same router wiring and only return the generated OpenAPI document.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` document. `/` is added outside and stays
/// undocumented.
pub(crate) fn api_router() -> OpenApiRouter {
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::login::login))
        .routes(routes!(auth::user::user))
        .routes(routes!(auth::logout::logout));

    let mut health_tag = Tag::new("health");
    health_tag.description = Some("Build and liveness information".to_string());

    let mut auth_tag = Tag::new("auth");
    auth_tag.description = Some("Cookie sessions backed by the identity provider".to_string());

    router.get_openapi_mut().tags = Some(vec![health_tag, auth_tag]);

    router
}

fn cargo_openapi() -> OpenApi {
    let mut info = Info::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info.description = Some(env!("CARGO_PKG_DESCRIPTION").to_string());
    info.license = Some(License::new(env!("CARGO_PKG_LICENSE")));
    info.contact = maintainer(env!("CARGO_PKG_AUTHORS"));

    OpenApiBuilder::new().info(info).build()
}

/// First Cargo author, written as `Name <email>`.
fn maintainer(authors: &str) -> Option<Contact> {
    let (name, email) = authors.split(':').next()?.split_once('<')?;
    Some(
        ContactBuilder::new()
            .name(Some(name.trim()))
            .email(Some(email.trim_end_matches('>').trim()))
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_info_from_cargo() {
        let doc = openapi();
        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));

        let contact = doc.info.contact;
        assert!(contact.is_some());
        if let Some(contact) = contact {
            assert_eq!(contact.name.as_deref(), Some("Team Authgate"));
            assert_eq!(contact.email.as_deref(), Some("team@authgate.dev"));
        }

        let license = doc.info.license;
        assert!(license.is_some());
        if let Some(license) = license {
            assert_eq!(license.name, "BSD-3-Clause");
        }
    }

    #[test]
    fn openapi_tags_and_paths() {
        let doc = openapi();
        let tags = doc.tags.clone().unwrap_or_default();
        assert!(tags.iter().any(|tag| tag.name == "auth"));
        assert!(tags.iter().any(|tag| tag.name == "health"));
        for path in [
            "/api/auth/login",
            "/api/auth/user",
            "/api/auth/logout",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert!(!doc.paths.paths.contains_key("/"));
    }

    #[test]
    fn maintainer_needs_an_email() {
        let contact = maintainer("Team Authgate <team@authgate.dev>:Someone Else");
        assert_eq!(
            contact.as_ref().and_then(|c| c.name.as_deref()),
            Some("Team Authgate")
        );
        assert_eq!(
            contact.as_ref().and_then(|c| c.email.as_deref()),
            Some("team@authgate.dev")
        );
        assert!(maintainer("Solo").is_none());
    }
}
