//! Role claim extraction.
//!
//! The fronting authentication layer resolves the caller's session and puts
//! the result in a trusted header; this is the only place the HTTP surface
//! reads it. A missing or unrecognized header degrades to anonymous.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::policy::Role;

/// Header carrying the resolved role claim.
pub(super) const ROLE_HEADER: &str = "x-auth-role";

/// The caller's resolved role for this request.
#[derive(Debug, Clone, Copy)]
pub(super) struct RoleClaim(pub(super) Role);

impl<S> FromRequestParts<S> for RoleClaim
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map_or(Role::Anonymous, Role::from_claim);

        Ok(Self(role))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;
    use rstest::rstest;

    use super::*;

    async fn resolve(request: Request<()>) -> Role {
        let (mut parts, ()) = request.into_parts();
        let RoleClaim(role) = RoleClaim::from_request_parts(&mut parts, &()).await.unwrap();
        role
    }

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("user", Role::User)]
    #[case("root", Role::Anonymous)]
    #[tokio::test]
    async fn header_resolves_to_role(#[case] claim: &str, #[case] expected: Role) {
        let request = Request::builder().header(ROLE_HEADER, claim).body(()).unwrap();

        assert_eq!(resolve(request).await, expected);
    }

    #[tokio::test]
    async fn missing_header_is_anonymous() {
        let request = Request::builder().body(()).unwrap();

        assert_eq!(resolve(request).await, Role::Anonymous);
    }
}
