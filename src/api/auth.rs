//! Authentication endpoints: identity-provider redirect glue.
//!
//! Interactive login is delegated to the external provider; this server
//! only builds the redirect URLs and validates the bearer tokens that
//! come back on API calls.

use axum::{
    extract::{Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Bearer token claims as issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Sign a token with the shared secret. Production tokens come from the
    /// identity provider; this is for tooling and tests.
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and validate a bearer token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == "Admin")
    }

    /// Require the Admin role
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            ))
        }
    }
}

/// Callback query parameters sent back by the provider
#[derive(Debug, Deserialize, ToSchema)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Callback acknowledgement body
#[derive(Debug, Serialize, ToSchema)]
pub struct CallbackResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Redirect the browser to the identity provider's hosted login page
#[utoipa::path(
    get,
    path = "/auth/login",
    tag = "auth",
    responses(
        (status = 307, description = "Redirect to the identity provider")
    )
)]
pub async fn login(State(state): State<crate::AppState>) -> Redirect {
    let auth = &state.config.auth;
    let url = format!(
        "https://{}/authorize?response_type=code&client_id={}&redirect_uri={}&scope=openid%20profile%20email",
        auth.provider_domain,
        auth.client_id,
        urlencoding::encode(&auth.callback_url),
    );
    Redirect::temporary(&url)
}

/// Receive the provider's login callback
#[utoipa::path(
    get,
    path = "/auth/callback",
    tag = "auth",
    params(
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("error" = Option<String>, Query, description = "Provider error code")
    ),
    responses(
        (status = 200, description = "Login acknowledged", body = CallbackResponse),
        (status = 400, description = "Provider reported an error")
    )
)]
pub async fn callback(Query(query): Query<CallbackQuery>) -> AppResult<Json<CallbackResponse>> {
    if let Some(error) = query.error {
        let detail = query.error_description.unwrap_or_default();
        return Err(AppError::BadRequest(format!(
            "Authentication failed: {} {}",
            error, detail
        )));
    }

    Ok(Json(CallbackResponse {
        message: "Login successful".to_string(),
        code: query.code,
    }))
}

/// Redirect the browser to the identity provider's logout endpoint
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 307, description = "Redirect to the identity provider logout")
    )
)]
pub async fn logout(State(state): State<crate::AppState>) -> Redirect {
    let auth = &state.config.auth;
    let url = format!(
        "https://{}/v2/logout?client_id={}&returnTo={}",
        auth.provider_domain,
        auth.client_id,
        urlencoding::encode(&auth.logout_return_url),
    );
    Redirect::temporary(&url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_for(claims: &Claims, secret: &str) -> String {
        claims.create_token(secret).unwrap()
    }

    fn valid_claims(roles: Vec<String>) -> Claims {
        Claims {
            sub: "auth0|user".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
            roles,
        }
    }

    #[test]
    fn round_trips_a_valid_token() {
        let claims = valid_claims(vec!["Admin".to_string()]);
        let token = token_for(&claims, "secret");
        let parsed = Claims::from_token(&token, "secret").unwrap();
        assert_eq!(parsed.sub, claims.sub);
        assert!(parsed.is_admin());
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let claims = valid_claims(vec![]);
        let token = token_for(&claims, "secret");
        assert!(Claims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn rejects_an_expired_token() {
        let claims = Claims {
            sub: "auth0|user".to_string(),
            exp: chrono::Utc::now().timestamp() - 3600,
            roles: vec![],
        };
        let token = token_for(&claims, "secret");
        assert!(Claims::from_token(&token, "secret").is_err());
    }

    #[test]
    fn non_admin_fails_admin_check() {
        let claims = valid_claims(vec!["Reader".to_string()]);
        assert!(claims.require_admin().is_err());
    }
}
