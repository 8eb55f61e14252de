use axum::{routing::post, Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

// Single hard-coded credential pair. The gateway is a demo trust
// boundary; see the admission filter for what the token does (and does
// not) buy the caller.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

async fn login(Json(req): Json<LoginRequest>) -> Result<Json<AuthResponse>, AppError> {
    if req.username != ADMIN_USERNAME || req.password != ADMIN_PASSWORD {
        return Err(AppError::AuthenticationError(
            "Invalid credentials".to_string(),
        ));
    }

    tracing::info!("Login succeeded for {}", req.username);
    Ok(Json(AuthResponse {
        token: issue_token(&req.username),
    }))
}

/// Synthesizes the three-segment token: fixed header, a payload carrying
/// the username and a fixed role claim, and a constant placeholder where
/// a signature would go. No cryptographic signing occurs, and the
/// admission filter never decodes what is produced here.
fn issue_token(username: &str) -> String {
    let header = STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = STANDARD.encode(format!(r#"{{"sub":"{}","role":"USER"}}"#, username));
    let signature = STANDARD.encode("signature");

    format!("{}.{}.{}", header, payload, signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_three_decodable_segments() {
        let token = issue_token("admin");
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);

        let header = String::from_utf8(STANDARD.decode(segments[0]).unwrap()).unwrap();
        assert_eq!(header, r#"{"alg":"HS256","typ":"JWT"}"#);

        let payload = String::from_utf8(STANDARD.decode(segments[1]).unwrap()).unwrap();
        let claims: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(claims["sub"], "admin");
        assert_eq!(claims["role"], "USER");
    }

    #[test]
    fn signature_segment_is_a_constant_placeholder() {
        let a = issue_token("admin").split('.').last().unwrap().to_string();
        let b = issue_token("other").split('.').last().unwrap().to_string();
        assert_eq!(a, b);
        assert_eq!(STANDARD.decode(&a).unwrap(), b"signature");
    }
}
