// src/api/auth.rs
//! Admin API request signing.
//!
//! Ghost accepts `Authorization: Ghost <jwt>` where the JWT is HS256-signed
//! with the hex-decoded key secret, carries the key id as `kid` and is
//! addressed to `/admin/`. A fresh token is minted for every request.

use crate::constants::{ADMIN_TOKEN_AUDIENCE, ADMIN_TOKEN_LIFETIME_SECS};
use crate::error::AppError;
use crate::types::AdminApiKey;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Claims Ghost checks on an Admin API token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub iat: u64,
    pub exp: u64,
    pub aud: String,
}

/// Signs a token issued at `issued_at` (seconds since the Unix epoch).
pub fn sign_admin_token(key: &AdminApiKey, issued_at: u64) -> Result<String, AppError> {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(key.id().to_string());

    let claims = AdminClaims {
        iat: issued_at,
        exp: issued_at + ADMIN_TOKEN_LIFETIME_SECS,
        aud: ADMIN_TOKEN_AUDIENCE.to_string(),
    };

    Ok(encode(&header, &claims, &EncodingKey::from_secret(key.secret()))?)
}

/// Signs a token valid from now.
pub fn admin_token_now(key: &AdminApiKey) -> Result<String, AppError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    sign_admin_token(key, now)
}
