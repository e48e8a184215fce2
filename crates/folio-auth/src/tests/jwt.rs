use crate::{AuthError, JwtValidator, SessionClaims, TokenIssuer};

use folio_core::Role;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn encode_claims(claims: &SessionClaims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

#[test]
fn given_issued_token_when_validated_then_round_trips() {
    let user_id = Uuid::new_v4();
    let issuer = TokenIssuer::with_hs256(SECRET, 3600);
    let validator = JwtValidator::with_hs256(SECRET);

    let token = issuer.issue(user_id, Role::Faculty).unwrap();
    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.role(), Role::Faculty);
}

#[test]
fn given_expired_token_when_validated_then_token_expired() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = SessionClaims::new(Uuid::new_v4(), Role::Student, 3600);
    claims.exp = chrono::Utc::now().timestamp() - 3600;
    let token = encode_claims(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_decode_error() {
    let validator = JwtValidator::with_hs256(b"wrong-secret-key-at-least-32-byt");
    let claims = SessionClaims::new(Uuid::new_v4(), Role::Student, 3600);
    let token = encode_claims(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_non_uuid_subject_when_validated_then_invalid_claim() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = SessionClaims::new(Uuid::new_v4(), Role::Student, 3600);
    claims.sub = "not-a-uuid".to_string();
    let token = encode_claims(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_unknown_role_claim_when_validated_then_invalid_claim() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = SessionClaims::new(Uuid::new_v4(), Role::Student, 3600);
    claims.role = "superuser".to_string();
    let token = encode_claims(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}
