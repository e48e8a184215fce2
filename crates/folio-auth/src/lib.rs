pub mod claims;
pub mod easy_auth;
pub mod error;
pub mod external_identity;
pub mod id_token;
pub mod jwt_validator;
pub mod token_issuer;

pub use claims::SessionClaims;
pub use error::{AuthError, Result};
pub use external_identity::ExternalIdentity;
pub use id_token::IdTokenClaims;
pub use jwt_validator::JwtValidator;
pub use token_issuer::TokenIssuer;

#[cfg(test)]
mod tests;
