//! Normalization of session-claims endpoint payloads.
//!
//! The enterprise identity layer returns one of three loosely-typed shapes
//! from its session-claims endpoint, depending on hosting flavor:
//!
//! 1. an array of provider entries, the first carrying a `user_claims`
//!    list of `{typ, val}` pairs (app-service style);
//! 2. the same entry carrying only flat `userDetails` / `user_id` fields;
//! 3. an object with a nested `clientPrincipal.claims` list
//!    (static-web-apps style).
//!
//! Shapes are tried in that order. Each field is resolved through a fixed,
//! ordered list of claim-type aliases; the ordering is a contract because
//! providers disagree on claim naming. Parse failures are logged and
//! reported as "no identity", never as an error.

use crate::ExternalIdentity;

use serde::Deserialize;
use serde_json::Value;

/// Claim-type aliases for the display name, in priority order.
const NAME_ALIASES: &[&str] = &[
    "name",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name",
];

/// Claim-type aliases for the email address, in priority order.
const EMAIL_ALIASES: &[&str] = &[
    "preferred_username",
    "emails",
    "email",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress",
];

/// Claim-type aliases for the stable subject id, in priority order.
const SUBJECT_ALIASES: &[&str] = &[
    "oid",
    "http://schemas.microsoft.com/identity/claims/objectidentifier",
];

/// One `{typ, val}` claim pair. Some deployments spell the keys out as
/// `type`/`value`; both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
struct ClaimPair {
    #[serde(alias = "type")]
    typ: String,
    #[serde(alias = "value")]
    val: String,
}

/// First element of the app-service array payload.
#[derive(Debug, Deserialize)]
struct ProviderEntry {
    #[serde(default)]
    user_claims: Vec<ClaimPair>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default, rename = "userDetails")]
    user_details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrincipalEnvelope {
    client_principal: Option<Principal>,
}

#[derive(Debug, Deserialize)]
struct Principal {
    #[serde(default)]
    claims: Vec<ClaimPair>,
}

/// The recognized payload shapes, one variant per wire format.
#[derive(Debug)]
enum PayloadShape {
    ProviderClaims(Vec<ClaimPair>),
    ProviderFlat {
        user_details: Option<String>,
        user_id: Option<String>,
    },
    ClientPrincipal(Vec<ClaimPair>),
}

/// Extract a canonical identity tuple from an untrusted session-claims
/// payload. Returns `None` when no shape matches or parsing fails; the
/// caller must treat that as "no identity available", not as an error.
pub fn normalize(payload: &Value) -> Option<ExternalIdentity> {
    let shape = classify(payload)?;
    Some(extract(shape))
}

/// Match the payload against the known shapes, in contract order.
fn classify(payload: &Value) -> Option<PayloadShape> {
    if let Value::Array(entries) = payload {
        let first = entries.first()?;
        let entry: ProviderEntry = match serde_json::from_value(first.clone()) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Unparseable session-claims provider entry: {}", e);
                return None;
            }
        };

        if !entry.user_claims.is_empty() {
            return Some(PayloadShape::ProviderClaims(entry.user_claims));
        }
        if entry.user_id.is_some() || entry.user_details.is_some() {
            return Some(PayloadShape::ProviderFlat {
                user_details: entry.user_details,
                user_id: entry.user_id,
            });
        }
        return None;
    }

    let envelope: PrincipalEnvelope = match serde_json::from_value(payload.clone()) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::warn!("Unparseable session-claims payload: {}", e);
            return None;
        }
    };

    let claims = envelope.client_principal?.claims;
    if claims.is_empty() {
        return None;
    }
    Some(PayloadShape::ClientPrincipal(claims))
}

/// Total extraction per shape. No side effects.
fn extract(shape: PayloadShape) -> ExternalIdentity {
    match shape {
        PayloadShape::ProviderClaims(claims) | PayloadShape::ClientPrincipal(claims) => {
            ExternalIdentity {
                display_name: first_claim(&claims, NAME_ALIASES),
                email: first_claim(&claims, EMAIL_ALIASES),
                subject_id: first_claim(&claims, SUBJECT_ALIASES),
            }
        }
        PayloadShape::ProviderFlat {
            user_details,
            user_id,
        } => ExternalIdentity {
            // The flat shape carries no subject claim; the opaque provider
            // user id stands in for both email and subject.
            display_name: user_details,
            email: user_id.clone(),
            subject_id: user_id,
        },
    }
}

/// First claim whose type matches any alias, honoring alias order.
fn first_claim(claims: &[ClaimPair], aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|alias| {
        claims
            .iter()
            .find(|c| c.typ == *alias)
            .map(|c| c.val.clone())
    })
}
