/// Canonical identity tuple extracted from an external authentication
/// payload. Ephemeral - derived per login, never persisted directly.
///
/// Produced either by [`crate::easy_auth::normalize`] (session-claims
/// endpoint payloads) or from [`crate::IdTokenClaims`] (interactive SDK
/// login). Both sources feed the same bridging path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExternalIdentity {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub subject_id: Option<String>,
}

impl ExternalIdentity {
    /// Bridging requires a stable external subject id.
    pub fn has_subject(&self) -> bool {
        self.subject_id.as_deref().is_some_and(|s| !s.is_empty())
    }
}
