//! Bridges a normalized external identity onto a backend account.
//!
//! First login creates the account document with the default role; every
//! later login merge-updates it. The merge never touches `role` or
//! `created_at`, so an admin-assigned role survives any number of logins.

use crate::Result;

use folio_auth::{AuthError, ExternalIdentity};
use folio_core::UserProfile;
use folio_db::AccountRepository;

use std::panic::Location;

use chrono::{SubsecRound, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Namespace for deriving account ids from external subject ids.
const ACCOUNT_ID_NAMESPACE: Uuid = Uuid::from_u128(0x9e307a61_c6b9_4c1f_8e07_3d5a2b4177aa);

pub struct SessionBridge {
    accounts: AccountRepository,
}

impl SessionBridge {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
        }
    }

    /// The backend id is a deterministic function of the external
    /// subject. Concurrent first logins from duplicate tabs compute the
    /// same document id, so the store-level upsert collapses them into
    /// one account instead of racing two inserts.
    pub fn account_id(subject: &str) -> Uuid {
        Uuid::new_v5(&ACCOUNT_ID_NAMESPACE, subject.as_bytes())
    }

    /// Resolve the identity to its account, creating or merge-updating
    /// the account document. Idempotent per subject: repeated logins for
    /// the same subject land on the same document.
    pub async fn establish(&self, identity: &ExternalIdentity) -> Result<UserProfile> {
        if !identity.has_subject() {
            return Err(AuthError::MissingIdentity {
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }
        let subject = identity.subject_id.as_deref().unwrap_or_default();
        let account_id = Self::account_id(subject);

        // Stored timestamps carry second precision; truncate so the
        // returned profile equals what a re-read would yield.
        let now = Utc::now().trunc_subsecs(0);
        match self.accounts.find_by_id(account_id).await? {
            Some(mut existing) => {
                // Merge: a login carrying fewer claims than the last one
                // must not erase what we already know.
                if identity.email.is_some() {
                    existing.email = identity.email.clone();
                }
                if identity.display_name.is_some() {
                    existing.name = identity.display_name.clone();
                }
                existing.last_login_at = now;
                self.accounts.update(&existing).await?;
                log::debug!("Bridged returning account {}", existing.id);
                Ok(existing)
            }
            None => {
                let profile = UserProfile::new(
                    account_id,
                    Some(subject.to_string()),
                    identity.email.clone(),
                    identity.display_name.clone(),
                    now,
                );
                self.accounts.create(&profile).await?;
                log::info!("Created account {} for new external subject", profile.id);
                Ok(profile)
            }
        }
    }
}
