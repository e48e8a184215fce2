//! Observable session lifecycle.
//!
//! A watch channel carries the current identity state to any number of
//! subscribers. Every transition settles in either `Ready` or
//! `SignedOut`; a profile that fails to load degrades the session to
//! `Ready` without a profile rather than wedging subscribers in a
//! loading state.

use folio_core::UserProfile;
use folio_db::AccountRepository;

use sqlx::SqlitePool;
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum IdentityState {
    /// Initial state, before the first sign-in or sign-out signal.
    Loading,
    SignedOut,
    /// Authenticated; the account document fetch is in flight.
    ProfileLoading { user_id: Uuid },
    /// Authenticated and settled. `profile` is `None` when the account
    /// document could not be loaded.
    Ready {
        user_id: Uuid,
        profile: Option<UserProfile>,
    },
}

pub struct IdentityStateStore {
    accounts: AccountRepository,
    tx: watch::Sender<IdentityState>,
}

impl IdentityStateStore {
    pub fn new(pool: SqlitePool) -> Self {
        let (tx, _) = watch::channel(IdentityState::Loading);
        Self {
            accounts: AccountRepository::new(pool),
            tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<IdentityState> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> IdentityState {
        self.tx.borrow().clone()
    }

    /// Handle a sign-in signal: announce the profile fetch, then settle
    /// in `Ready` whether or not the account document loads.
    pub async fn signed_in(&self, user_id: Uuid) {
        self.tx
            .send_replace(IdentityState::ProfileLoading { user_id });

        let profile = match self.accounts.find_by_id(user_id).await {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => {
                log::warn!("No account document for signed-in user {}", user_id);
                None
            }
            Err(e) => {
                log::warn!("Profile load failed for user {}: {}", user_id, e);
                None
            }
        };

        self.tx.send_replace(IdentityState::Ready { user_id, profile });
    }

    pub fn signed_out(&self) {
        self.tx.send_replace(IdentityState::SignedOut);
    }
}
