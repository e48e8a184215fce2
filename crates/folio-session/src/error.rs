use folio_auth::AuthError;
use folio_db::DbError;

use thiserror::Error;

/// Session establishment can fail on either side of the bridge: the
/// external identity itself, or the account store underneath.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Db(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
