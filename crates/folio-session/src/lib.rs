pub mod bridge;
pub mod error;
pub mod state;

pub use bridge::SessionBridge;
pub use error::{Result, SessionError};
pub use state::{IdentityState, IdentityStateStore};
