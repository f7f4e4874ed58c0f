//! Authenticated session management.
//!
//! Holds the client's identity: bearer token, role, and the canonical
//! user record. The state machine mirrors the login surface of the
//! reservation service:
//!
//! ```text
//! Restore ──► /me ──► RestoreVerified          (persisted token valid)
//!                └──► RestoreFailed ──► guest  (token rejected, storage cleared)
//!
//! Login/Register ──► token ──► /me ──► SessionEstablished
//!                        └──────────► AuthFailed (server message surfaced)
//! ```
//!
//! Two invariants hold throughout:
//!
//! - `Guest` role ⟺ no token. The persisted role is only a hint until the
//!   `/me` response lands; consumers must not treat `role` as
//!   authoritative while `loading` is true.
//! - `SessionEstablished` and `Logout` update in-memory state, durable
//!   storage, and the shared [`SessionContext`] together - no partial
//!   state is observable.

pub mod actions;
pub mod context;
pub mod environment;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod store;

pub use actions::SessionAction;
pub use context::{SessionContext, SessionSnapshot};
pub use environment::{AuthApi, ProductionSessionEnvironment, SessionEnvironment};
pub use reducer::SessionReducer;
pub use state::{PersistedSession, SessionState, UserProfile};
pub use storage::{FileSessionStorage, SessionStorage, StorageError};
pub use store::SessionStore;
