pub mod credentials;
pub mod errors;
pub mod navigation;
pub mod session;

pub use credentials::Credentials;
pub use errors::{AuthError, AuthResult, StoreError};
pub use navigation::Destination;
pub use session::Session;
