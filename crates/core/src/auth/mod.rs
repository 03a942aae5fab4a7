pub mod token;

pub use token::{AuthError, Claims, TokenVerifier};
