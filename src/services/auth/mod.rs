pub mod claims;
pub mod factory;
pub mod identity;
pub mod trusted_key;
pub mod verifier;

pub use claims::RawClaims;
pub use factory::build_token_verifier;
pub use identity::{Credentials, Extra, Identity, Info};
pub use trusted_key::TrustedKey;
pub use verifier::{TokenVerifier, VerifierOptions};
