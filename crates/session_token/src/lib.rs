mod claims;

pub use claims::{Error, TokenClaims, decode_claims};
