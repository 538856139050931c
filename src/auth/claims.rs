use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the identity provider's bearer tokens. The provider
/// signs these; this service only validates them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
    pub aud: String,
}
