use std::fmt;

/// Shared secret gating the admin surface. Loaded once at startup from
/// `ADMIN_ACCESS_KEY` and held in application state.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminAccessKey(String);

impl AdminAccessKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_env() -> Result<Self, std::env::VarError> {
        std::env::var("ADMIN_ACCESS_KEY").map(Self)
    }

    pub fn verify(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for AdminAccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminAccessKey(***)")
    }
}
