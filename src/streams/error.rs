use derive_more::{Display, Error};

/// No account has the requested email address.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot find Account by email={email}")]
pub struct AccountNotFound {
    pub email: String,
}

/// Two accounts produced the same key while collecting into a map with unique keys.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Duplicate key {key}")]
pub struct DuplicateKey {
    pub key: String,
}
