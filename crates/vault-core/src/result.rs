use crate::error::VaultError;

pub type VaultResult<T> = Result<T, VaultError>;
