/// Failures raised by a [`ClientRepository`](crate::repository::ClientRepository).
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("No client stored under RUT {0}")]
    NotFound(String),
    #[error("A client is already stored under RUT {0}")]
    Conflict(String),
    #[error("Failed to encode or decode a stored record: {0}")]
    Codec(String),
    #[error("Storage failure: {0}")]
    Storage(#[from] sled::Error),
}

/// Broken preconditions, always detected before storage is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("identifier required")]
    RutRequired,
    #[error("name required")]
    NameRequired,
    #[error("address required")]
    AddressRequired,
    #[error("giro required")]
    GiroRequired,
    #[error("debt must not be negative")]
    NegativeDebt,
    #[error("debt must be a finite number")]
    InvalidDebt,
    #[error("amount must not be zero")]
    ZeroAmount,
    #[error("amount must be a finite number")]
    InvalidAmount,
}

/// Errors returned by [`ClientService`](crate::service::ClientService).
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Client validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Client not found: {0}")]
    NotFound(String),
    #[error("Client already exists: {0}")]
    Duplicate(String),
    #[error("Client {rut} has {sales} associated sale(s) and cannot be deleted")]
    HasSales { rut: String, sales: usize },
    #[error("Client persistence error: {0}")]
    Persistence(StoreError),
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(rut) => ClientError::NotFound(rut),
            // unique key backstop in storage, surfaces the same as the service check
            StoreError::Conflict(rut) => ClientError::Duplicate(rut),
            other => ClientError::Persistence(other),
        }
    }
}

impl From<minicbor::decode::Error> for StoreError {
    fn from(err: minicbor::decode::Error) -> Self {
        StoreError::Codec(err.to_string())
    }
}

impl<E: std::fmt::Display> From<minicbor::encode::Error<E>> for StoreError {
    fn from(err: minicbor::encode::Error<E>) -> Self {
        StoreError::Codec(err.to_string())
    }
}
