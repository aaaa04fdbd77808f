//! Storage contract the client service is written against
use super::client::Client;
use super::error::StoreError;
use super::sale::Sale;

/// Raw persistence for clients and their sales.
///
/// Absence is never an error on lookups: [`get_by_rut`](Self::get_by_rut)
/// returns `Ok(None)`, and `Err` always means a real storage failure.
/// Mutations on an absent RUT return [`StoreError::NotFound`].
pub trait ClientRepository {
    fn get_all(&self) -> Result<Vec<Client>, StoreError>;

    fn get_by_rut(&self, rut: &str) -> Result<Option<Client>, StoreError>;

    /// Fails with [`StoreError::Conflict`] when the RUT is already taken.
    fn add(&self, client: &Client) -> Result<(), StoreError>;

    fn update(&self, client: &Client) -> Result<(), StoreError>;

    fn delete(&self, rut: &str) -> Result<(), StoreError>;

    /// Adds `delta` to the stored debt; negative values record a payment.
    fn adjust_debt(&self, rut: &str, delta: f64) -> Result<(), StoreError>;

    /// Sales owned by the client, ordered by document number.
    fn sales_by_client(&self, rut: &str) -> Result<Vec<Sale>, StoreError>;
}

