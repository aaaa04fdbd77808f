//! sled backed implementation of [`ClientRepository`]
use super::client::Client;
use super::error::StoreError;
use super::repository::ClientRepository;
use super::sale::Sale;
use super::utils::{sale_key, sale_prefix};
use sled::Transactional;
use sled::transaction::{ConflictableTransactionError, TransactionError, TransactionResult};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const CLIENTS_TREE: &str = "clients";
const SALES_TREE: &str = "sales";

pub struct SledStore {
    instance: Arc<sled::Db>,
    clients: sled::Tree,
    sales: sled::Tree, // keyed by utils::sale_key
}

impl SledStore {
    pub fn new(instance: Arc<sled::Db>) -> Result<Self, StoreError> {
        let clients = instance.open_tree(CLIENTS_TREE)?;
        let sales = instance.open_tree(SALES_TREE)?;

        Ok(Self {
            instance,
            clients,
            sales,
        })
    }

    /// Open (or create) a database directory at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Self::new(Arc::new(db))
    }

    /// Record a sale for an existing client. Replaces a sale with the same
    /// document number for that client.
    pub fn record_sale(&self, sale: &Sale) -> Result<(), StoreError> {
        let key = sale_key(&sale.rut, sale.document_number);
        let encoded = minicbor::to_vec(sale)?;

        // client lookup and sale insert in one transaction so the sale can't
        // land on a client removed in between
        let result = (&self.clients, &self.sales).transaction(|(clients, sales)| {
            if clients.get(sale.rut.as_bytes())?.is_none() {
                return Err(ConflictableTransactionError::Abort(StoreError::NotFound(
                    sale.rut.clone(),
                )));
            }
            sales.insert(key.as_slice(), encoded.as_slice())?;
            Ok(())
        });
        flatten(result)?;

        debug!(rut = %sale.rut, document = sale.document_number, "Recorded sale");
        Ok(())
    }

    /// Drop every client and sale.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.sales.clear()?;
        self.clients.clear()?;
        debug!("Store reset");
        Ok(())
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        self.instance.flush()?;
        Ok(())
    }
}

impl ClientRepository for SledStore {
    fn get_all(&self) -> Result<Vec<Client>, StoreError> {
        let mut clients = vec![];
        for entry in self.clients.iter() {
            let (_, value) = entry?;
            clients.push(minicbor::decode(&value)?);
        }
        Ok(clients)
    }

    fn get_by_rut(&self, rut: &str) -> Result<Option<Client>, StoreError> {
        match self.clients.get(rut.as_bytes())? {
            Some(value) => Ok(Some(minicbor::decode(&value)?)),
            None => Ok(None),
        }
    }

    fn add(&self, client: &Client) -> Result<(), StoreError> {
        let encoded = minicbor::to_vec(client)?;

        // only swap in when the key is vacant
        let swapped =
            self.clients
                .compare_and_swap(client.rut.as_bytes(), None as Option<&[u8]>, Some(encoded))?;
        if swapped.is_err() {
            return Err(StoreError::Conflict(client.rut.clone()));
        }

        Ok(())
    }

    fn update(&self, client: &Client) -> Result<(), StoreError> {
        let encoded = minicbor::to_vec(client)?;

        let result = self.clients.transaction(|tx| {
            if tx.get(client.rut.as_bytes())?.is_none() {
                return Err(ConflictableTransactionError::Abort(StoreError::NotFound(
                    client.rut.clone(),
                )));
            }
            tx.insert(client.rut.as_bytes(), encoded.as_slice())?;
            Ok(())
        });

        flatten(result)
    }

    fn delete(&self, rut: &str) -> Result<(), StoreError> {
        match self.clients.remove(rut.as_bytes())? {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(rut.to_string())),
        }
    }

    fn adjust_debt(&self, rut: &str, delta: f64) -> Result<(), StoreError> {
        let result = self.clients.transaction(|tx| {
            let Some(value) = tx.get(rut.as_bytes())? else {
                return Err(ConflictableTransactionError::Abort(StoreError::NotFound(
                    rut.to_string(),
                )));
            };

            let mut client: Client = minicbor::decode(&value)
                .map_err(|e| ConflictableTransactionError::Abort(StoreError::from(e)))?;
            client.debt += delta;

            let encoded = minicbor::to_vec(&client)
                .map_err(|e| ConflictableTransactionError::Abort(StoreError::from(e)))?;
            tx.insert(rut.as_bytes(), encoded)?;
            Ok(())
        });

        flatten(result)
    }

    fn sales_by_client(&self, rut: &str) -> Result<Vec<Sale>, StoreError> {
        let mut sales = vec![];
        for entry in self.sales.scan_prefix(sale_prefix(rut)) {
            let (_, value) = entry?;
            sales.push(minicbor::decode(&value)?);
        }
        Ok(sales)
    }
}

fn flatten<T>(result: TransactionResult<T, StoreError>) -> Result<T, StoreError> {
    result.map_err(|err| match err {
        TransactionError::Abort(err) => err,
        TransactionError::Storage(err) => StoreError::Storage(err),
    })
}
