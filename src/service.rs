//! Service layer API for client lifecycle and debt operations
use super::client::{Client, validate_amount, validate_rut};
use super::error::ClientError;
use super::repository::ClientRepository;
use super::sale::Sale;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

pub struct ClientService<R: ClientRepository + ?Sized> {
    repository: Arc<R>,
}

/// Breakdown of what a client owes.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtSummary {
    pub rut: String,
    pub stored: f64, // balance on the client record
    pub credit: f64, // sum of sales paid on credit
    pub total: f64,
}

impl<R: ClientRepository + ?Sized> ClientService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Load a client, absence becomes [`ClientError::NotFound`]
    fn load_client(&self, rut: &str) -> Result<Client, ClientError> {
        self.repository
            .get_by_rut(rut)?
            .ok_or_else(|| ClientError::NotFound(rut.to_string()))
    }

    /// Every stored client
    pub fn list_all(&self) -> Result<Vec<Client>, ClientError> {
        info!("Listing all clients");

        self.repository
            .get_all()
            .map_err(ClientError::Persistence)
            .inspect_err(|err| error!(error = %err, "Failed to list clients"))
    }

    #[instrument(skip(self))]
    pub fn get_by_rut(&self, rut: &str) -> Result<Client, ClientError> {
        validate_rut(rut)?;
        info!("Looking up client");

        self.load_client(rut)
            .inspect_err(|err| error!(error = %err, "Failed to get client"))
    }

    /// Register a new client. Fails with [`ClientError::Duplicate`] when the
    /// RUT is already in use.
    #[instrument(skip(self, client), fields(rut = %client.rut))]
    pub fn add(&self, client: &Client) -> Result<(), ClientError> {
        client.validate()?;
        debug!(?client, "add called");

        // absent is the expected outcome here, anything else stops the insert
        let result = match self.repository.get_by_rut(&client.rut) {
            Ok(Some(_)) => Err(ClientError::Duplicate(client.rut.clone())),
            Ok(None) => {
                info!("Adding new client");
                self.repository.add(client).map_err(ClientError::from)
            }
            Err(err) => Err(err.into()),
        };

        result.inspect_err(|err| error!(error = %err, "Failed to add client"))
    }

    /// Replace the stored record. Existence is checked by the repository.
    #[instrument(skip(self, client), fields(rut = %client.rut))]
    pub fn update(&self, client: &Client) -> Result<(), ClientError> {
        client.validate()?;
        debug!(?client, "update called");
        info!("Updating client");

        self.repository
            .update(client)
            .map_err(ClientError::from)
            .inspect_err(|err| error!(error = %err, "Failed to update client"))
    }

    /// Remove a client that has no sales on record.
    #[instrument(skip(self))]
    pub fn delete(&self, rut: &str) -> Result<(), ClientError> {
        validate_rut(rut)?;

        let result = self
            .repository
            .sales_by_client(rut)
            .map_err(ClientError::from)
            .and_then(|sales| {
                if !sales.is_empty() {
                    return Err(ClientError::HasSales {
                        rut: rut.to_string(),
                        sales: sales.len(),
                    });
                }

                info!("Deleting client");
                self.repository.delete(rut).map_err(ClientError::from)
            });

        result.inspect_err(|err| error!(error = %err, "Failed to delete client"))
    }

    /// Add `amount` to the stored debt. Negative amounts are payments.
    #[instrument(skip(self))]
    pub fn adjust_debt(&self, rut: &str, amount: f64) -> Result<(), ClientError> {
        validate_rut(rut)?;
        validate_amount(amount)?;
        info!("Adjusting client debt");

        self.repository
            .adjust_debt(rut, amount)
            .map_err(ClientError::from)
            .inspect_err(|err| error!(error = %err, "Failed to adjust client debt"))
    }

    #[instrument(skip(self))]
    pub fn sales_for(&self, rut: &str) -> Result<Vec<Sale>, ClientError> {
        validate_rut(rut)?;
        info!("Listing client sales");

        self.repository
            .sales_by_client(rut)
            .map_err(ClientError::from)
            .inspect_err(|err| error!(error = %err, "Failed to list client sales"))
    }

    /// Stored debt plus every sale paid on credit. Read only.
    #[instrument(skip(self))]
    pub fn debt_summary(&self, rut: &str) -> Result<DebtSummary, ClientError> {
        validate_rut(rut)?;
        info!("Calculating total debt");

        let result = self.load_client(rut).and_then(|client| {
            let sales = self.repository.sales_by_client(rut)?;
            let credit: f64 = sales
                .iter()
                .filter(|sale| sale.paid_on_credit)
                .map(|sale| sale.total)
                .sum();

            Ok(DebtSummary {
                rut: client.rut,
                stored: client.debt,
                credit,
                total: client.debt + credit,
            })
        });

        result
            .inspect(|summary| info!(total = summary.total, "Total debt calculated"))
            .inspect_err(|err| error!(error = %err, "Failed to calculate total debt"))
    }

    pub fn total_debt(&self, rut: &str) -> Result<f64, ClientError> {
        Ok(self.debt_summary(rut)?.total)
    }
}
