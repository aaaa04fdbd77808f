//! In-memory repository shared by the integration tests. Counts every call
//! that reaches it and can be told to fail lookups or reject inserts.
#![allow(dead_code)]

use sermac_admin::{
    client::Client, error::StoreError, repository::ClientRepository, sale::Sale,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct RecordingRepository {
    pub clients: RefCell<BTreeMap<String, Client>>,
    pub sales: RefCell<Vec<Sale>>,
    pub calls: Cell<usize>,
    pub fail_lookups: Cell<bool>,
    pub conflict_on_add: Cell<bool>,
}

impl RecordingRepository {
    pub fn with_client(client: Client) -> Self {
        let repository = Self::default();
        repository
            .clients
            .borrow_mut()
            .insert(client.rut.clone(), client);
        repository
    }

    pub fn stored(&self) -> usize {
        self.clients.borrow().len()
    }

    fn touch(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl ClientRepository for RecordingRepository {
    fn get_all(&self) -> Result<Vec<Client>, StoreError> {
        self.touch();
        Ok(self.clients.borrow().values().cloned().collect())
    }

    fn get_by_rut(&self, rut: &str) -> Result<Option<Client>, StoreError> {
        self.touch();
        if self.fail_lookups.get() {
            return Err(StoreError::Codec("simulated corrupt record".into()));
        }
        Ok(self.clients.borrow().get(rut).cloned())
    }

    fn add(&self, client: &Client) -> Result<(), StoreError> {
        self.touch();
        let mut clients = self.clients.borrow_mut();
        if self.conflict_on_add.get() || clients.contains_key(&client.rut) {
            return Err(StoreError::Conflict(client.rut.clone()));
        }
        clients.insert(client.rut.clone(), client.clone());
        Ok(())
    }

    fn update(&self, client: &Client) -> Result<(), StoreError> {
        self.touch();
        match self.clients.borrow_mut().get_mut(&client.rut) {
            Some(stored) => {
                *stored = client.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(client.rut.clone())),
        }
    }

    fn delete(&self, rut: &str) -> Result<(), StoreError> {
        self.touch();
        self.clients
            .borrow_mut()
            .remove(rut)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(rut.to_string()))
    }

    fn adjust_debt(&self, rut: &str, delta: f64) -> Result<(), StoreError> {
        self.touch();
        match self.clients.borrow_mut().get_mut(rut) {
            Some(stored) => {
                stored.debt += delta;
                Ok(())
            }
            None => Err(StoreError::NotFound(rut.to_string())),
        }
    }

    fn sales_by_client(&self, rut: &str) -> Result<Vec<Sale>, StoreError> {
        self.touch();
        Ok(self
            .sales
            .borrow()
            .iter()
            .filter(|sale| sale.rut == rut)
            .cloned()
            .collect())
    }
}
