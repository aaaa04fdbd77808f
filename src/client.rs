//! Client record and the validation pass shared by add and update
use super::error::ValidationError;
use super::utils::is_blank;

// Key in the clients tree is the RUT, the record is stored CBOR encoded
#[derive(minicbor::Encode, minicbor::Decode, Debug, Default, Clone, PartialEq)]
pub struct Client {
    #[n(0)]
    pub rut: String, // tax id, primary key. no check digit validation
    #[n(1)]
    pub name: String,
    #[n(2)]
    pub address: String,
    #[n(3)]
    pub giro: String, // line of business
    #[n(4)]
    pub debt: f64, // stored base balance, credit sales are added on top
}

impl Client {
    /// Construct an empty client for the given RUT, fill it in with the setters
    pub fn new(rut: impl Into<String>) -> Self {
        Self {
            rut: rut.into(),
            ..Self::default()
        }
    }
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
    pub fn set_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
    pub fn set_giro(mut self, giro: impl Into<String>) -> Self {
        self.giro = giro.into();
        self
    }
    pub fn set_debt(mut self, debt: f64) -> Self {
        self.debt = debt;
        self
    }
    /// Runs every field rule in order and stops at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_rut(&self.rut)?;

        if is_blank(&self.name) {
            return Err(ValidationError::NameRequired);
        }
        if is_blank(&self.address) {
            return Err(ValidationError::AddressRequired);
        }
        if is_blank(&self.giro) {
            return Err(ValidationError::GiroRequired);
        }
        if !self.debt.is_finite() {
            return Err(ValidationError::InvalidDebt);
        }
        if self.debt < 0.0 {
            return Err(ValidationError::NegativeDebt);
        }

        Ok(())
    }
}

pub fn validate_rut(rut: &str) -> Result<(), ValidationError> {
    if is_blank(rut) {
        return Err(ValidationError::RutRequired);
    }
    Ok(())
}

pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount);
    }
    if amount == 0.0 {
        return Err(ValidationError::ZeroAmount);
    }
    Ok(())
}
