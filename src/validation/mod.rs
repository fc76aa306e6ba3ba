use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const REQUIRED_FIELDS: [&str; 7] = [
    "transaction_id",
    "amount",
    "currency",
    "payer",
    "payee",
    "payment_method",
    "timestamp",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    #[error("Invalid field: {field} must be a string")]
    InvalidField { field: &'static str },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Raw submission body. A field holding JSON `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionPayload {
    pub transaction_id: Option<Value>,
    pub amount: Option<Value>,
    pub currency: Option<Value>,
    pub payer: Option<Value>,
    pub payee: Option<Value>,
    pub payment_method: Option<Value>,
    pub timestamp: Option<Value>,
}

/// A submission whose top-level fields are all present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub transaction_id: String,
    pub amount: Value,
    pub currency: String,
    pub payer: Value,
    pub payee: Value,
    pub payment_method: Value,
    pub timestamp: String,
}

impl SubmissionPayload {
    /// Reads a payload from a JSON object. Any other JSON shape yields `None`,
    /// including arrays that serde would otherwise map onto fields by position.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => serde_json::from_value(Value::Object(map)).ok(),
            _ => None,
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.transaction_id.is_some(),
            self.amount.is_some(),
            self.currency.is_some(),
            self.payer.is_some(),
            self.payee.is_some(),
            self.payment_method.is_some(),
            self.timestamp.is_some(),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(field, _)| *field)
            .collect()
    }

    /// Checks presence only; nested objects and `amount` are not inspected.
    pub fn validate(self) -> ValidationResult<ValidSubmission> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(ValidSubmission {
            transaction_id: require_string("transaction_id", self.transaction_id)?,
            amount: self.amount.unwrap_or_default(),
            currency: require_string("currency", self.currency)?,
            payer: self.payer.unwrap_or_default(),
            payee: self.payee.unwrap_or_default(),
            payment_method: self.payment_method.unwrap_or_default(),
            timestamp: require_string("timestamp", self.timestamp)?,
        })
    }
}

fn require_string(field: &'static str, value: Option<Value>) -> ValidationResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ValidationError::InvalidField { field }),
    }
}
