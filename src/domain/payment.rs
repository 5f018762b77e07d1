use crate::domain::gateway::GatewayId;
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a positive monetary amount for payments.
///
/// Ensures that payment amounts are always positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A card number as supplied by the caller.
///
/// Only non-emptiness is enforced here; whether the number is acceptable is a
/// per-gateway concern decided by that gateway's validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, PaymentError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(PaymentError::ValidationError(
                "Card number must not be empty".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the number with all but the last four characters masked,
    /// suitable for receipts and logs.
    pub fn masked(&self) -> String {
        let len = self.0.chars().count();
        let visible_from = len.saturating_sub(4);
        self.0
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible_from { '*' } else { c })
            .collect()
    }
}

/// Opaque identifier returned by a successful processing call, used for
/// reconciliation and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single payment attempt. Which gateway handles it is selected separately
/// at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: Amount,
    pub card_number: CardNumber,
}

impl PaymentRequest {
    pub fn new(amount: Amount, card_number: CardNumber) -> Self {
        Self {
            amount,
            card_number,
        }
    }
}

/// Produced only after successful validation and processing.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult {
    pub transaction_id: TransactionId,
    pub gateway: GatewayId,
}

/// Why a gateway turned a payment down. Rejection is business logic, not a
/// fault, so it travels inside `PaymentOutcome` rather than `PaymentError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    CardRejected,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardRejected => f.write_str("card rejected by gateway validation"),
        }
    }
}

/// Terminal state of one payment attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Completed(TransactionResult),
    Rejected {
        gateway: GatewayId,
        reason: RejectionReason,
    },
}

impl PaymentOutcome {
    pub fn transaction_id(&self) -> Option<&TransactionId> {
        match self {
            Self::Completed(result) => Some(&result.transaction_id),
            Self::Rejected { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
