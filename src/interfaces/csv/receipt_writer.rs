use crate::domain::payment::{PaymentOutcome, PaymentRequest};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Completed,
    Rejected,
}

/// One output row per payment attempt. The card number is masked; the
/// transaction identifier column is empty for rejected payments.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Receipt {
    pub gateway: String,
    pub card: String,
    pub amount: Decimal,
    pub status: ReceiptStatus,
    pub transaction_id: String,
}

impl Receipt {
    pub fn from_outcome(request: &PaymentRequest, outcome: &PaymentOutcome) -> Self {
        let (gateway, status, transaction_id) = match outcome {
            PaymentOutcome::Completed(result) => (
                result.gateway,
                ReceiptStatus::Completed,
                result.transaction_id.to_string(),
            ),
            PaymentOutcome::Rejected { gateway, .. } => {
                (*gateway, ReceiptStatus::Rejected, String::new())
            }
        };
        Self {
            gateway: gateway.to_string(),
            card: request.card_number.masked(),
            amount: request.amount.value(),
            status,
            transaction_id,
        }
    }
}

/// Writes receipts as CSV to any `Write` target (stdout in the CLI).
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        self.writer.serialize(receipt)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
