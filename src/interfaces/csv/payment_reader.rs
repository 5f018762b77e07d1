use crate::domain::gateway::GatewayId;
use crate::domain::payment::{Amount, CardNumber, PaymentRequest};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// A raw payment row as it appears in the input CSV.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub gateway: String,
    pub card: String,
    pub amount: Decimal,
}

impl PaymentRecord {
    /// Parses the gateway tag and lifts the raw fields into validated domain
    /// values. Unknown tags fail with `UnknownGateway`, invariant violations
    /// with `ValidationError`.
    pub fn into_request(self) -> Result<(GatewayId, PaymentRequest)> {
        let gateway: GatewayId = self.gateway.parse()?;
        let amount = Amount::new(self.amount)?;
        let card_number = CardNumber::new(self.card)?;
        Ok((gateway, PaymentRequest::new(amount, card_number)))
    }
}

/// Reads payment records from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<PaymentRecord>`,
/// handling whitespace trimming and flexible record lengths automatically.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes payment records,
    /// so large files stream without loading the whole dataset into memory.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "gateway, card, amount\npagseguro, 1234567890123456, 150.00\nstripe, 4234567890123456, 250.00";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRecord>> = reader.payments().collect();

        assert_eq!(results.len(), 2);
        let record = results[0].as_ref().unwrap();
        assert_eq!(record.gateway, "pagseguro");
        assert_eq!(record.amount, dec!(150.00));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "gateway, card, amount\npagseguro, 1234567890123456, not_a_number";
        let reader = PaymentReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRecord>> = reader.payments().collect();

        assert!(results[0].is_err());
    }

    #[test]
    fn test_into_request_parses_domain_values() {
        let record = PaymentRecord {
            gateway: "mercadopago".to_string(),
            card: "5234567890123456".to_string(),
            amount: dec!(200.00),
        };

        let (gateway, request) = record.into_request().unwrap();
        assert_eq!(gateway, GatewayId::MercadoPago);
        assert_eq!(request.amount.value(), dec!(200.00));
        assert_eq!(request.card_number.as_str(), "5234567890123456");
    }

    #[test]
    fn test_into_request_rejects_unknown_gateway() {
        let record = PaymentRecord {
            gateway: "paypal".to_string(),
            card: "1234567890123456".to_string(),
            amount: dec!(10.00),
        };

        assert!(matches!(
            record.into_request(),
            Err(PaymentError::UnknownGateway(_))
        ));
    }

    #[test]
    fn test_into_request_rejects_bad_amount() {
        let record = PaymentRecord {
            gateway: "stripe".to_string(),
            card: "4234567890123456".to_string(),
            amount: dec!(-5.00),
        };

        assert!(matches!(
            record.into_request(),
            Err(PaymentError::ValidationError(_))
        ));
    }
}
