use crate::domain::gateway::GatewayId;
use crate::domain::payment::{Amount, CardNumber, TransactionId, TransactionResult};
use crate::domain::ports::{
    CardValidator, CollaboratorSet, LogSink, TokenGenerator, TransactionLogger,
    TransactionProcessor,
};
use crate::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

const CARD_DIGITS: usize = 16;

const PAGSEGURO_PREFIX: &str = "PAGSEG";
const MERCADO_PAGO_PREFIX: &str = "MP";
const STRIPE_PREFIX: &str = "STRIPE";

/// Accepts cards with exactly the configured number of digits.
///
/// The length and leading-digit rules below are illustrative stand-ins for
/// real vendor validation (no Luhn, no brand tables).
pub struct ExactLengthValidator {
    digits: usize,
}

impl ExactLengthValidator {
    pub fn new(digits: usize) -> Self {
        Self { digits }
    }
}

impl CardValidator for ExactLengthValidator {
    fn validate(&self, card: &CardNumber) -> bool {
        let value = card.as_str();
        value.len() == self.digits && value.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Accepts cards with the configured number of digits and a specific leading
/// digit (the vendor's family discriminator).
pub struct LeadingDigitValidator {
    digits: usize,
    leading: char,
}

impl LeadingDigitValidator {
    pub fn new(digits: usize, leading: char) -> Self {
        Self { digits, leading }
    }
}

impl CardValidator for LeadingDigitValidator {
    fn validate(&self, card: &CardNumber) -> bool {
        let value = card.as_str();
        value.len() == self.digits
            && value.bytes().all(|b| b.is_ascii_digit())
            && value.starts_with(self.leading)
    }
}

/// Stand-in for a vendor's processing call. Produces
/// `<prefix>-<token>` identifiers through the injected token strategy;
/// uniqueness is best-effort, not collision-free.
pub struct TokenProcessor {
    prefix: &'static str,
    tokens: Arc<dyn TokenGenerator>,
}

impl TokenProcessor {
    pub fn new(prefix: &'static str, tokens: Arc<dyn TokenGenerator>) -> Self {
        Self { prefix, tokens }
    }
}

#[async_trait]
impl TransactionProcessor for TokenProcessor {
    async fn process(&self, _amount: Amount, _card: &CardNumber) -> Result<TransactionId> {
        Ok(TransactionId::new(format!(
            "{}-{}",
            self.prefix,
            self.tokens.token()
        )))
    }
}

/// Formats the vendor's timestamped log line and hands it to the sink.
pub struct SinkLogger {
    gateway_name: &'static str,
    sink: Arc<dyn LogSink>,
}

impl SinkLogger {
    pub fn new(gateway_name: &'static str, sink: Arc<dyn LogSink>) -> Self {
        Self { gateway_name, sink }
    }
}

impl TransactionLogger for SinkLogger {
    fn log_completed(&self, result: &TransactionResult) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        self.sink.write(&format!(
            "[{} Log] {}: Transação processada: {}",
            self.gateway_name, timestamp, result.transaction_id
        ));
    }
}

/// PagSeguro collaborator set: any 16-digit card, `PAGSEG-` identifiers.
pub fn pagseguro(sink: Arc<dyn LogSink>, tokens: Arc<dyn TokenGenerator>) -> CollaboratorSet {
    let gateway = GatewayId::PagSeguro;
    CollaboratorSet {
        gateway,
        validator: Box::new(ExactLengthValidator::new(CARD_DIGITS)),
        processor: Box::new(TokenProcessor::new(PAGSEGURO_PREFIX, tokens)),
        logger: Box::new(SinkLogger::new(gateway.name(), sink)),
    }
}

/// MercadoPago collaborator set: 16 digits starting with `5`, `MP-` identifiers.
pub fn mercado_pago(sink: Arc<dyn LogSink>, tokens: Arc<dyn TokenGenerator>) -> CollaboratorSet {
    let gateway = GatewayId::MercadoPago;
    CollaboratorSet {
        gateway,
        validator: Box::new(LeadingDigitValidator::new(CARD_DIGITS, '5')),
        processor: Box::new(TokenProcessor::new(MERCADO_PAGO_PREFIX, tokens)),
        logger: Box::new(SinkLogger::new(gateway.name(), sink)),
    }
}

/// Stripe collaborator set: 16 digits starting with `4`, `STRIPE-` identifiers.
pub fn stripe(sink: Arc<dyn LogSink>, tokens: Arc<dyn TokenGenerator>) -> CollaboratorSet {
    let gateway = GatewayId::Stripe;
    CollaboratorSet {
        gateway,
        validator: Box::new(LeadingDigitValidator::new(CARD_DIGITS, '4')),
        processor: Box::new(TokenProcessor::new(STRIPE_PREFIX, tokens)),
        logger: Box::new(SinkLogger::new(gateway.name(), sink)),
    }
}
