use super::gateway::GatewayId;
use super::payment::{Amount, CardNumber, TransactionId, TransactionResult};
use crate::error::Result;
use async_trait::async_trait;

pub trait CardValidator: Send + Sync {
    fn validate(&self, card: &CardNumber) -> bool;
}

#[async_trait]
pub trait TransactionProcessor: Send + Sync {
    async fn process(&self, amount: Amount, card: &CardNumber) -> Result<TransactionId>;
}

/// Builds and emits the log line for a completed transaction. Must never fail
/// the payment path; sink errors are swallowed downstream.
pub trait TransactionLogger: Send + Sync {
    fn log_completed(&self, result: &TransactionResult);
}

/// Log destination (console, memory, ...). Infallible by contract.
pub trait LogSink: Send + Sync {
    fn write(&self, message: &str);
}

/// Injectable identifier strategy so tests can supply a deterministic one.
pub trait TokenGenerator: Send + Sync {
    fn token(&self) -> String;
}

pub type CardValidatorBox = Box<dyn CardValidator>;
pub type TransactionProcessorBox = Box<dyn TransactionProcessor>;
pub type TransactionLoggerBox = Box<dyn TransactionLogger>;

/// The matched triple of collaborators for one gateway, bound to its identity
/// at construction. Built fresh per payment attempt and dropped afterwards.
pub struct CollaboratorSet {
    pub gateway: GatewayId,
    pub validator: CardValidatorBox,
    pub processor: TransactionProcessorBox,
    pub logger: TransactionLoggerBox,
}

impl std::fmt::Debug for CollaboratorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollaboratorSet")
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}

/// Produces a complete `CollaboratorSet` for a gateway identity, or fails
/// atomically with `UnknownGateway`. Read-only after initialization.
pub trait GatewayFactory: Send + Sync {
    fn create(&self, gateway: GatewayId) -> Result<CollaboratorSet>;
}

pub type GatewayFactoryBox = Box<dyn GatewayFactory>;
