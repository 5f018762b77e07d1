use async_trait::async_trait;
use paygate::domain::gateway::GatewayId;
use paygate::domain::payment::{Amount, CardNumber, TransactionId, TransactionResult};
use paygate::domain::ports::{
    CardValidator, CollaboratorSet, TransactionLogger, TransactionProcessor,
};
use paygate::error::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Call counters for one gateway's spy collaborators.
#[derive(Default)]
pub struct SpyCounters {
    pub validations: AtomicUsize,
    pub processings: AtomicUsize,
    pub logs: AtomicUsize,
}

impl SpyCounters {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn untouched(&self) -> bool {
        self.validations.load(Ordering::SeqCst) == 0
            && self.processings.load(Ordering::SeqCst) == 0
            && self.logs.load(Ordering::SeqCst) == 0
    }
}

pub struct SpyValidator {
    counters: Arc<SpyCounters>,
    accept: bool,
}

impl CardValidator for SpyValidator {
    fn validate(&self, _card: &CardNumber) -> bool {
        self.counters.validations.fetch_add(1, Ordering::SeqCst);
        self.accept
    }
}

pub struct SpyProcessor {
    counters: Arc<SpyCounters>,
    prefix: &'static str,
}

#[async_trait]
impl TransactionProcessor for SpyProcessor {
    async fn process(&self, _amount: Amount, _card: &CardNumber) -> Result<TransactionId> {
        self.counters.processings.fetch_add(1, Ordering::SeqCst);
        Ok(TransactionId::new(format!("{}-spytoken", self.prefix)))
    }
}

pub struct SpyLogger {
    counters: Arc<SpyCounters>,
}

impl TransactionLogger for SpyLogger {
    fn log_completed(&self, _result: &TransactionResult) {
        self.counters.logs.fetch_add(1, Ordering::SeqCst);
    }
}

/// A complete collaborator set whose members only count their invocations.
pub fn spy_set(
    gateway: GatewayId,
    counters: Arc<SpyCounters>,
    accept: bool,
    prefix: &'static str,
) -> CollaboratorSet {
    CollaboratorSet {
        gateway,
        validator: Box::new(SpyValidator {
            counters: counters.clone(),
            accept,
        }),
        processor: Box::new(SpyProcessor {
            counters: counters.clone(),
            prefix,
        }),
        logger: Box::new(SpyLogger { counters }),
    }
}
