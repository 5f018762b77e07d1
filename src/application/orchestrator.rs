use crate::domain::gateway::GatewayId;
use crate::domain::payment::{PaymentOutcome, PaymentRequest, RejectionReason, TransactionResult};
use crate::domain::ports::GatewayFactoryBox;
use crate::error::{PaymentError, Result};
use std::time::Duration;
use tokio::time::timeout;

/// Deadline applied to a single processor call unless overridden.
pub const DEFAULT_PROCESSOR_TIMEOUT: Duration = Duration::from_secs(5);

/// The main entry point for payment dispatch.
///
/// `PaymentOrchestrator` resolves a gateway's collaborator set through the
/// factory and runs the fixed sequence: validate, process, log. It contains no
/// per-gateway branching; everything vendor-specific lives behind the ports.
pub struct PaymentOrchestrator {
    factory: GatewayFactoryBox,
    processor_timeout: Duration,
}

impl PaymentOrchestrator {
    pub fn new(factory: GatewayFactoryBox) -> Self {
        Self {
            factory,
            processor_timeout: DEFAULT_PROCESSOR_TIMEOUT,
        }
    }

    pub fn with_processor_timeout(mut self, deadline: Duration) -> Self {
        self.processor_timeout = deadline;
        self
    }

    /// Runs one payment attempt through the selected gateway.
    ///
    /// A failed card validation is an expected outcome and returns
    /// `Ok(PaymentOutcome::Rejected { .. })` without touching the processor or
    /// the logger. Only infrastructure problems (unknown gateway, processor
    /// failure or timeout) surface as errors.
    pub async fn process_payment(
        &self,
        request: &PaymentRequest,
        gateway: GatewayId,
    ) -> Result<PaymentOutcome> {
        let set = self.factory.create(gateway)?;

        if !set.validator.validate(&request.card_number) {
            return Ok(PaymentOutcome::Rejected {
                gateway,
                reason: RejectionReason::CardRejected,
            });
        }

        let processing = set.processor.process(request.amount, &request.card_number);
        let transaction_id = timeout(self.processor_timeout, processing)
            .await
            .map_err(|_| PaymentError::ProcessorTimeout(self.processor_timeout))??;

        let result = TransactionResult {
            transaction_id,
            gateway,
        };
        set.logger.log_completed(&result);

        Ok(PaymentOutcome::Completed(result))
    }
}
