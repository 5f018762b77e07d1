use crate::domain::gateway::GatewayId;
use crate::domain::ports::{CollaboratorSet, GatewayFactory, LogSink, TokenGenerator};
use crate::error::{PaymentError, Result};
use crate::infrastructure::gateways;
use std::collections::HashMap;
use std::sync::Arc;

type CollaboratorBuilder = Box<dyn Fn() -> CollaboratorSet + Send + Sync>;

/// Maps gateway identities to builders that produce a fresh `CollaboratorSet`
/// per payment attempt.
///
/// All registration happens before the registry is handed to the
/// orchestrator; lookups never mutate, so the registry is safe to share
/// across concurrent requests without locking.
#[derive(Default)]
pub struct GatewayRegistry {
    builders: HashMap<GatewayId, CollaboratorBuilder>,
}

impl GatewayRegistry {
    /// Creates an empty registry. Looking up any gateway fails until it is
    /// registered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, gateway: GatewayId, builder: F)
    where
        F: Fn() -> CollaboratorSet + Send + Sync + 'static,
    {
        self.builders.insert(gateway, Box::new(builder));
    }

    /// Registry with all three supported vendors wired to the given sink and
    /// token strategy.
    pub fn with_defaults(sink: Arc<dyn LogSink>, tokens: Arc<dyn TokenGenerator>) -> Self {
        let mut registry = Self::new();
        {
            let sink = sink.clone();
            let tokens = tokens.clone();
            registry.register(GatewayId::PagSeguro, move || {
                gateways::pagseguro(sink.clone(), tokens.clone())
            });
        }
        {
            let sink = sink.clone();
            let tokens = tokens.clone();
            registry.register(GatewayId::MercadoPago, move || {
                gateways::mercado_pago(sink.clone(), tokens.clone())
            });
        }
        registry.register(GatewayId::Stripe, move || {
            gateways::stripe(sink.clone(), tokens.clone())
        });
        registry
    }
}

impl GatewayFactory for GatewayRegistry {
    fn create(&self, gateway: GatewayId) -> Result<CollaboratorSet> {
        self.builders
            .get(&gateway)
            .map(|build| build())
            .ok_or_else(|| PaymentError::UnknownGateway(gateway.to_string()))
    }
}
