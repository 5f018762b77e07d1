use crate::error::PaymentError;
use std::fmt;
use std::str::FromStr;

/// Identifies one supported payment gateway.
///
/// Adding a vendor means adding a variant here and registering its
/// collaborator builder with the factory; the orchestrator never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayId {
    PagSeguro,
    MercadoPago,
    Stripe,
}

impl GatewayId {
    pub const ALL: [GatewayId; 3] = [Self::PagSeguro, Self::MercadoPago, Self::Stripe];

    /// Vendor display name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PagSeguro => "PagSeguro",
            Self::MercadoPago => "MercadoPago",
            Self::Stripe => "Stripe",
        }
    }

    /// Lowercase tag accepted in input records and emitted in receipts.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PagSeguro => "pagseguro",
            Self::MercadoPago => "mercadopago",
            Self::Stripe => "stripe",
        }
    }
}

impl fmt::Display for GatewayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GatewayId {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pagseguro" => Ok(Self::PagSeguro),
            "mercadopago" => Ok(Self::MercadoPago),
            "stripe" => Ok(Self::Stripe),
            other => Err(PaymentError::UnknownGateway(other.to_string())),
        }
    }
}
