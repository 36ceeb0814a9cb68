use crate::port::PaymentGateway;

/// Stand-in for the provider's payment gateway. Logs the charge and
/// returns; swapping in the real HTTP client only touches this adapter.
#[derive(Debug, Default)]
pub struct ProviderPaymentGateway;

impl ProviderPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentGateway for ProviderPaymentGateway {
    fn make_payment(&self, account_id: u64, amount: u64) {
        tracing::info!(account_id, amount, "payment taken");
    }
}
