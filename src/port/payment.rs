/// Third-party payment gateway.
///
/// The service only calls this after every rule has passed, and the
/// gateway is assumed to take the payment without observable failure:
/// its own failure modes belong to the provider's contract, not to this
/// core, and are never retried here.
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` pence to the given account.
    fn make_payment(&self, account_id: u64, amount: u64);
}
