use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Validation failures raised by [`crate::CheckoutState::checkout`].
///
/// These are user-facing notifications, not system faults: the cart and the
/// checkout state are left exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty!")]
    EmptyCart,

    #[error("a purchase receipt is still open; dismiss it before checking out again")]
    ReceiptPending,
}
