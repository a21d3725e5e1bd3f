use common::checkout::CheckoutState;

/// State container for the `CheckoutComponent`.
///
/// Everything the form renders is held in `checkout`; the component adds no
/// state of its own.
pub struct CheckoutComponent {
    pub checkout: CheckoutState,
}

impl CheckoutComponent {
    pub fn new() -> Self {
        Self {
            checkout: CheckoutState::new(),
        }
    }
}
