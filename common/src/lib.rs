//! Domain shared by the TicketHub page and its static host: the concert
//! catalog, the order draft and its validation, the purchase API wire types,
//! and the checkout state machine driven by the frontend.

pub mod checkout;
pub mod model;
pub mod requests;
pub mod slideshow;
pub mod validation;
