//! Form and response storage

mod clock;
mod error;
mod form_store;
mod shared;

pub use clock::{Clock, SystemClock};
pub use error::StoreError;
pub use form_store::FormStore;
pub use shared::SharedFormStore;

#[cfg(test)]
pub(crate) use clock::testing::{start_time, ticking_clock};
#[cfg(test)]
pub use clock::MockClock;
