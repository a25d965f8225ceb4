pub mod clock;
pub mod pii;

pub use clock::{Clock, ManualClock, SystemClock};
pub use pii::Masked;
