pub mod counter;
pub mod easing;

pub use counter::{CounterAnimation, CounterFrame};
pub use easing::ease_out_quart;
