pub mod chart_state;

pub use chart_state::*;
