mod directions;
mod provider;

pub use directions::*;
pub use provider::*;
