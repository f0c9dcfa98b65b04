mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
