//! The GeoJSON interface of the crate: parsing input feature collections,
//! reading them from any `io::Read`, and writing converted collections back
//! out in the incremental one-feature-per-line format.

mod parse;
mod read;
mod write;

pub use parse::*;
pub use read::*;
pub use write::*;
