//! Low-level sequence operations split into submodules

mod errors;
mod scan;
mod sort;
mod swap;

pub use errors::OpsError;
pub use scan::{find_partner, find_pivot};
pub use sort::sort_tail;
pub use swap::swap_symbols;
