mod diag;
mod ledger;
mod topology;

pub use diag::*;
pub use ledger::*;
pub use topology::*;
