//! On-demand sequences used by every stage of the search

mod replay;
mod seq;

pub use replay::Replay;
pub use seq::LazySeq;
