pub mod aggregate;

pub use aggregate::{RankingCash, DESCRIPTOR};
