pub mod aggregate;

pub use aggregate::{RankingMultipleFactor, DESCRIPTOR};
