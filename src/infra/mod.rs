//! Конкретные коллабораторы движка: RNG и раздающая колода.

pub mod rng;
pub mod shoe;

pub use rng::{DeterministicRng, SystemRng};
pub use shoe::Shoe;
