//! Problem-model builders which translate puzzles into a [`crate::engine::Csp`].

pub mod tenner;

pub use tenner::TennerBoard;
pub use tenner::TennerEncoding;
pub use tenner::TennerGrid;
pub use tenner::TennerModel;
pub use tenner::TENNER_WIDTH;
