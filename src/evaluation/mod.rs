pub mod category;
pub use category::*;

pub mod combination;
pub use combination::*;

pub mod evaluator;
pub use evaluator::*;
