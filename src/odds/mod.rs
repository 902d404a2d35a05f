pub mod build;
pub use build::*;

pub mod codec;
pub use codec::*;

pub mod progress;
pub use progress::*;

pub mod table;
pub use table::*;
