pub mod action;
pub use action::*;

pub mod driver;
pub use driver::*;

pub mod human;
pub use human::*;

pub mod seat;
pub use seat::*;

pub mod state;
pub use state::*;
