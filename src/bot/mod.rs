pub mod policy;
pub use policy::*;

pub mod settings;
pub use settings::*;
