pub mod contest;
pub mod counter;
pub mod participant;

pub use contest::*;
pub use counter::*;
pub use participant::*;
