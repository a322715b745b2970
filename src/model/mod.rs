pub mod activity;
pub mod area;
pub mod measurement;
pub mod position;
pub mod turtle;

pub use activity::*;
pub use area::*;
pub use measurement::*;
pub use position::*;
pub use turtle::*;
