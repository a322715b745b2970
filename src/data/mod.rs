pub mod archive;
pub mod dataset;
pub mod validation;

pub use archive::*;
pub use dataset::*;
pub use validation::*;
