mod lines;
mod status;
mod tracking;

pub use lines::*;
pub use status::*;
pub use tracking::*;
