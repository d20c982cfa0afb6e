mod line;
mod status;
mod tracking;

pub use line::*;
pub use status::*;
pub use tracking::*;
