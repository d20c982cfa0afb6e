pub mod catalog;
pub mod itinerary;
pub mod live;
pub mod resolver;
pub mod shared;
pub mod train;

pub mod prelude {
    pub use crate::catalog::{Catalog, Line, LineId};
    pub use crate::itinerary::{Fare, Itinerary, Leg, Mode, Place, Route, TrackedLeg, TrackedSet};
    pub use crate::live::{
        DelaySeverity, LivePosition, PositionSource, PositionsResponse, StatusPoller,
        StatusSnapshot, TrainState, TrainStatus,
    };
    pub use crate::resolver::Resolver;
    pub use crate::train::{TrainNumber, TrainRule, same_train};
}
