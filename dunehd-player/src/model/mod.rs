//! Model types for dunehd-player

mod feature;
mod player_state;
mod snapshot;

pub use feature::{Feature, FeatureSet};
pub use player_state::PlayerState;
pub use snapshot::PlayerSnapshot;
