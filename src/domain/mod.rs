pub mod budget;
pub mod common;
pub mod period;
pub mod score;

pub use budget::{Budget, YearMonth};
pub use common::{Displayable, Identifiable};
pub use period::Period;
pub use score::{MatchEvent, MatchResult, Score};
