pub mod smoke;

pub use crate::domain::model::SmokeOutcome;
pub use crate::domain::ports::MediaLibrary;
pub use crate::utils::error::Result;
