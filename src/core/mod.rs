pub mod engine;
pub mod grouper;
pub mod pipeline;

pub use crate::domain::model::{AnagramGroup, GroupingResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
