pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use self::core::{
    engine::{GroupingEngine, RunOutcome},
    grouper::{are_anagrams, canonical_key, group_anagrams, AnagramGrouper},
    pipeline::GroupingPipeline,
};
pub use domain::model::{AnagramGroup, CanonicalKey, GroupOrder, GroupingResult, OutputFormat};
pub use utils::error::{GrouperError, Result};
