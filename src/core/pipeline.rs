pub use crate::app::pipelines::grouping_pipeline::{
    parse_words, render, unique_formats, GroupingPipeline, ARCHIVE_NAME, SAMPLE_WORDS,
};
