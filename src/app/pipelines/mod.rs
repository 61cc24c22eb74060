pub mod grouping_pipeline;
