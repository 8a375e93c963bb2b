pub mod compote_pipeline;
