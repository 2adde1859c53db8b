mod batch_extractor;

pub use batch_extractor::BatchExtractor;
