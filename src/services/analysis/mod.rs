pub mod bands;
pub mod extractor;
pub mod xml;

pub use bands::{lookup_word_count, weighted_word_count};
pub use extractor::parse_analysis;
