pub mod text;

pub use text::word_count;
