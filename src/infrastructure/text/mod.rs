// ============================================================
// TEXT INFRASTRUCTURE LAYER
// ============================================================
// Sentence splitting and word tokenization

mod word_tokenizer;

pub use word_tokenizer::WordTokenizer;
