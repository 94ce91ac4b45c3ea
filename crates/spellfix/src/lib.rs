// spellfix: dictionary-backed spelling correction.
//
// A `LanguageModel` (word frequencies plus optional context bigrams) is
// built once from a corpus and shared. `SpellChecker` layers manual
// overrides, options and an optional compound splitter on top of it.

pub mod checker;
pub mod compound;
pub mod corrector;
pub mod edits;
pub mod error;
pub mod mappings;
pub mod model;

pub use checker::SpellChecker;
pub use compound::CompoundSplitter;
pub use corrector::{CorrectedText, CorrectorOptions, WordCorrection};
pub use error::{Error, Result};
pub use mappings::ManualMappings;
pub use model::{LanguageModel, ModelBuilder};
pub use spellfix_core::enums::Resolution;
