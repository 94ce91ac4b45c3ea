// Word and text correction
//
// `Corrector` is a borrowed view over a model, the manual overrides, the
// options and an optional compound splitter. It holds no mutable state, so
// any number of correctors may run concurrently over one model.

pub mod options;
pub mod text;
pub mod word;

use crate::compound::CompoundSplitter;
use crate::mappings::ManualMappings;
use crate::model::LanguageModel;

pub use options::CorrectorOptions;
pub use text::CorrectedText;
pub use word::WordCorrection;

pub struct Corrector<'a> {
    model: &'a LanguageModel,
    mappings: &'a ManualMappings,
    options: &'a CorrectorOptions,
    splitter: Option<&'a dyn CompoundSplitter>,
}

impl<'a> Corrector<'a> {
    pub fn new(
        model: &'a LanguageModel,
        mappings: &'a ManualMappings,
        options: &'a CorrectorOptions,
        splitter: Option<&'a dyn CompoundSplitter>,
    ) -> Self {
        Self {
            model,
            mappings,
            options,
            splitter,
        }
    }
}
