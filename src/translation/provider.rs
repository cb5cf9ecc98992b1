use std::future::Future;

use crate::errors::ProviderError;

/// An external natural-language translation capability.
///
/// Implementations are bound to one source/target language pair at
/// construction; callers only hand over text. Handles are passed explicitly
/// into every translation operation, never held globally.
pub trait TranslationProvider {
    /// Translates `text`, or fails with a (possibly transient) provider error.
    fn translate(&self, text: &str) -> impl Future<Output = Result<String, ProviderError>>;
}

impl<P: TranslationProvider + ?Sized> TranslationProvider for &P {
    fn translate(&self, text: &str) -> impl Future<Output = Result<String, ProviderError>> {
        (**self).translate(text)
    }
}
