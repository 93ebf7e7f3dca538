//! Generative text service seam.
//!
//! Callers only ever see `TextGenerator`; the concrete client is built once
//! from `Config` in `run()` and handed down.

pub mod gemini;

use crate::errors::AppResult;

pub use gemini::GeminiClient;

pub trait TextGenerator {
    /// Send `prompt` and return the reply text.
    ///
    /// `Ok(None)` means the service answered but produced no text.
    fn generate(&self, prompt: &str) -> AppResult<Option<String>>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        (**self).generate(prompt)
    }
}
