mod backend;
mod chunk;
mod google;
mod language;
mod mock;
mod mymemory;
mod provider;
mod retry;

pub use backend::{Backend, BackendClient, BackendOptions};
pub use chunk::{split_chunks, translate_in_chunks};
pub use google::GoogleTranslate;
pub use language::{SUPPORTED_LANGUAGES, print_languages, resolve_language};
pub use mock::{MockMode, MockProvider};
pub use mymemory::MyMemory;
pub use provider::TranslationProvider;
pub use retry::{Delay, DEFAULT_DELAY, DEFAULT_RETRIES, ResilientTranslator, RetryPolicy, TokioDelay};
