pub mod factory;
pub mod interface;
pub mod marian;
pub mod openai;

pub use factory::TranslatorFactory;
pub use interface::{TranslateError, TranslatorInterface};
