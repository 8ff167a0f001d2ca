//! Dictionary lookups, merged with approved translations.

mod client;
mod gateway;

pub use client::{DictionaryApi, DictionaryEntry, HttpDictionaryClient, LookupError};
pub use gateway::{DefinedWord, LookupGateway};
