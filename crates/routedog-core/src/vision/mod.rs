//! Vision extraction: turns a photo into raw delivery-address strings.
//!
//! Provides the extractor abstraction and the OpenAI-backed implementation.

pub(crate) mod openai;
pub(crate) mod provider;

pub use openai::OpenAiExtractor;
pub use provider::{parse_address_list, AddressExtractor, ImageInput, EXTRACTION_PROMPT};
