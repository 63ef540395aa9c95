#![cfg_attr(not(feature = "std"), no_std)]

//! Escaping of metadata values for HTTP headers, cookies and query
//! parameters, and generation of matchers that recognize those values
//! however they were escaped.

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod metadata;
mod policy;
mod transformer;
mod types;

// Public API
pub use character_sets::{ByteFlags, classify};
pub use metadata::{
    cookie_matcher_for_metadata, cookie_matcher_for_metadata_bytes, escape_metadata,
    escape_metadata_bytes, header_matcher_for_metadata, header_matcher_for_metadata_bytes,
    query_matcher_for_metadata, query_matcher_for_metadata_bytes,
};
pub use transformer::Transformer;
pub use types::{EncodingType, Matcher, RegexMode};
