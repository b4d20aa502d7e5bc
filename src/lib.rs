//! Read and edit URL query strings in place.
//!
//! Two ways in, with the same rules for separators, key matching and
//! decoding:
//!
//! - [`raw_query`]: point operations straight on the raw query text, for
//!   when only a few parameters of a long query matter.
//! - [`QueryParams`]: parse once into an ordered list of decoded pairs,
//!   edit, then [`encode`](QueryParams::encode) back.
//!
//! ```
//! use rawquery::{QueryParams, raw_query};
//!
//! let mut query = String::from("a=1&b=2;c=3");
//! assert_eq!(raw_query::get(&query, "b").unwrap().as_deref(), Some("2"));
//! raw_query::delete(&mut query, "b");
//! assert_eq!(query, "a=1&c=3");
//!
//! let (mut params, errors) = QueryParams::parse(&query);
//! assert!(errors.is_none());
//! params.set("a", "x y");
//! assert_eq!(params.encode(), "a=x+y&c=3");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod percent_encode;
mod query_params;

pub mod raw_query;

// Public API
pub use error::{DecodeError, DecodeErrors, Result};
pub use percent_encode::{decode_component, encode_component};
pub use query_params::{Param, QueryParams};
