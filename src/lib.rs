#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod codec;
mod editor;
mod error;
mod helpers;
mod record;
mod suggestions;

// Public API
pub use codec::{Composition, ParsedUrl, compose, escape, escape_into, parse};
pub use editor::{Action, Editor, Field};
pub use error::{EditorError, Result};
pub use record::{ParameterRecord, ParameterSequence};
pub use suggestions::{DEFAULT_SUGGESTIONS, available_suggestions};
