//! # extkit core
//!
//! Small, stateless extensions to std types - strictly functional Rust with
//! zero unwraps.
//!
//! ## Laws
//!
//! - No `unwrap()` / `expect()` - the `require_*` combinators return `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//! - No global state - randomness is always injected
//!
//! ## Modules
//!
//! - `option` / `result`: combinators std leaves out (`require_some`,
//!   `zip_map`, `flatten_result`, logged conversions, ...)
//! - `iter`: positional and zipping helpers over any iterator
//! - `collections`: `Vec` and map mutation helpers, ordered list reconciliation
//! - `math`: remap, lerp and wrap-around modulo
//! - `random`: draws over a caller-supplied `Rng` (feature `random`)
//! - `string`: lenient splitting and emptiness checks

pub mod collections;
mod error;
pub mod iter;
pub mod math;
pub mod option;
#[cfg(feature = "random")]
pub mod random;
mod result;
pub mod string;

pub use error::{Error, Side, Variant};
pub use option::{OptionExt, OptionIterExt};
pub use result::{Result, ResultExt, ResultFlattenExt};

/// Everything needed to use the extension traits in one import.
pub mod prelude {
    pub use crate::collections::{MapExt, VecExt};
    pub use crate::iter::IterExt;
    pub use crate::math::{Interpolate, PositiveMod};
    pub use crate::option::{OptionExt, OptionIterExt};
    #[cfg(feature = "random")]
    pub use crate::random::RandomExt;
    pub use crate::result::{ResultExt, ResultFlattenExt};
    pub use crate::string::{OptionStrExt, StrExt};
}
