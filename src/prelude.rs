// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use unifold::prelude::*;
//!
//! assert_eq!(nfc_str("A\u{308}").unwrap(), "Ä");
//! let fold = MapBuilder::new().compose().stable().casefold();
//! assert_eq!(fold.map_str("HÉLLO").unwrap(), "héllo");
//! ```

pub use crate::api::{nfc_str, nfd_str, nfkc_str, nfkd_str, MapBuilder};
pub use crate::error::Error;
