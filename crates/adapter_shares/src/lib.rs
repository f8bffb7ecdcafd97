//! # adapter_shares: Share-Map Input Adapter
//!
//! Part of the **A**dapter layer in the A-P-S architecture. Parses keyed
//! JSON share maps into decimal integer roots for the polynomial kernel.
//!
//! A share map is a JSON object with a `keys` header declaring the number
//! of shares present (`n`) and the quorum (`k`), followed by one entry per
//! share. Each share is keyed by its numeric index and declares the numeric
//! base of its value string:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Decoding selects the first `k` shares in ascending index order (the
//! deterministic ordering, independent of JSON key order) and converts each
//! value string from its declared base to a decimal integer.
//!
//! ```
//! use adapter_shares::ShareMap;
//!
//! let input = r#"{
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" }
//! }"#;
//!
//! let map = ShareMap::from_json(input).unwrap();
//! assert_eq!(map.decode_roots().unwrap(), vec![4, 7]);
//! ```

mod error;
mod parser;

pub use error::ShareError;
pub use parser::{Share, ShareMap};
