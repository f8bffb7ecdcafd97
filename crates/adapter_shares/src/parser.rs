//! Share-map parser implementation.

use crate::error::ShareError;
use serde::Deserialize;
use tracing::warn;

/// Header entry declaring share count and quorum.
#[derive(Debug, Clone, Deserialize)]
struct Header {
    /// Number of shares the map claims to contain
    n: usize,
    /// Number of shares to select for decoding
    k: usize,
}

/// Raw share entry as written in the input.
#[derive(Debug, Clone, Deserialize)]
struct RawShare {
    /// Numeric base of `value`, as a string
    base: String,
    /// Digits of the share value in that base
    value: String,
}

/// A single share: an indexed value string in a declared base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Numeric index from the JSON key
    pub index: u64,
    /// Validated numeric base, in 2..=36
    pub base: u32,
    /// Digits of the share value in that base
    pub value: String,
}

impl Share {
    /// Convert the value string from its base to a decimal integer.
    ///
    /// Accepts upper- and lower-case digits and an optional sign, per
    /// `i64::from_str_radix`.
    pub fn decode(&self) -> Result<i64, ShareError> {
        i64::from_str_radix(self.value.trim(), self.base).map_err(|_| ShareError::InvalidDigit {
            index: self.index,
            base: self.base,
            value: self.value.clone(),
        })
    }
}

/// Parsed share map: header metadata plus shares in ascending index order.
///
/// # Example
///
/// ```
/// use adapter_shares::ShareMap;
///
/// let input = r#"{
///     "keys": { "n": 2, "k": 2 },
///     "2": { "base": "2", "value": "111" },
///     "1": { "base": "10", "value": "4" }
/// }"#;
///
/// let map = ShareMap::from_json(input).unwrap();
/// assert_eq!(map.quorum(), 2);
/// // Shares are ordered by index, not by position in the input
/// assert_eq!(map.decode_roots().unwrap(), vec![4, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMap {
    /// Share count declared in the header
    declared: usize,
    /// Quorum declared in the header
    quorum: usize,
    /// Shares sorted by ascending index
    shares: Vec<Share>,
}

impl ShareMap {
    /// Parse a share map from a JSON string.
    ///
    /// # Arguments
    ///
    /// * `input` - JSON object with a `keys` header and indexed share entries
    ///
    /// # Returns
    ///
    /// A parsed share map, or an error if the JSON is malformed, the header
    /// is missing, a key is non-numeric, or a base is unsupported.
    ///
    /// A mismatch between the declared share count and the entries actually
    /// present is logged as a warning but is not fatal; decoding only needs
    /// the quorum.
    pub fn from_json(input: &str) -> Result<Self, ShareError> {
        let root: serde_json::Map<String, serde_json::Value> = serde_json::from_str(input)?;

        let header = root.get("keys").ok_or(ShareError::MissingHeader)?;
        let header: Header = serde_json::from_value(header.clone())?;

        let mut shares = Vec::with_capacity(root.len().saturating_sub(1));
        for (key, entry) in &root {
            if key == "keys" {
                continue;
            }

            let index: u64 = key
                .parse()
                .map_err(|_| ShareError::InvalidKey(key.clone()))?;
            let raw: RawShare = serde_json::from_value(entry.clone())?;

            let base: u32 = raw.base.trim().parse().map_err(|_| ShareError::InvalidBase {
                index,
                base: raw.base.clone(),
            })?;
            if !(2..=36).contains(&base) {
                return Err(ShareError::InvalidBase {
                    index,
                    base: raw.base,
                });
            }

            shares.push(Share {
                index,
                base,
                value: raw.value,
            });
        }

        shares.sort_by_key(|share| share.index);

        if shares.len() != header.n {
            warn!(
                declared = header.n,
                present = shares.len(),
                "share count differs from declared n"
            );
        }

        Ok(Self {
            declared: header.n,
            quorum: header.k,
            shares,
        })
    }

    /// Share count declared in the header.
    #[inline]
    pub fn declared(&self) -> usize {
        self.declared
    }

    /// Quorum declared in the header.
    #[inline]
    pub fn quorum(&self) -> usize {
        self.quorum
    }

    /// All shares, in ascending index order.
    #[inline]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Decode the first `quorum` shares into decimal integer roots.
    ///
    /// Selection order is ascending share index, which keeps the result
    /// deterministic regardless of how the input object was keyed.
    pub fn decode_roots(&self) -> Result<Vec<i64>, ShareError> {
        if self.shares.len() < self.quorum {
            return Err(ShareError::NotEnoughShares {
                got: self.shares.len(),
                need: self.quorum,
            });
        }

        self.shares[..self.quorum].iter().map(Share::decode).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn test_parse_sample_map() {
        let map = ShareMap::from_json(SAMPLE).unwrap();
        assert_eq!(map.declared(), 4);
        assert_eq!(map.quorum(), 3);
        assert_eq!(map.shares().len(), 4);
    }

    #[test]
    fn test_decode_selects_first_quorum_by_index() {
        let map = ShareMap::from_json(SAMPLE).unwrap();
        // 4 (base 10), 111 (base 2) = 7, 12 (base 10); share 6 is unused
        assert_eq!(map.decode_roots().unwrap(), vec![4, 7, 12]);
    }

    #[test]
    fn test_share_order_is_numeric_not_lexicographic() {
        // Key "10" sorts before "2" as a string but after it as a number.
        let input = r#"{
            "keys": { "n": 2, "k": 2 },
            "10": { "base": "10", "value": "99" },
            "2": { "base": "10", "value": "5" }
        }"#;
        let map = ShareMap::from_json(input).unwrap();
        assert_eq!(map.decode_roots().unwrap(), vec![5, 99]);
    }

    #[test]
    fn test_base_conversion_accepts_letter_digits() {
        let input = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "16", "value": "ff" }
        }"#;
        let map = ShareMap::from_json(input).unwrap();
        assert_eq!(map.decode_roots().unwrap(), vec![255]);
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let input = r#"{ "1": { "base": "10", "value": "4" } }"#;
        let err = ShareMap::from_json(input).unwrap_err();
        assert!(matches!(err, ShareError::MissingHeader));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = ShareMap::from_json("not json").unwrap_err();
        assert!(matches!(err, ShareError::Json(_)));
    }

    #[test]
    fn test_non_numeric_key_is_rejected() {
        let input = r#"{
            "keys": { "n": 1, "k": 1 },
            "first": { "base": "10", "value": "4" }
        }"#;
        let err = ShareMap::from_json(input).unwrap_err();
        assert!(matches!(err, ShareError::InvalidKey(key) if key == "first"));
    }

    #[test]
    fn test_unsupported_base_is_rejected() {
        let input = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "37", "value": "4" }
        }"#;
        let err = ShareMap::from_json(input).unwrap_err();
        assert!(matches!(err, ShareError::InvalidBase { index: 1, .. }));
    }

    #[test]
    fn test_non_numeric_base_is_rejected() {
        let input = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "ten", "value": "4" }
        }"#;
        let err = ShareMap::from_json(input).unwrap_err();
        assert!(matches!(err, ShareError::InvalidBase { index: 1, .. }));
    }

    #[test]
    fn test_digit_outside_base_is_rejected() {
        let input = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "2", "value": "102" }
        }"#;
        let map = ShareMap::from_json(input).unwrap();
        let err = map.decode_roots().unwrap_err();
        assert!(matches!(
            err,
            ShareError::InvalidDigit { index: 1, base: 2, .. }
        ));
    }

    #[test]
    fn test_quorum_larger_than_share_count() {
        let input = r#"{
            "keys": { "n": 1, "k": 3 },
            "1": { "base": "10", "value": "4" }
        }"#;
        let map = ShareMap::from_json(input).unwrap();
        let err = map.decode_roots().unwrap_err();
        assert!(matches!(
            err,
            ShareError::NotEnoughShares { got: 1, need: 3 }
        ));
    }

    #[test]
    fn test_empty_map_with_zero_quorum() {
        let input = r#"{ "keys": { "n": 0, "k": 0 } }"#;
        let map = ShareMap::from_json(input).unwrap();
        assert_eq!(map.decode_roots().unwrap(), Vec::<i64>::new());
    }
}
