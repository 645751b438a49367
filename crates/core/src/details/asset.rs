//! Asset projection.
//!
//! Assets arrive from the ledger core with their codes NUL-padded to the
//! fixed width of the variant. Projection strips the padding and writes a
//! flat set of keys under a caller-chosen prefix, so buyer-side
//! (`bought_`) and seller-side (`sold_`) assets can share one map.

use serde::{Deserialize, Serialize};

use super::Details;
use super::error::DetailsError;

/// Length of an encoded account address.
const ADDRESS_LEN: usize = 56;

/// Asset variant label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// The ledger's native asset.
    Native,
    /// Credit asset with a 1-4 character code.
    CreditAlphanum4,
    /// Credit asset with a 5-12 character code.
    CreditAlphanum12,
}

impl AssetType {
    /// Returns the label written to `asset_type`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::CreditAlphanum4 => "credit_alphanum4",
            Self::CreditAlphanum12 => "credit_alphanum12",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger asset as the core encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The native asset: no code, no issuer.
    Native,
    /// Credit asset with a 4-byte NUL-padded code.
    CreditAlphanum4 {
        /// Asset code, right-padded with NUL bytes.
        code: [u8; 4],
        /// Issuer account address.
        issuer: String,
    },
    /// Credit asset with a 12-byte NUL-padded code.
    CreditAlphanum12 {
        /// Asset code, right-padded with NUL bytes.
        code: [u8; 12],
        /// Issuer account address.
        issuer: String,
    },
}

impl Asset {
    /// Builds a credit asset, choosing the variant from the code length.
    ///
    /// # Errors
    ///
    /// Returns `MalformedAsset` if the code is empty or longer than 12 bytes.
    pub fn credit(code: &str, issuer: impl Into<String>) -> Result<Self, DetailsError> {
        let issuer = issuer.into();
        let bytes = code.as_bytes();
        match bytes.len() {
            1..=4 => {
                let mut padded = [0u8; 4];
                padded[..bytes.len()].copy_from_slice(bytes);
                Ok(Self::CreditAlphanum4 {
                    code: padded,
                    issuer,
                })
            }
            5..=12 => {
                let mut padded = [0u8; 12];
                padded[..bytes.len()].copy_from_slice(bytes);
                Ok(Self::CreditAlphanum12 {
                    code: padded,
                    issuer,
                })
            }
            n => Err(DetailsError::malformed(format!(
                "asset code must be 1-12 bytes, got {n}"
            ))),
        }
    }

    /// Returns the variant label.
    #[must_use]
    pub const fn asset_type(&self) -> AssetType {
        match self {
            Self::Native => AssetType::Native,
            Self::CreditAlphanum4 { .. } => AssetType::CreditAlphanum4,
            Self::CreditAlphanum12 { .. } => AssetType::CreditAlphanum12,
        }
    }

    /// Decodes the asset into `(type, code, issuer)`.
    ///
    /// Code and issuer are empty for the native asset.
    ///
    /// # Errors
    ///
    /// Returns `MalformedAsset` if the code padding, code length or issuer
    /// address is not what the variant requires.
    pub fn extract(&self) -> Result<(AssetType, String, String), DetailsError> {
        match self {
            Self::Native => Ok((AssetType::Native, String::new(), String::new())),
            Self::CreditAlphanum4 { code, issuer } => Ok((
                AssetType::CreditAlphanum4,
                decode_code(code, 1)?,
                check_issuer(issuer)?,
            )),
            Self::CreditAlphanum12 { code, issuer } => Ok((
                AssetType::CreditAlphanum12,
                decode_code(code, 5)?,
                check_issuer(issuer)?,
            )),
        }
    }
}

fn decode_code(padded: &[u8], min_len: usize) -> Result<String, DetailsError> {
    let len = padded.iter().position(|b| *b == 0).unwrap_or(padded.len());
    let (code, padding) = padded.split_at(len);

    if padding.iter().any(|b| *b != 0) {
        return Err(DetailsError::malformed("asset code has bytes after padding"));
    }
    if len < min_len {
        return Err(DetailsError::malformed(format!(
            "asset code too short for its type: {len} bytes"
        )));
    }
    if !code.iter().all(u8::is_ascii_alphanumeric) {
        return Err(DetailsError::malformed("asset code is not alphanumeric"));
    }

    Ok(String::from_utf8_lossy(code).into_owned())
}

fn check_issuer(issuer: &str) -> Result<String, DetailsError> {
    let well_formed = issuer.len() == ADDRESS_LEN
        && issuer.starts_with('G')
        && issuer
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b));
    if !well_formed {
        return Err(DetailsError::malformed(format!(
            "invalid issuer address: {issuer}"
        )));
    }
    Ok(issuer.to_string())
}

/// Writes the asset keys into `result` under `prefix`.
///
/// Always writes `{prefix}asset_type`; non-native assets also get
/// `{prefix}asset_code` and `{prefix}asset_issuer`. Nothing is written when
/// the asset is malformed.
///
/// # Errors
///
/// Returns `MalformedAsset` if the asset cannot be decoded.
pub fn project_asset(result: &mut Details, asset: &Asset, prefix: &str) -> Result<(), DetailsError> {
    let (asset_type, code, issuer) = asset.extract()?;

    result.insert(format!("{prefix}asset_type"), asset_type.as_str().into());
    if asset_type == AssetType::Native {
        return Ok(());
    }

    result.insert(format!("{prefix}asset_code"), code.into());
    result.insert(format!("{prefix}asset_issuer"), issuer.into());
    Ok(())
}
