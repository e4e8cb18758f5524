use std::fmt;

use crate::impl_id_newtype;

/// Opaque fixed-format account address.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address([u8; 32]);

impl Address {
    pub const fn new(buf: [u8; 32]) -> Self {
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The all-zeroes address, used as a placeholder.
    pub const fn zero() -> Self {
        Self([0; 32])
    }
}

impl From<[u8; 32]> for Address {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Abbreviated hex, addresses show up in a lot of error output.
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "..")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

type RawAssetId = u64;
type RawAppId = u64;

/// Identifier for an asset known to the ledger.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AssetId(RawAssetId);

impl_id_newtype!(AssetId => RawAssetId);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

/// Identifier for an application known to the ledger.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AppId(RawAppId);

impl_id_newtype!(AppId => RawAppId);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "app#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_debug_abbreviated() {
        let addr = Address::new([0xab; 32]);
        assert_eq!(format!("{addr:?}"), "abababab..");
    }
}
