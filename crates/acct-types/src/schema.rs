/// Declared storage shape for an application's per-account local state.
///
/// Slot counts are fixed when the application is registered; local state may
/// never hold more entries of a kind than the schema declares.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StateSchema {
    num_uints: u32,
    num_byte_slices: u32,
}

impl StateSchema {
    pub fn new(num_uints: u32, num_byte_slices: u32) -> Self {
        Self {
            num_uints,
            num_byte_slices,
        }
    }

    /// Number of integer-valued slots an account may hold for this app.
    pub fn num_uints(&self) -> u32 {
        self.num_uints
    }

    /// Number of byte-string-valued slots an account may hold for this app.
    pub fn num_byte_slices(&self) -> u32 {
        self.num_byte_slices
    }
}
