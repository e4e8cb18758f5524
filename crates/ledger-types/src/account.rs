use std::collections::BTreeMap;

use sandnet_acct_types::{Amount, AppId, AssetId, StateSchema};

use crate::{
    coin::Coin,
    errors::{LedgerError, LedgerResult},
};

/// An account's balance of a specific asset.
///
/// Created exactly once per (account, asset) pair by an opt-in and persists
/// for the account's lifetime within the simulated session.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Holding {
    amount: Amount,
}

impl Holding {
    pub fn new_zero() -> Self {
        Self {
            amount: Amount::ZERO,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// A value stored in a local-state slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StateValue {
    Uint(u64),
    Bytes(Vec<u8>),
}

/// Per-account storage slots owned by a specific application.
///
/// Slot counts are bounded by the schema the application declared; writes are
/// driven only by contract-call execution deltas.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocalState {
    schema: StateSchema,
    slots: BTreeMap<String, StateValue>,
}

impl LocalState {
    pub fn new_empty(schema: StateSchema) -> Self {
        Self {
            schema,
            slots: BTreeMap::new(),
        }
    }

    pub fn schema(&self) -> &StateSchema {
        &self.schema
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.slots.get(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn count_of(&self, kind_uint: bool) -> u32 {
        self.slots
            .values()
            .filter(|v| matches!(v, StateValue::Uint(_)) == kind_uint)
            .count() as u32
    }

    /// Writes a slot, enforcing the schema's declared capacity.
    ///
    /// Overwriting an existing key never changes occupancy of its old kind
    /// until the new value is in place, so a same-key overwrite is always
    /// admissible when it doesn't change the value kind.
    pub fn put(&mut self, app: AppId, key: String, value: StateValue) -> LedgerResult<()> {
        let is_uint = matches!(value, StateValue::Uint(_));
        let prev = self.slots.get(&key);
        let occupied = self.count_of(is_uint)
            - prev.map_or(0, |p| (matches!(p, StateValue::Uint(_)) == is_uint) as u32);
        let cap = if is_uint {
            self.schema.num_uints()
        } else {
            self.schema.num_byte_slices()
        };
        if occupied >= cap {
            return Err(LedgerError::LocalStateFull {
                app,
                kind: if is_uint { "uint" } else { "byte-slice" },
            });
        }
        self.slots.insert(key, value);
        Ok(())
    }

    /// Clears a slot if present.
    pub fn remove(&mut self, key: &str) -> Option<StateValue> {
        self.slots.remove(key)
    }
}

/// Full state the ledger holds for one account.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountState {
    balance: Amount,
    holdings: BTreeMap<AssetId, Holding>,
    app_states: BTreeMap<AppId, LocalState>,
}

impl AccountState {
    /// Fresh account with zero balance and no records, as created on first
    /// reference.
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Adds a coin to this account's balance.
    ///
    /// # Panics
    ///
    /// If the balance would exceed the representable maximum.  Coins enter
    /// the ledger only through the checked minting path, so the sum of all
    /// live coins fits in an `Amount` by construction.
    pub fn add_balance(&mut self, coin: Coin) {
        self.balance = self
            .balance
            .checked_add(coin.into_value())
            .expect("ledger: balance overflow");
    }

    /// Takes a coin from this account's balance, if funds are available.
    ///
    /// On failure the balance is untouched; it can never be observed
    /// negative, mid-group or otherwise.
    pub fn take_balance(&mut self, amt: Amount) -> LedgerResult<Coin> {
        let Some(new_balance) = self.balance.checked_sub(amt) else {
            return Err(LedgerError::InsufficientBalance {
                needed: amt,
                available: self.balance,
            });
        };
        self.balance = new_balance;
        Ok(Coin::mint_unchecked(amt))
    }

    // ===== Asset holdings =====

    pub fn holding(&self, asset: AssetId) -> Option<&Holding> {
        self.holdings.get(&asset)
    }

    pub fn num_holdings(&self) -> usize {
        self.holdings.len()
    }

    /// Creates a zero-valued holding if absent.  Returns whether a record was
    /// actually created.
    pub fn add_holding(&mut self, asset: AssetId) -> bool {
        if self.holdings.contains_key(&asset) {
            return false;
        }
        self.holdings.insert(asset, Holding::new_zero());
        true
    }

    // ===== Application local state =====

    pub fn app_state(&self, app: AppId) -> Option<&LocalState> {
        self.app_states.get(&app)
    }

    pub fn app_state_mut(&mut self, app: AppId) -> Option<&mut LocalState> {
        self.app_states.get_mut(&app)
    }

    pub fn num_app_states(&self) -> usize {
        self.app_states.len()
    }

    /// Creates an empty local state sized by `schema` if absent.  Returns
    /// whether a record was actually created.
    pub fn open_app_state(&mut self, app: AppId, schema: StateSchema) -> bool {
        if self.app_states.contains_key(&app) {
            return false;
        }
        self.app_states.insert(app, LocalState::new_empty(schema));
        true
    }
}
