use std::collections::BTreeMap;

use sandnet_acct_types::{AppId, StateSchema};

/// Read-only lookup of application schemas, owned by the management layer
/// outside this core.
///
/// The executor consults it when an account opts into an application, to size
/// the new local-state record.  Assets carry no schema and are referenced by
/// identifier only, so they need no registry entry.
#[derive(Clone, Debug, Default)]
pub struct AppRegistry {
    apps: BTreeMap<AppId, StateSchema>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an application's declared schema, assigning the next free
    /// id.
    pub fn register(&mut self, schema: StateSchema) -> AppId {
        let next = self
            .apps
            .last_key_value()
            .map_or(1, |(id, _)| u64::from(*id) + 1);
        let app = AppId::new(next);
        self.apps.insert(app, schema);
        app
    }

    pub fn schema(&self, app: AppId) -> Option<&StateSchema> {
        self.apps.get(&app)
    }
}
