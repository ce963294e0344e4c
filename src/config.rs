use std::sync::{PoisonError, RwLock};

use crate::{ClientError, Network};

/// Partial configuration applied through [`ConfigStore::init`].
///
/// Fields left as `None` keep whatever value the store already holds, so
/// repeated init calls merge instead of replacing each other.
#[derive(Clone, Debug, Default)]
pub struct ConfigUpdate {
    /// Deployment stage requests are sent to.
    pub network: Option<Network>,
    /// API key attached to every request as the `apikey` header.
    pub api_key: Option<String>,
}

impl ConfigUpdate {
    /// Shorthand for an update that only sets the network.
    pub fn network(network: Network) -> Self {
        Self {
            network: Some(network),
            api_key: None,
        }
    }

    /// Returns this update with an API key set.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Resolved configuration as read by the request pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub network: Network,
    pub api_key: Option<String>,
}

/// Holder of the active configuration.
///
/// Owned by [`CexplorerClient`](crate::CexplorerClient) rather than living
/// in a module-level static; cloning the client shares one store. Writes
/// are expected once at startup, reads on every request, so a plain
/// [`RwLock`] is enough.
#[derive(Debug, Default)]
pub struct ConfigStore {
    inner: RwLock<State>,
}

#[derive(Clone, Debug, Default)]
struct State {
    network: Option<Network>,
    api_key: Option<String>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `update` and shallow-merges it into the stored state.
    ///
    /// The merged result must name a network; an API key, when supplied,
    /// must be non-empty after trimming. Validation failures leave the
    /// stored state untouched.
    pub fn init(&self, update: ConfigUpdate) -> Result<(), ClientError> {
        if let Some(api_key) = &update.api_key {
            if api_key.trim().is_empty() {
                return Err(ClientError::InvalidApiKey);
            }
        }

        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if update.network.is_none() && state.network.is_none() {
            return Err(ClientError::MissingNetwork);
        }
        if let Some(network) = update.network {
            state.network = Some(network);
        }
        if let Some(api_key) = update.api_key {
            state.api_key = Some(api_key);
        }
        Ok(())
    }

    /// Returns the current configuration.
    ///
    /// Fails with [`ClientError::Uninitialized`] before the first
    /// successful [`init`](Self::init); there is no implicit default.
    pub fn get(&self) -> Result<ClientConfig, ClientError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let network = state.network.ok_or(ClientError::Uninitialized)?;
        Ok(ClientConfig {
            network,
            api_key: state.api_key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigStore, ConfigUpdate};
    use crate::{ClientError, Network};

    #[test]
    fn get_before_init_is_uninitialized() {
        let store = ConfigStore::new();
        assert!(matches!(store.get(), Err(ClientError::Uninitialized)));
    }

    #[test]
    fn init_without_network_fails_and_stores_nothing() {
        let store = ConfigStore::new();
        let error = store
            .init(ConfigUpdate::default().with_api_key("secret"))
            .expect_err("network is required");
        assert!(matches!(error, ClientError::MissingNetwork));
        assert!(matches!(store.get(), Err(ClientError::Uninitialized)));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let store = ConfigStore::new();
        let error = store
            .init(ConfigUpdate::network(Network::MainnetStage).with_api_key("   "))
            .expect_err("blank key");
        assert!(matches!(error, ClientError::InvalidApiKey));
    }

    #[test]
    fn repeated_init_calls_merge_fields() {
        let store = ConfigStore::new();
        store
            .init(ConfigUpdate::network(Network::PreprodStage))
            .expect("network only");
        store
            .init(ConfigUpdate::default().with_api_key("secret"))
            .expect("key merges onto stored network");

        let config = store.get().expect("initialized");
        assert_eq!(config.network, Network::PreprodStage);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn later_init_overrides_earlier_fields() {
        let store = ConfigStore::new();
        store
            .init(ConfigUpdate::network(Network::MainnetStage).with_api_key("old"))
            .expect("initial");
        store
            .init(ConfigUpdate::network(Network::PreviewStage))
            .expect("override network");

        let config = store.get().expect("initialized");
        assert_eq!(config.network, Network::PreviewStage);
        assert_eq!(config.api_key.as_deref(), Some("old"));
    }
}
