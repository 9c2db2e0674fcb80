//! One CLI invocation's application state

use crate::error::CliResult;
use eslm_client::EslmClient;
use eslm_engine::EngineConfig;
use eslm_shared_state::{hydrate, AppContext, AppProvider};
use tracing::info;

/// Provider plus everything a command needs to build its view.
///
/// Without `--remote` the provider holds the seeded sample data. With it the
/// store starts empty and is loaded from the backend.
pub struct Session {
    provider: AppProvider,
    client: EslmClient,
    engine: EngineConfig,
    remote: bool,
}

impl Session {
    pub async fn open(client: EslmClient, engine: EngineConfig, remote: bool) -> CliResult<Self> {
        let provider = if remote {
            let provider = AppProvider::empty();
            info!(endpoint = %client.base_url(), "Loading state from backend");
            hydrate(provider.store(), &client).await?;
            provider
        } else {
            AppProvider::new()
        };

        Ok(Self {
            provider,
            client,
            engine,
            remote,
        })
    }

    pub fn context(&self) -> AppContext {
        self.provider.context()
    }

    pub fn client(&self) -> &EslmClient {
        &self.client
    }

    pub fn engine_config(&self) -> EngineConfig {
        self.engine
    }

    pub fn is_remote(&self) -> bool {
        self.remote
    }
}
