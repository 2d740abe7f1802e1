use crate::analysis::stats_table::{StatsFilter, StatsTable};
use crate::config::Config;
use crate::error::AppError;
use tracing::{debug, warn};

use super::endpoints::{Endpoint, API_KEY_HEADER, USER_AGENT};
use super::models::*;

pub struct TrackerClient {
    config: Config,
    agent: ureq::Agent,
}

impl TrackerClient {
    pub fn new(config: Config) -> Self {
        TrackerClient {
            config,
            agent: ureq::Agent::new(),
        }
    }

    /// Replaces the stored API key. No local validation; the server decides.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = Some(api_key.into());
    }

    fn api_key(&self) -> Result<&str, AppError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(AppError::CredentialMissing)
    }

    fn execute_request(&self, endpoint: Endpoint<'_>) -> Result<String, AppError> {
        let api_key = self.api_key()?;
        endpoint.validate()?;
        let url = endpoint.url(&self.config.base_url);
        debug!(%url, query = ?endpoint.query(), "sending request");

        let mut request = self
            .agent
            .get(&url)
            .set("User-Agent", USER_AGENT)
            .set(API_KEY_HEADER, api_key);
        if let Some((name, value)) = endpoint.query() {
            request = request.query(name, value);
        }

        match request.call() {
            // ureq hands every 2xx back as Ok; only 200 counts as success here.
            Ok(resp) if resp.status() == 200 => resp
                .into_string()
                .map_err(|e| AppError::TransportError(e.to_string())),
            Ok(resp) => Err(remote_error(&url, resp.status(), resp.status_text())),
            Err(ureq::Error::Status(status, resp)) => {
                Err(remote_error(&url, status, resp.status_text()))
            }
            Err(e) => Err(AppError::TransportError(e.to_string())),
        }
    }

    pub fn fetch_player_stats(&self, nickname: &str) -> Result<PlayerStats, AppError> {
        let body = self.execute_request(Endpoint::Profile { nickname })?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn find_player_by_steam_id(&self, steam_id: &str) -> Result<PlayerSearch, AppError> {
        let body = self.execute_request(Endpoint::SearchBySteamId { steam_id })?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches a player's stats and keeps the rows matching `filter`.
    ///
    /// The shape is the same whatever the number of filters; call
    /// [`StatsTable::expand_nested`] on the result to get the per-stat rows.
    pub fn fetch_filtered_stats(
        &self,
        nickname: &str,
        filter: &StatsFilter,
    ) -> Result<StatsTable, AppError> {
        let stats = self.fetch_player_stats(nickname)?;
        let table = StatsTable::from_stats(&stats)?;
        Ok(filter.apply(&table))
    }
}

fn remote_error(url: &str, status: u16, reason: &str) -> AppError {
    warn!(%url, status, reason, "request rejected");
    AppError::RemoteError {
        status,
        reason: reason.to_string(),
    }
}
