use chrono::{DateTime, SecondsFormat, Utc};
use dioxus_logger::tracing;
use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, de::IgnoredAny};
use serde_json::{json, Value};
use url::Url;

use crate::server::{
    error::upstream::UpstreamError,
    pnw::{
        model::{
            Alliance, AlliancesData, GraphQlError, GraphQlResponse, Nation, NationsData, War,
            WarsData,
        },
        query,
    },
};

/// Client for the Politics and War GraphQL endpoint.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared. The per-request timeout is
/// configured on the `reqwest::Client` passed to [`PnwClient::new`].
#[derive(Clone)]
pub struct PnwClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl PnwClient {
    /// Creates a new client for the given GraphQL endpoint.
    ///
    /// # Arguments
    /// - `http` - HTTP client, configured with the upstream request timeout
    /// - `endpoint` - GraphQL endpoint URL, e.g. `https://api.politicsandwar.com/graphql`
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Fetches an alliance with its member nations.
    ///
    /// # Returns
    /// - `Ok(Alliance)` - The alliance
    /// - `Err(UpstreamError::NotFound)` - No alliance with this ID exists
    /// - `Err(UpstreamError)` - Request failed or was rejected
    pub async fn get_alliance_info(
        &self,
        alliance_id: i64,
        api_key: &str,
    ) -> Result<Alliance, UpstreamError> {
        let data: AlliancesData = self
            .execute(api_key, query::ALLIANCE_INFO, json!({ "id": [alliance_id] }))
            .await?;

        data.alliances
            .and_then(|page| page.data.into_iter().next())
            .ok_or(UpstreamError::NotFound {
                kind: "Alliance",
                id: alliance_id,
            })
    }

    /// Fetches up to 100 wars involving an alliance on either side.
    ///
    /// A missing `wars` field is treated as no wars.
    pub async fn get_alliance_wars(
        &self,
        alliance_id: i64,
        api_key: &str,
        active_only: bool,
    ) -> Result<Vec<War>, UpstreamError> {
        let data: WarsData = self
            .execute(
                api_key,
                query::ALLIANCE_WARS,
                json!({ "allianceId": [alliance_id], "active": active_only }),
            )
            .await?;

        Ok(data.wars.map(|page| page.data).unwrap_or_default())
    }

    /// Fetches up to 100 wars declared after `since`, across all alliances.
    #[allow(dead_code)]
    pub async fn get_recent_wars(
        &self,
        since: DateTime<Utc>,
        api_key: &str,
    ) -> Result<Vec<War>, UpstreamError> {
        let data: WarsData = self
            .execute(
                api_key,
                query::RECENT_WARS,
                json!({ "after": since.to_rfc3339_opts(SecondsFormat::Secs, true) }),
            )
            .await?;

        Ok(data.wars.map(|page| page.data).unwrap_or_default())
    }

    /// Fetches a nation with up to 10 of its active wars.
    ///
    /// # Returns
    /// - `Ok(Nation)` - The nation
    /// - `Err(UpstreamError::NotFound)` - No nation with this ID exists
    /// - `Err(UpstreamError)` - Request failed or was rejected
    #[allow(dead_code)]
    pub async fn get_nation_info(
        &self,
        nation_id: i64,
        api_key: &str,
    ) -> Result<Nation, UpstreamError> {
        let data: NationsData<Nation> = self
            .execute(api_key, query::NATION_INFO, json!({ "id": [nation_id] }))
            .await?;

        data.nations
            .and_then(|page| page.data.into_iter().next())
            .ok_or(UpstreamError::NotFound {
                kind: "Nation",
                id: nation_id,
            })
    }

    /// Checks whether an API key is accepted by running a minimal query.
    ///
    /// # Returns
    /// - `Ok(true)` - The key was accepted
    /// - `Ok(false)` - The key was rejected
    /// - `Err(UpstreamError)` - The API could not be reached or answered unexpectedly, so
    ///   the key's validity is unknown
    pub async fn validate_api_key(&self, api_key: &str) -> Result<bool, UpstreamError> {
        let result: Result<NationsData<IgnoredAny>, UpstreamError> = self
            .execute(api_key, query::API_KEY_PROBE, Value::Null)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) if e.is_unauthorized() => {
                tracing::debug!("API key rejected: {}", e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Sends a GraphQL request and decodes its `data` into `T`.
    ///
    /// GraphQL `errors` take precedence over the HTTP status, so a rejected key reports as
    /// `GraphQl` whether the endpoint answers 200 or 401.
    async fn execute<T: DeserializeOwned>(
        &self,
        api_key: &str,
        query: &str,
        variables: Value,
    ) -> Result<T, UpstreamError> {
        let body = serde_json::to_string(&json!({ "query": query, "variables": variables }))?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .query(&[("api_key", api_key)])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_str::<GraphQlResponse<IgnoredAny>>(&text) {
                if !envelope.errors.is_empty() {
                    return Err(graphql_error(envelope.errors));
                }
            }

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_str(&text)?;

        if !envelope.errors.is_empty() {
            return Err(graphql_error(envelope.errors));
        }

        envelope.data.ok_or(UpstreamError::EmptyResponse)
    }
}

fn graphql_error(errors: Vec<GraphQlError>) -> UpstreamError {
    UpstreamError::GraphQl(errors.into_iter().map(|e| e.message).collect())
}
