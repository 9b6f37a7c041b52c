use crate::config::AppConfig;
use crate::domain::model::{CommitteeFinancials, SearchResults};
use crate::utils::cache::ResponseCache;
use crate::utils::error::{FecError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SEARCH_PER_PAGE: &str = "5";
const REPORTS_LIMIT: u64 = 4;

/// Thin adapter over the disclosure REST API: builds URLs and query
/// parameters, issues GETs, hands back parsed JSON. Non-200 responses are
/// swallowed into an empty object; transport and decode failures propagate.
/// No retries, no backoff.
pub struct ApiGateway<'a> {
    config: &'a AppConfig,
    client: Client,
    cache: Option<ResponseCache>,
}

impl<'a> ApiGateway<'a> {
    pub fn new(config: &'a AppConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let cache = config
            .cache
            .then(|| ResponseCache::new(config.cache_size));
        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// GET `{api_location}/{path}` with `filters` as query parameters, the
    /// API key appended last when configured.
    pub async fn call_api(&self, path: &str, filters: &[(&str, &str)]) -> Result<Value> {
        let mut params: Vec<(String, String)> = filters
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        if !self.config.api_key.is_empty() {
            params.push(("api_key".to_string(), self.config.api_key.clone()));
        }

        let url = join_url(&self.config.api_location, path);
        let signature = request_signature(&url, &params);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&signature) {
                tracing::debug!("cache hit for {}", path);
                return Ok(hit);
            }
        }

        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("API returned {} for {}, treating as empty", status, path);
            return Ok(Value::Object(Default::default()));
        }

        let body: Value = response.json().await?;
        if let Some(cache) = &self.cache {
            cache.set(&signature, body.clone());
        }
        Ok(body)
    }

    /// Candidate and committee summaries for a search box query. An empty
    /// query still returns the first page of each listing.
    pub async fn load_search_results(&self, query: Option<&str>) -> Result<SearchResults> {
        let mut filters = vec![("per_page", SEARCH_PER_PAGE)];
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            filters.push(("q", q));
        }

        Ok(SearchResults {
            candidates: self.load_single_type_summary("candidates", &filters).await?,
            committees: self.load_single_type_summary("committees", &filters).await?,
        })
    }

    pub async fn load_single_type_summary(
        &self,
        data_type: &str,
        filters: &[(&str, &str)],
    ) -> Result<Value> {
        self.call_api(data_type, filters).await
    }

    pub async fn load_single_type(
        &self,
        data_type: &str,
        id: &str,
        filters: &[(&str, &str)],
    ) -> Result<Value> {
        self.call_api(&format!("{}/{}", data_type, id), filters)
            .await
    }

    pub async fn load_nested_type(
        &self,
        parent_type: &str,
        id: &str,
        nested_type: &str,
    ) -> Result<Value> {
        self.call_api(
            &format!("{}/{}/{}", parent_type, id, nested_type),
            &[("year", "*")],
        )
        .await
    }

    /// The four most recent reports plus cumulative totals for a committee,
    /// issued as two sequential requests. An upstream failure leaves the
    /// body without its `results` key, which surfaces as
    /// [`FecError::MissingResultsError`].
    pub async fn load_cmte_financials(&self, committee_id: &str) -> Result<CommitteeFinancials> {
        let reports_path = limit_by_amount(
            &format!("committee/{}/reports", committee_id),
            REPORTS_LIMIT,
        );
        let totals_path = format!("committee/{}/totals", committee_id);

        let reports = self.call_api(&reports_path, &[]).await?;
        let totals = self.call_api(&totals_path, &[]).await?;

        Ok(CommitteeFinancials {
            reports: take_results(reports, "reports")?,
            totals: take_results(totals, "totals")?,
        })
    }

    /// Clears the response cache. No-op when caching is off.
    pub fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.delete("");
        }
    }
}

/// Appends the fixed first-page pagination pair, in that order.
pub fn limit_by_amount(path: &str, amount: u64) -> String {
    format!("{}?page=1&per_page={}", path, amount)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn request_signature(url: &str, params: &[(String, String)]) -> String {
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("{}?{}", url, query.join("&"))
}

fn take_results(mut body: Value, endpoint: &'static str) -> Result<Value> {
    match body.get_mut("results") {
        Some(results) => Ok(results.take()),
        None => Err(FecError::MissingResultsError { endpoint }),
    }
}
