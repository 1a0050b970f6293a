use covid_sidebar::{date::ChartRange, DailyRecord, GlobalSummary};
use serde::Serialize;
use yew::{Component, Context};

pub const DEFAULT_API: &str = "https://api.covid19api.com";

pub enum FetchState<T> {
    NotStarted,
    Fetching,
    Success(T),
    Failed(anyhow::Error),
}

#[derive(Serialize)]
struct RangeQuery {
    from: String,
    to: String,
}

pub async fn fetch_json_content<D>(url: String) -> anyhow::Result<D>
where
    D: for<'de> serde::de::Deserialize<'de>,
{
    log::info!("fetching {}", url);
    Ok(reqwest::get(url)
        .await?
        .error_for_status()?
        .json::<D>()
        .await?)
}

/// Builds request URLs against one API host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(DEFAULT_API)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn summary_url(&self) -> String {
        format!("{}/summary", self.base_url)
    }

    pub fn by_country_url(&self, country_code: &str, range: ChartRange) -> anyhow::Result<String> {
        let query = serde_urlencoded::to_string(RangeQuery {
            from: range.from.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            to: range.to.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        })?;
        Ok(format!(
            "{}/total/country/{}?{}",
            self.base_url, country_code, query
        ))
    }

    pub async fn by_country(
        &self,
        country_code: &str,
        range: ChartRange,
    ) -> anyhow::Result<Vec<DailyRecord>> {
        fetch_json_content(self.by_country_url(country_code, range)?).await
    }
}

pub fn get_summary<C, F, M>(ctx: &Context<C>, client: &ApiClient, callback: F)
where
    C: Component,
    F: Fn(anyhow::Result<GlobalSummary>) -> M + 'static,
    M: Into<C::Message>,
{
    let url = client.summary_url();
    ctx.link().send_future(async move {
        let result = fetch_json_content(url).await;
        callback(result)
    });
}
