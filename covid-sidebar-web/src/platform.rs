use crate::{api::ApiClient, chart::ChartJs, dom::DomElement};
use covid_sidebar::{date::ChartRange, Callback, DailyRecord, Error, Platform, Result};
use yew::platform::spawn_local;

/// Runs the sidebar in the browser: DOM elements, Chart.js and the HTTP API.
pub struct WebPlatform {
    client: ApiClient,
}

impl WebPlatform {
    pub fn new(client: ApiClient) -> Self {
        WebPlatform { client }
    }
}

impl Platform for WebPlatform {
    type Element = DomElement;
    type Chart = ChartJs;

    fn line_chart(&self, canvas: &DomElement) -> Result<ChartJs> {
        ChartJs::line(canvas)
    }

    fn by_country(
        &self,
        country_code: &str,
        range: ChartRange,
        callback: Callback<Vec<DailyRecord>>,
    ) {
        let client = self.client.clone();
        let country_code = country_code.to_string();
        spawn_local(async move {
            let result = client
                .by_country(&country_code, range)
                .await
                .map_err(|err| Error::Fetch(format!("{:#}", err)));
            callback(result);
        });
    }
}
