use chrono::{DateTime, Utc};
use getset::{CopyGetters, Getters};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot statistics of one country, as published by the summary endpoint.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "PascalCase")
)]
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct CovidCountrySummary {
    /// Returns the country name.
    #[getset(get = "pub")]
    country: String,

    /// Returns the ISO 3166-1 alpha-2 code used to query the timeline.
    #[getset(get = "pub")]
    country_code: String,

    /// Returns the time of the snapshot.
    #[getset(get_copy = "pub")]
    date: DateTime<Utc>,

    #[getset(get_copy = "pub")]
    total_confirmed: i64,

    #[getset(get_copy = "pub")]
    total_deaths: i64,

    #[getset(get_copy = "pub")]
    total_recovered: i64,

    #[getset(get_copy = "pub")]
    new_confirmed: i64,

    #[getset(get_copy = "pub")]
    new_deaths: i64,

    #[getset(get_copy = "pub")]
    new_recovered: i64,
}

impl CovidCountrySummary {
    /// Creates a summary with all counters at zero.
    pub fn new(
        country: impl Into<String>,
        country_code: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        CovidCountrySummary {
            country: country.into(),
            country_code: country_code.into(),
            date,
            total_confirmed: 0,
            total_deaths: 0,
            total_recovered: 0,
            new_confirmed: 0,
            new_deaths: 0,
            new_recovered: 0,
        }
    }

    pub fn with_totals(mut self, confirmed: i64, deaths: i64, recovered: i64) -> Self {
        self.total_confirmed = confirmed;
        self.total_deaths = deaths;
        self.total_recovered = recovered;
        self
    }

    pub fn with_new_cases(mut self, confirmed: i64, deaths: i64, recovered: i64) -> Self {
        self.new_confirmed = confirmed;
        self.new_deaths = deaths;
        self.new_recovered = recovered;
        self
    }

    /// Cases that are neither closed by death nor by recovery. Inconsistent
    /// upstream data can make this negative.
    pub fn live_cases(&self) -> i64 {
        self.total_confirmed - self.total_deaths - self.total_recovered
    }
}

/// One day of the per-country timeline.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "PascalCase")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: DateTime<Utc>,
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
}

/// The payload of the summary endpoint.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "PascalCase")
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalSummary {
    pub countries: Vec<CovidCountrySummary>,
}

impl GlobalSummary {
    /// Looks up a country by its code, ignoring ASCII case.
    pub fn find(&self, country_code: &str) -> Option<&CovidCountrySummary> {
        self.countries
            .iter()
            .find(|summary| summary.country_code.eq_ignore_ascii_case(country_code))
    }
}
