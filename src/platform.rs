use crate::{date::ChartRange, Chart, DailyRecord, Element, Result};
use chrono::{Local, NaiveDate};

/// Receives the outcome of an asynchronous request.
pub type Callback<T> = Box<dyn FnOnce(Result<T>)>;

/// Everything the sidebar needs from its host environment.
pub trait Platform: 'static {
    type Element: Element;
    type Chart: Chart + 'static;

    /// Creates an empty line chart drawing on `canvas`.
    fn line_chart(&self, canvas: &Self::Element) -> Result<Self::Chart>;

    /// Fetches the daily totals of a country within `range`, oldest first.
    /// `callback` may run before this returns or at any later time.
    fn by_country(
        &self,
        country_code: &str,
        range: ChartRange,
        callback: Callback<Vec<DailyRecord>>,
    );

    /// Today's local date.
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
