use crate::{
    date::ChartRange, dom::require_id, total_chart_data, Chart, ChartSelection,
    CovidCountrySummary, DailyRecord, Element, Platform, Result, Selector, SidebarContent,
    SELECTED_CLASS,
};
use htmlescape::encode_minimal;
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

pub const CANVAS_ID: &str = "sidebar-canvas";

fn total_and_new_row(title: &str, total: i64, new: i64) -> String {
    format!(
        r#"
                    <tr>
                        <td>{title}</td>
                        <td style="text-align: right;">{total}</td>
                        <td>&nbsp;&nbsp;</td>
                        <td>New: </td>
                        <td style="text-align: right;">{new}</td>
                    </tr>"#,
        title = title,
        total = total,
        new = new,
    )
}

/// State of a mounted chart, shared by the selector click handlers.
struct ChartView<P: Platform> {
    platform: Rc<P>,
    country_code: String,
    selection: ChartSelection,
    selectors: Vec<(Selector, P::Element)>,
    chart: P::Chart,
}

impl<P: Platform> ChartView<P> {
    fn element(&self, selector: Selector) -> Option<&P::Element> {
        self.selectors
            .iter()
            .find(|(s, _)| *s == selector)
            .map(|(_, element)| element)
    }

    fn mark(&self, selector: Selector) {
        if let Some(element) = self.element(selector) {
            element.add_class(SELECTED_CLASS);
        }
        if let Some(element) = self.element(selector.counterpart()) {
            element.remove_class(SELECTED_CLASS);
        }
    }

    fn select(view: &Rc<RefCell<Self>>, selector: Selector) {
        {
            let mut this = view.borrow_mut();
            if !this.selection.select(selector) {
                return;
            }
            this.mark(selector);
        }
        Self::redraw(view);
    }

    fn redraw(view: &Rc<RefCell<Self>>) {
        let selection = view.borrow().selection;
        if selection.total() {
            Self::show_total_chart(view, selection.month());
        } else {
            Self::show_live_chart(view, selection.month());
        }
    }

    fn show_total_chart(view: &Rc<RefCell<Self>>, month: bool) {
        let (platform, country_code) = {
            let this = view.borrow();
            (this.platform.clone(), this.country_code.clone())
        };
        let today = platform.today();
        let range = match ChartRange::ending(today, month) {
            Some(range) => range,
            None => {
                log::warn!("no chart range ends at {}", today);
                return;
            }
        };
        let weak: Weak<RefCell<Self>> = Rc::downgrade(view);
        let country = country_code.clone();
        platform.by_country(
            &country_code,
            range,
            Box::new(move |result: Result<Vec<DailyRecord>>| {
                let view = match weak.upgrade() {
                    Some(view) => view,
                    None => return,
                };
                match result {
                    Ok(records) => {
                        let mut this = view.borrow_mut();
                        this.chart.set_data(total_chart_data(&records, month));
                        this.chart.update();
                    }
                    Err(err) => log::warn!("timeline of {} not updated: {}", country, err),
                }
            }),
        );
    }

    // Live counts have no data source yet; the chart keeps what it shows.
    fn show_live_chart(_view: &Rc<RefCell<Self>>, _month: bool) {}
}

struct Mounted<P: Platform> {
    view: Rc<RefCell<ChartView<P>>>,
    _listeners: Vec<<P::Element as Element>::Listener>,
}

/// Statistics and timeline chart of a single country.
pub struct CountrySidebarContent<P: Platform> {
    summary: CovidCountrySummary,
    platform: Rc<P>,
    mounted: Option<Mounted<P>>,
}

impl<P: Platform> CountrySidebarContent<P> {
    pub fn new(summary: CovidCountrySummary, platform: Rc<P>) -> Self {
        CountrySidebarContent {
            summary,
            platform,
            mounted: None,
        }
    }

    /// The chart mode while mounted.
    pub fn selection(&self) -> Option<ChartSelection> {
        self.mounted
            .as_ref()
            .map(|mounted| mounted.view.borrow().selection)
    }

    /// Same as clicking the link of `selector`. Does nothing when unmounted.
    pub fn select(&self, selector: Selector) {
        if let Some(mounted) = &self.mounted {
            ChartView::select(&mounted.view, selector);
        }
    }
}

impl<P: Platform> SidebarContent<P::Element> for CountrySidebarContent<P> {
    fn render(&self) -> String {
        let s = &self.summary;
        format!(
            r##"
            <h1>{country}</h1>
            As of: {date}

            <br><br>

            <table style="width: 80%;">
                <tbody>
                    <tr>
                        <td>Live Cases: </td>
                        <td style="text-align: right;">{live}</td>
                    </tr>{confirmed}{deaths}{recovered}
                </tbody>
            </table>

            <h1>Covid timeline</h1>

            <div>
                <a href="#" id="{total_id}"> Total </a> &nbsp;
                <a href="#" id="{live_id}"> Live </a> &nbsp;
                | &nbsp;
                <a href="#" id="{week_id}"> Week </a> &nbsp;
                <a href="#" id="{month_id}"> Month </a>
            </div> <br>

            <canvas width="400" height="300" style="width: 400px; height: 300px;" id="{canvas_id}"></canvas>
        "##,
            country = encode_minimal(s.country()),
            date = s.date().format("%-m/%-d/%Y, %-I:%M:%S %p"),
            live = s.live_cases(),
            confirmed = total_and_new_row("Total Cases: ", s.total_confirmed(), s.new_confirmed()),
            deaths = total_and_new_row("Total Deaths:", s.total_deaths(), s.new_deaths()),
            recovered =
                total_and_new_row("Total recoveries:", s.total_recovered(), s.new_recovered()),
            total_id = Selector::Total.id(),
            live_id = Selector::Live.id(),
            week_id = Selector::Week.id(),
            month_id = Selector::Month.id(),
            canvas_id = CANVAS_ID,
        )
    }

    fn on_mount(&mut self, container: &P::Element) -> Result<()> {
        self.on_unmount();
        let canvas = require_id(container, CANVAS_ID)?;
        let selectors = Selector::ALL
            .iter()
            .map(|&selector| {
                require_id(container, selector.id()).map(|element| (selector, element))
            })
            .collect::<Result<Vec<_>>>()?;

        let selection = ChartSelection::default();
        for (selector, element) in &selectors {
            if selection.is_selected(*selector) {
                element.add_class(SELECTED_CLASS);
            } else {
                element.remove_class(SELECTED_CLASS);
            }
        }

        let chart = self.platform.line_chart(&canvas)?;
        let view = Rc::new(RefCell::new(ChartView {
            platform: self.platform.clone(),
            country_code: self.summary.country_code().clone(),
            selection,
            selectors: selectors.clone(),
            chart,
        }));
        let listeners = selectors
            .iter()
            .map(|(selector, element)| {
                let selector = *selector;
                let weak = Rc::downgrade(&view);
                element.on_click(Box::new(move || {
                    if let Some(view) = weak.upgrade() {
                        ChartView::select(&view, selector);
                    }
                }))
            })
            .collect();
        log::debug!("mounted sidebar of {}", self.summary.country());
        ChartView::redraw(&view);
        self.mounted = Some(Mounted {
            view,
            _listeners: listeners,
        });
        Ok(())
    }

    fn on_unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::debug!("unmounted sidebar of {}", self.summary.country());
        }
    }
}
