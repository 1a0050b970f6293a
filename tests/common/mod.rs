#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use covid_sidebar::{
    date::ChartRange, Callback, Chart, ChartData, CovidCountrySummary, DailyRecord, Element,
    Error, Platform, Result, CONTENT_CLASS, OPENER_CLASS,
};
use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
    rc::{Rc, Weak},
};

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct Node {
    id: Option<String>,
    classes: RefCell<BTreeSet<String>>,
    text: RefCell<String>,
    inner_html: RefCell<String>,
    children: RefCell<Vec<FakeElement>>,
    listeners: RefCell<Vec<(u64, Handler)>>,
    next_listener: Cell<u64>,
}

/// An element tree good enough to mount the sidebar on. Setting inner HTML
/// creates one child per `id="..."` attribute found in the markup.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<Node>);

impl FakeElement {
    pub fn new() -> Self {
        FakeElement::default()
    }

    pub fn with_id(id: &str) -> Self {
        FakeElement(Rc::new(Node {
            id: Some(id.to_string()),
            ..Node::default()
        }))
    }

    pub fn with_class(class: &str) -> Self {
        let element = FakeElement::new();
        element.add_class(class);
        element
    }

    pub fn append(&self, child: FakeElement) -> FakeElement {
        self.0.children.borrow_mut().push(child.clone());
        child
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().iter().cloned().collect()
    }

    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub fn inner_html(&self) -> String {
        self.0.inner_html.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    pub fn click(&self) {
        let handlers: Vec<Handler> = self
            .0
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    pub fn by_id(&self, id: &str) -> FakeElement {
        self.query_selector(&format!("#{}", id))
            .unwrap_or_else(|| panic!("no element #{}", id))
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.0.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else {
            false
        }
    }
}

pub struct FakeListener {
    node: Weak<Node>,
    key: u64,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(node) = self.node.upgrade() {
            node.listeners.borrow_mut().retain(|(key, _)| *key != self.key);
        }
    }
}

impl Element for FakeElement {
    type Listener = FakeListener;

    fn query_selector(&self, selector: &str) -> Option<Self> {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.query_selector(selector) {
                return Some(found);
            }
        }
        None
    }

    fn add_class(&self, class: &str) {
        self.0.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().remove(class);
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_string();
    }

    fn set_inner_html(&self, html: &str) {
        *self.0.inner_html.borrow_mut() = html.to_string();
        let mut children = Vec::new();
        let mut rest = html;
        while let Some(start) = rest.find("id=\"") {
            rest = &rest[start + 4..];
            match rest.find('"') {
                Some(end) => {
                    children.push(FakeElement::with_id(&rest[..end]));
                    rest = &rest[end..];
                }
                None => break,
            }
        }
        *self.0.children.borrow_mut() = children;
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> FakeListener {
        let key = self.0.next_listener.get();
        self.0.next_listener.set(key + 1);
        self.0
            .listeners
            .borrow_mut()
            .push((key, Rc::new(RefCell::new(handler))));
        FakeListener {
            node: Rc::downgrade(&self.0),
            key,
        }
    }
}

#[derive(Debug, Default)]
pub struct ChartLog {
    pub data: Option<ChartData>,
    pub updates: usize,
}

pub struct FakeChart(Rc<RefCell<ChartLog>>);

impl Chart for FakeChart {
    fn set_data(&mut self, data: ChartData) {
        self.0.borrow_mut().data = Some(data);
    }

    fn update(&mut self) {
        self.0.borrow_mut().updates += 1;
    }
}

pub struct Request {
    pub country_code: String,
    pub range: ChartRange,
    callback: Callback<Vec<DailyRecord>>,
}

/// Answers timeline requests with canned records, immediately or when the
/// test resolves them.
pub struct FakePlatform {
    today: NaiveDate,
    records: RefCell<Vec<DailyRecord>>,
    deferred: Cell<bool>,
    no_context: Cell<bool>,
    requests: RefCell<Vec<(String, ChartRange)>>,
    pending: RefCell<Vec<Request>>,
    charts: RefCell<Vec<Rc<RefCell<ChartLog>>>>,
}

impl FakePlatform {
    pub fn new(today: NaiveDate) -> Rc<Self> {
        Rc::new(FakePlatform {
            today,
            records: RefCell::new(Vec::new()),
            deferred: Cell::new(false),
            no_context: Cell::new(false),
            requests: RefCell::new(Vec::new()),
            pending: RefCell::new(Vec::new()),
            charts: RefCell::new(Vec::new()),
        })
    }

    pub fn set_records(&self, records: Vec<DailyRecord>) {
        *self.records.borrow_mut() = records;
    }

    pub fn defer(&self) {
        self.deferred.set(true);
    }

    pub fn without_drawing_context(&self) {
        self.no_context.set(true);
    }

    pub fn requests(&self) -> Vec<(String, ChartRange)> {
        self.requests.borrow().clone()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn resolve(&self, index: usize, result: Result<Vec<DailyRecord>>) {
        let request = self.pending.borrow_mut().remove(index);
        (request.callback)(result);
    }

    pub fn chart(&self) -> Rc<RefCell<ChartLog>> {
        self.charts
            .borrow()
            .last()
            .cloned()
            .expect("no chart created")
    }

    pub fn chart_count(&self) -> usize {
        self.charts.borrow().len()
    }
}

impl Platform for FakePlatform {
    type Element = FakeElement;
    type Chart = FakeChart;

    fn line_chart(&self, _canvas: &FakeElement) -> Result<FakeChart> {
        if self.no_context.get() {
            return Err(Error::NoDrawingContext);
        }
        let log = Rc::new(RefCell::new(ChartLog::default()));
        self.charts.borrow_mut().push(log.clone());
        Ok(FakeChart(log))
    }

    fn by_country(
        &self,
        country_code: &str,
        range: ChartRange,
        callback: Callback<Vec<DailyRecord>>,
    ) {
        self.requests
            .borrow_mut()
            .push((country_code.to_string(), range));
        if self.deferred.get() {
            self.pending.borrow_mut().push(Request {
                country_code: country_code.to_string(),
                range,
                callback,
            });
        } else {
            let records = self.records.borrow().clone();
            callback(Ok(records));
        }
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// A sidebar container with its toggle and content children.
pub fn sidebar_container() -> (FakeElement, FakeElement, FakeElement) {
    let container = FakeElement::new();
    let opener = container.append(FakeElement::with_class(OPENER_CLASS));
    let content = container.append(FakeElement::with_class(CONTENT_CLASS));
    (container, opener, content)
}

pub fn summary(confirmed: i64, deaths: i64, recovered: i64) -> CovidCountrySummary {
    let date = Utc.with_ymd_and_hms(2020, 4, 10, 12, 0, 0).unwrap();
    CovidCountrySummary::new("Germany", "DE", date)
        .with_totals(confirmed, deaths, recovered)
        .with_new_cases(3, 2, 1)
}

pub fn record(y: i32, m: u32, d: u32, confirmed: i64, deaths: i64, recovered: i64) -> DailyRecord {
    DailyRecord {
        date: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
        confirmed,
        deaths,
        recovered,
    }
}

pub fn midnight(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
