use crate::dom::DomElement;
use covid_sidebar::{Chart, ChartData, Error, Result};
use gloo_utils::format::JsValueSerdeExt;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Chart;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(context: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;

        #[wasm_bindgen(method, setter)]
        pub fn set_data(this: &Chart, data: &JsValue);

        #[wasm_bindgen(method)]
        pub fn update(this: &Chart);

        #[wasm_bindgen(method)]
        pub fn destroy(this: &Chart);
    }
}

#[derive(Serialize)]
struct ChartConfig<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    data: ChartData,
}

/// A Chart.js line chart. Expects the global `Chart` constructor to be loaded
/// by the page. Dropping it destroys the Chart.js instance.
pub struct ChartJs {
    inner: js::Chart,
}

impl ChartJs {
    pub fn line(canvas: &DomElement) -> Result<Self> {
        let canvas: HtmlCanvasElement = canvas
            .as_element()
            .clone()
            .dyn_into()
            .map_err(|_| Error::MissingElement("canvas".to_string()))?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(Error::NoDrawingContext)?;
        let config = ChartConfig {
            kind: "line",
            data: ChartData::default(),
        };
        let config = JsValue::from_serde(&config).map_err(|err| {
            log::error!("cannot encode chart config: {}", err);
            Error::NoDrawingContext
        })?;
        let inner = js::Chart::new(&context, &config).map_err(|err| {
            log::error!("Chart.js refused the canvas: {:?}", err);
            Error::NoDrawingContext
        })?;
        Ok(ChartJs { inner })
    }
}

impl Chart for ChartJs {
    fn set_data(&mut self, data: ChartData) {
        match JsValue::from_serde(&data) {
            Ok(data) => self.inner.set_data(&data),
            Err(err) => log::warn!("cannot encode chart data: {}", err),
        }
    }

    fn update(&mut self) {
        self.inner.update();
    }
}

impl Drop for ChartJs {
    fn drop(&mut self) {
        self.inner.destroy();
    }
}
