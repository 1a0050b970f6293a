use crate::{
    api::{self, ApiClient, FetchState},
    config::ShellOptions,
    dom::DomElement,
    platform::WebPlatform,
};
use anyhow::{anyhow, Error};
use covid_sidebar::{CountrySidebarContent, GlobalSummary, SidebarController};
use std::rc::Rc;
use yew::prelude::*;

pub enum Msg {
    GetSummary,
    GetSummarySuccess(GlobalSummary),
    GetSummaryFail(Error),
}

/// Hosts the sidebar container and fills it with the country named in the
/// query string.
pub struct App {
    options: ShellOptions,
    client: ApiClient,
    platform: Rc<WebPlatform>,
    container: NodeRef,
    sidebar: Option<SidebarController<DomElement>>,
    fetch_state: FetchState<()>,
}

impl App {
    fn show_country(&mut self, summary: &GlobalSummary) -> Result<(), Error> {
        let country = summary
            .find(self.options.country())
            .ok_or_else(|| anyhow!("no statistics for {}", self.options.country()))?;
        let sidebar = self
            .sidebar
            .as_mut()
            .ok_or_else(|| anyhow!("sidebar is not mounted"))?;
        sidebar.set_content(CountrySidebarContent::new(
            country.clone(),
            self.platform.clone(),
        ))?;
        sidebar.open();
        Ok(())
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let options = ShellOptions::from_location();
        let client = options.client();
        ctx.link().send_message(Msg::GetSummary);
        Self {
            platform: Rc::new(WebPlatform::new(client.clone())),
            options,
            client,
            container: NodeRef::default(),
            sidebar: None,
            fetch_state: FetchState::NotStarted,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::GetSummary => {
                self.fetch_state = FetchState::Fetching;
                api::get_summary(ctx, &self.client, |result| match result {
                    Ok(summary) => Msg::GetSummarySuccess(summary),
                    Err(err) => Msg::GetSummaryFail(err),
                });
                false
            }
            Msg::GetSummarySuccess(summary) => {
                self.fetch_state = match self.show_country(&summary) {
                    Ok(()) => FetchState::Success(()),
                    Err(err) => {
                        log::error!("{:#}", err);
                        FetchState::Failed(err)
                    }
                };
                true
            }
            Msg::GetSummaryFail(err) => {
                log::error!("summary not loaded: {:#}", err);
                self.fetch_state = FetchState::Failed(err);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(element) = self.container.cast::<web_sys::Element>() {
            match SidebarController::new(DomElement::new(element)) {
                Ok(sidebar) => self.sidebar = Some(sidebar),
                Err(err) => log::error!("sidebar not mounted: {}", err),
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = match self.fetch_state {
            FetchState::Failed(ref reason) => html! {<p>{format!("failed {}", reason)}</p>},
            FetchState::Fetching => html! {<p>{"loading"}</p>},
            FetchState::NotStarted => html! {<p>{"not started"}</p>},
            FetchState::Success(()) => html! {},
        };
        let retry = ctx.link().callback(|_| Msg::GetSummary);
        html! {
            <>
                <div class="sidebar-status" onclick={retry}>{status}</div>
                <div class="content-sidebar-container content-sidebar-container-closed" ref={self.container.clone()}>
                    <div class="sidebar-opener">{"<<"}</div>
                    <div class="sidebar-content"></div>
                </div>
            </>
        }
    }
}
