mod about;
mod browser;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

use crate::{
    content::Catalog,
    telemetry::{self, log_event, LogLevel, DEFAULT_LOG_LEVEL},
};
use serde_json::json;

use about::About;
use contact::GetInTouch;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

#[derive(Properties, PartialEq)]
struct AppProps {
    catalog: Rc<Catalog>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <>
            <a class="skip-link" href="#home">{"Skip to main content"}</a>
            <Header />
            <main id="content" class="page-shell">
                <Hero />
                <About />
                <Experience entries={props.catalog.experience.clone()} />
                <Skills categories={props.catalog.skills.clone()} />
                <Projects projects={props.catalog.projects.clone()} />
                <GetInTouch />
            </main>
            <Footer />
        </>
    }
}

fn build_log_level() -> LogLevel {
    option_env!("PORTFOLIO_LOG_LEVEL")
        .and_then(LogLevel::parse)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn run() {
    telemetry::init(build_log_level());

    let catalog = Catalog::load().unwrap_or_else(|error| {
        log_event(
            LogLevel::Error,
            "catalog_load_failed",
            json!({ "error": error.to_string() }),
        );
        Catalog::default()
    });
    log_event(
        LogLevel::Debug,
        "catalog_loaded",
        json!({
            "projects": catalog.projects.len(),
            "experience": catalog.experience.len(),
            "skill_categories": catalog.skills.len(),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            catalog: Rc::new(catalog),
        },
    )
    .render();
}
