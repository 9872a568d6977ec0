use std::rc::Rc;
use yew::prelude::*;

use super::browser::{scroll_y, ScrollListener};
use crate::navigation::{HeaderState, NAV_ITEMS};

pub enum HeaderAction {
    Scroll(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            HeaderAction::Scroll(offset) => self.on_scroll(offset),
            HeaderAction::ToggleMenu => self.toggle_menu(),
            HeaderAction::CloseMenu => self.close_menu(),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let state = use_reducer(HeaderState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(HeaderAction::Scroll(scroll_y()));
            let listener = ScrollListener::new(move |offset| {
                dispatcher.dispatch(HeaderAction::Scroll(offset));
            });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeaderAction::ToggleMenu))
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeaderAction::CloseMenu))
    };

    let menu_label = if state.menu_open { "Close menu" } else { "Open menu" };

    html! {
        <>
            <header
                class={classes!(
                    "site-header",
                    (!state.visible).then_some("is-hidden"),
                    state.scrolled.then_some("is-scrolled"),
                )}
            >
                <div class="site-header-inner">
                    <a class="brand" href="#home">
                        <span class="brand-mark" aria-hidden="true">{"V"}</span>
                        <span class="brand-text">
                            <span class="brand-name">{"Vivek"}</span>
                            <span class="brand-role">{"Developer"}</span>
                        </span>
                    </a>

                    <nav class="desktop-nav" aria-label="Primary">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a class="nav-link" href={item.href}>{item.label}</a>
                        }) }
                    </nav>

                    <a class="cta cta-header" href="#contact">
                        {"Get in Touch"}
                        <span class="cta-arrow" aria-hidden="true">{"→"}</span>
                    </a>

                    <button
                        class={classes!("menu-toggle", state.menu_open.then_some("is-open"))}
                        type="button"
                        aria-label={menu_label}
                        aria-expanded={state.menu_open.to_string()}
                        aria-controls="mobile-menu"
                        onclick={on_toggle}
                    >
                        <span class="menu-bar" />
                        <span class="menu-bar" />
                        <span class="menu-bar" />
                    </button>
                </div>
            </header>

            if state.menu_open {
                <div id="mobile-menu" class="mobile-menu">
                    <nav class="mobile-nav" aria-label="Mobile">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a class="mobile-nav-link" href={item.href} onclick={on_close.clone()}>
                                {item.label}
                            </a>
                        }) }
                        <a class="cta cta-mobile" href="#contact" onclick={on_close.clone()}>
                            {"Get in Touch"}
                        </a>
                    </nav>
                </div>
            }

            <div class="header-spacer" aria-hidden="true" />
        </>
    }
}
