use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::browser::{current_year, scroll_to_top, scroll_y, ScrollListener, Timeout};
use crate::{
    navigation::{opens_new_tab, scroll_top_visible},
    newsletter::{NewsletterForm, NewsletterStatus, SUBSCRIBED_DISPLAY_MS, SUBSCRIBE_DELAY_MS},
};

const GITHUB_URL: &str = "https://github.com/Vicky2002p";
const LINKEDIN_URL: &str = "https://linkedin.com/in/vivek-patel-491458223";
const EMAIL_URL: &str = "mailto:vivekjpatel2002@gmail.com";

struct FooterLink {
    label: &'static str,
    href: &'static str,
}

struct FooterSection {
    title: &'static str,
    links: [FooterLink; 3],
}

const FOOTER_SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title: "Navigation",
        links: [
            FooterLink { label: "Home", href: "#home" },
            FooterLink { label: "About", href: "#about" },
            FooterLink { label: "Experience", href: "#experience" },
        ],
    },
    FooterSection {
        title: "Explore",
        links: [
            FooterLink { label: "Skills", href: "#skills" },
            FooterLink { label: "Projects", href: "#projects" },
            FooterLink { label: "Contact", href: "#contact" },
        ],
    },
    FooterSection {
        title: "Connect",
        links: [
            FooterLink { label: "GitHub", href: GITHUB_URL },
            FooterLink { label: "LinkedIn", href: LINKEDIN_URL },
            FooterLink { label: "Email", href: EMAIL_URL },
        ],
    },
];

const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("GitHub", GITHUB_URL, "social-github"),
    ("LinkedIn", LINKEDIN_URL, "social-linkedin"),
    ("Email", EMAIL_URL, "social-email"),
];

pub enum NewsletterAction {
    Edit(String),
    Submit,
    Settle,
    Reset,
}

impl Reducible for NewsletterForm {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            NewsletterAction::Edit(value) => next.set_email(value),
            NewsletterAction::Submit => {
                let _ = next.submit();
            }
            NewsletterAction::Settle => next.settle(),
            NewsletterAction::Reset => next.reset(),
        }

        Rc::new(next)
    }
}

fn footer_link(link: &FooterLink) -> Html {
    html! {
        <a
            class="footer-link"
            href={link.href}
            target={opens_new_tab(link.href).then_some("_blank")}
            rel={opens_new_tab(link.href).then_some("noopener noreferrer")}
        >
            {link.label}
        </a>
    }
}

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let form = use_reducer(NewsletterForm::default);

    // Placeholder flow: no request is made, the delays only mimic one.
    {
        let dispatcher = form.dispatcher();
        use_effect_with(form.status, move |status| {
            let timer = match status {
                NewsletterStatus::Subscribing => Timeout::new(SUBSCRIBE_DELAY_MS, move || {
                    dispatcher.dispatch(NewsletterAction::Settle)
                }),
                NewsletterStatus::Subscribed => Timeout::new(SUBSCRIBED_DISPLAY_MS, move || {
                    dispatcher.dispatch(NewsletterAction::Reset)
                }),
                NewsletterStatus::Idle => None,
            };
            move || drop(timer)
        });
    }

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            dispatcher.dispatch(NewsletterAction::Edit(value));
        })
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(NewsletterAction::Submit);
        })
    };

    let disabled = form.controls_disabled();

    html! {
        <div class="newsletter">
            <h3 class="newsletter-title">{"Stay Updated"}</h3>
            <p class="muted">{"Get notified about new projects, insights, and opportunities"}</p>
            <form class="newsletter-form" novalidate={true} {onsubmit}>
                <input
                    type="email"
                    value={form.email.clone()}
                    placeholder="your@email.com"
                    aria-label="Email address"
                    aria-invalid={form.error.is_some().to_string()}
                    {disabled}
                    {oninput}
                />
                <button
                    type="submit"
                    class={classes!(
                        "button",
                        "button-primary",
                        (form.status == NewsletterStatus::Subscribed).then_some("is-success"),
                    )}
                    {disabled}
                >
                    if form.status == NewsletterStatus::Subscribing {
                        <span class="spinner" aria-hidden="true" />
                    }
                    {form.button_label()}
                </button>
            </form>
            if let Some(error) = form.error {
                <p class="form-error" role="alert">{error.message()}</p>
            } else {
                <p class="muted small">{"💌 No spam, unsubscribe anytime"}</p>
            }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let show_scroll_top = use_state_eq(|| scroll_top_visible(scroll_y()));
    let year = use_memo((), |_| current_year());

    {
        let show_scroll_top = show_scroll_top.clone();
        use_effect_with((), move |_| {
            let listener = ScrollListener::new(move |offset| {
                show_scroll_top.set(scroll_top_visible(offset));
            });
            move || drop(listener)
        });
    }

    let on_scroll_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <Newsletter />

            <div class="footer-grid">
                <div class="footer-brand">
                    <a class="brand" href="#home">
                        <span class="brand-mark" aria-hidden="true">{"V"}</span>
                        <span class="brand-text">
                            <span class="brand-name">{"Vivek"}</span>
                            <span class="brand-role">{"DEVELOPER"}</span>
                        </span>
                    </a>
                    <p class="muted">
                        {"Crafting beautiful, performant digital experiences with modern technologies \
                          and creative problem-solving."}
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(label, href, class)| html! {
                            <a
                                class={classes!("social-link", *class)}
                                href={*href}
                                target={opens_new_tab(href).then_some("_blank")}
                                rel={opens_new_tab(href).then_some("noopener noreferrer")}
                                aria-label={*label}
                            >
                                {label.chars().next().map(String::from).unwrap_or_default()}
                            </a>
                        }) }
                    </div>
                </div>

                { for FOOTER_SECTIONS.iter().map(|section| html! {
                    <nav class="footer-section" aria-label={section.title}>
                        <h4>{section.title}</h4>
                        <ul>
                            { for section.links.iter().map(|link| html! {
                                <li>{ footer_link(link) }</li>
                            }) }
                        </ul>
                    </nav>
                }) }
            </div>

            <p class="copyright">{format!("© {} Vivek Patel. All rights reserved.", *year)}</p>

            <button
                type="button"
                class={classes!("scroll-top", (*show_scroll_top).then_some("is-visible"))}
                aria-label="Scroll to top"
                aria-hidden={(!*show_scroll_top).to_string()}
                tabindex={if *show_scroll_top { "0" } else { "-1" }}
                onclick={on_scroll_top}
            >
                {"↑"}
            </button>
        </footer>
    }
}
