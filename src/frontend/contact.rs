use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::browser::{submission_timestamp, Timeout};
use crate::{
    contact::{deliver, ContactField, ContactForm, SubmissionStatus, STATUS_DISPLAY_MS},
    navigation::opens_new_tab,
    relay::{HttpRelay, RelayConfig, RelayError},
    telemetry::{log_event, LogLevel},
};
use serde_json::json;

pub enum ContactAction {
    Edit(ContactField, String),
    Submit,
    Complete(Result<(), RelayError>),
    Revert,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ContactAction::Edit(field, value) => next.update(field, value),
            ContactAction::Submit => {
                if let Err(rejected) = next.submit() {
                    log_event(
                        LogLevel::Debug,
                        "contact_submit_rejected",
                        json!({ "reason": format!("{rejected:?}") }),
                    );
                }
            }
            ContactAction::Complete(outcome) => next.complete(outcome),
            ContactAction::Revert => next.revert(),
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

struct ContactLink {
    icon: &'static str,
    label: &'static str,
    detail: &'static str,
    href: &'static str,
}

const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        icon: "✉️",
        label: "Email",
        detail: "vivekjpatel2002@gmail.com",
        href: "mailto:vivekjpatel2002@gmail.com",
    },
    ContactLink {
        icon: "💼",
        label: "LinkedIn",
        detail: "LinkedIn Profile",
        href: "https://linkedin.com/in/vivek-patel-491458223",
    },
    ContactLink {
        icon: "💻",
        label: "GitHub",
        detail: "View My Projects",
        href: "https://github.com/Vicky2002p",
    },
];

fn edit_input(form: &UseReducerHandle<ContactForm>, field: ContactField) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |event: InputEvent| {
        let value = event.target_unchecked_into::<HtmlInputElement>().value();
        dispatcher.dispatch(ContactAction::Edit(field, value));
    })
}

#[function_component(GetInTouch)]
pub fn get_in_touch() -> Html {
    let form = use_reducer(ContactForm::default);
    let relay = use_memo((), |_| HttpRelay::new(RelayConfig::from_build_env()));

    // Entering `Loading` is the only way `outbound` gets set, and the reducer
    // refuses a second submit, so this runs once per accepted submission.
    {
        let dispatcher = form.dispatcher();
        let outbound = form.outbound().cloned();
        let relay = relay.clone();
        use_effect_with(form.status(), move |status| {
            if *status == SubmissionStatus::Loading {
                if let Some(params) = outbound {
                    spawn_local(async move {
                        let outcome = deliver(&*relay, &params, submission_timestamp()).await;
                        dispatcher.dispatch(ContactAction::Complete(outcome));
                    });
                }
            }
            || ()
        });
    }

    {
        let dispatcher = form.dispatcher();
        use_effect_with(form.status(), move |status| {
            let revert = matches!(status, SubmissionStatus::Success | SubmissionStatus::Error)
                .then(|| Timeout::new(STATUS_DISPLAY_MS, move || dispatcher.dispatch(ContactAction::Revert)))
                .flatten();
            move || drop(revert)
        });
    }

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let on_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            dispatcher.dispatch(ContactAction::Edit(ContactField::Message, value));
        })
    };

    let status = form.status();
    let disabled = form.controls_disabled();
    let fields = form.fields();

    html! {
        <section id="contact" class="section contact" aria-labelledby="contact-heading">
            <div class="section-header">
                <h2 id="contact-heading" class="section-title">{"Let's Work Together"}</h2>
                <p class="section-lede">
                    {"Have a project in mind? Get in touch and let's create something amazing."}
                </p>
            </div>

            <div class="contact-layout">
                <form class="card contact-form" {onsubmit}>
                    <label class="field">
                        <span class="label">{"Name"}</span>
                        <input
                            type="text"
                            name="name"
                            value={fields.name.clone()}
                            placeholder="John Doe"
                            required={true}
                            {disabled}
                            oninput={edit_input(&form, ContactField::Name)}
                        />
                    </label>
                    <label class="field">
                        <span class="label">{"Email"}</span>
                        <input
                            type="email"
                            name="email"
                            value={fields.email.clone()}
                            placeholder="your@email.com"
                            required={true}
                            {disabled}
                            oninput={edit_input(&form, ContactField::Email)}
                        />
                    </label>
                    <label class="field">
                        <span class="label">{"Message"}</span>
                        <textarea
                            name="message"
                            value={fields.message.clone()}
                            placeholder="Tell me about your project..."
                            rows="6"
                            required={true}
                            {disabled}
                            oninput={on_message}
                        />
                    </label>
                    <button
                        type="submit"
                        class={classes!("button", "button-primary", "submit", format!("is-{}", status.as_str()))}
                        {disabled}
                    >
                        if status == SubmissionStatus::Loading {
                            <span class="spinner" aria-hidden="true" />
                        }
                        {status.button_label()}
                    </button>
                    if let Some(rejection) = form.rejection() {
                        <p class="form-error" role="alert">{rejection.message()}</p>
                    }
                </form>

                <div class="contact-links">
                    { for CONTACT_LINKS.iter().map(|link| html! {
                        <a
                            class="card contact-link"
                            href={link.href}
                            target={opens_new_tab(link.href).then_some("_blank")}
                            rel={opens_new_tab(link.href).then_some("noopener noreferrer")}
                        >
                            <span class="contact-icon" aria-hidden="true">{link.icon}</span>
                            <span>
                                <span class="label">{link.label}</span>
                                <span class="contact-detail">{link.detail}</span>
                            </span>
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}
