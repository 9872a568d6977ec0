use std::{iter, rc::Rc};
use yew::prelude::*;

use super::browser::{scroll_y, Interval, ScrollListener, Timeout};
use crate::greeting::{
    parallax_offset, Greeting, GreetingCycle, CROSS_FADE_MS, GREETINGS, ROTATION_PERIOD_MS,
};

pub enum GreetingAction {
    Tick,
    Settle,
}

impl Reducible for GreetingCycle {
    type Action = GreetingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            GreetingAction::Tick => self.tick(),
            GreetingAction::Settle => self.settle(),
        })
    }
}

fn greeting_heading(greeting: &Greeting, phase: &'static str) -> Html {
    html! {
        <h1
            key={greeting.language}
            class={classes!("greeting", phase)}
            aria-hidden={(phase == "is-exiting").to_string()}
        >
            <span class="greeting-text">{greeting.text}</span>
            {" "}
            <span class="greeting-name">{greeting.name}</span>
        </h1>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let cycle = use_reducer(|| GreetingCycle::new(GREETINGS.len()));
    let parallax = use_state_eq(|| parallax_offset(scroll_y()));

    {
        let dispatcher = cycle.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(ROTATION_PERIOD_MS, move || {
                dispatcher.dispatch(GreetingAction::Tick);
            });
            move || drop(interval)
        });
    }

    {
        let dispatcher = cycle.dispatcher();
        use_effect_with(cycle.exiting(), move |exiting| {
            let settle = exiting.map(|_| {
                Timeout::new(CROSS_FADE_MS, move || dispatcher.dispatch(GreetingAction::Settle))
            });
            move || drop(settle)
        });
    }

    {
        let parallax = parallax.clone();
        use_effect_with((), move |_| {
            let listener = ScrollListener::new(move |offset| parallax.set(parallax_offset(offset)));
            move || drop(listener)
        });
    }

    let background_style = format!("transform: translate3d(0, {:.2}px, 0);", *parallax);
    let stage = cycle
        .exiting()
        .map(|index| greeting_heading(&GREETINGS[index], "is-exiting"))
        .into_iter()
        .chain(iter::once(greeting_heading(&GREETINGS[cycle.current()], "is-entering")));

    html! {
        <section id="home" class="hero">
            <div class="hero-background" style={background_style} aria-hidden="true" />
            <div class="hero-content">
                <div class="greeting-stage" aria-live="polite">
                    { for stage }
                </div>
                <p class="hero-tagline">
                    {"Enthusiastic software developer with hands-on experience in full-stack development, \
                      data-driven solutions, and system optimization. Proficient in building efficient \
                      applications with Python, React, and SQL."}
                </p>
                <a class="cta cta-hero" href="#projects">{"View My Projects"}</a>
            </div>
        </section>
    }
}
