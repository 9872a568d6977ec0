use yew::prelude::*;

use super::browser::image_fallback;

const PROFILE_IMAGE: &str = "/images/profile.jpg";

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about" aria-labelledby="about-heading">
            <h2 id="about-heading" class="section-title">{"About Me"}</h2>
            <div class="about-layout">
                <div class="about-portrait">
                    <div class="portrait-glow" aria-hidden="true" />
                    <img
                        class="portrait"
                        src={PROFILE_IMAGE}
                        alt="Vivek Patel"
                        width="300"
                        height="300"
                        onerror={image_fallback()}
                    />
                </div>
                <div class="about-copy">
                    <p>
                        {"I'm Vivek Patel, a software engineering graduate from the University of Windsor \
                          (BSc, Computer Science, May 2021 – Dec 2024). I specialize in building efficient, \
                          user-friendly applications using Python, React, and SQL."}
                    </p>
                    <p class="muted">
                        {"My experience spans full-stack development, data visualization, and system \
                          optimization, with a passion for turning complex requirements into innovative \
                          solutions. Based in Mississauga, ON, I'm eager to contribute to impactful \
                          software development projects."}
                    </p>
                </div>
            </div>
        </section>
    }
}
