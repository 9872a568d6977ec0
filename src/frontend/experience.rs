use yew::prelude::*;

use crate::content::ExperienceEntry;

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub entries: Vec<ExperienceEntry>,
}

#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    html! {
        <section id="experience" class="section experience" aria-labelledby="experience-heading">
            <div class="section-header">
                <span class="eyebrow">{"MY JOURNEY"}</span>
                <h2 id="experience-heading" class="section-title">{"Professional Experience"}</h2>
                <p class="section-lede">
                    {"Diverse roles and responsibilities that have shaped my growth as a developer"}
                </p>
            </div>

            <ol class="timeline">
                { for props.entries.iter().map(|entry| html! {
                    <li class="timeline-item">
                        <span class="timeline-dot" aria-hidden="true" />
                        <article class="card experience-card">
                            <div class="experience-meta">
                                <span class="experience-company">{&entry.company}</span>
                                <span class="experience-duration">{&entry.duration}</span>
                            </div>
                            <h3 class="experience-role">{&entry.role}</h3>
                            <p class="experience-location">{&entry.location}</p>
                            <ul class="achievement-list">
                                { for entry.achievements.iter().map(|achievement| html! {
                                    <li class="achievement">
                                        <span class="check" aria-hidden="true">{"✓"}</span>
                                        <p>{achievement}</p>
                                    </li>
                                }) }
                            </ul>
                        </article>
                    </li>
                }) }
            </ol>
        </section>
    }
}
