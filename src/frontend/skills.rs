use yew::prelude::*;

use crate::{
    content::{Skill, SkillCategory},
    skills::{category_stats, SkillSelection},
};

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub categories: Vec<SkillCategory>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let selection = use_state(SkillSelection::default);
    let category_count = props.categories.len();

    let tabs = props.categories.iter().enumerate().map(|(index, category)| {
        let active = selection.selected() == index;
        let onclick = {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| {
                selection.set((*selection).select(index, category_count));
            })
        };

        html! {
            <button
                type="button"
                role="tab"
                aria-selected={active.to_string()}
                class={classes!(
                    "skill-tab",
                    format!("tone-{}", category.color),
                    active.then_some("is-active"),
                )}
                {onclick}
            >
                <span class="skill-tab-icon" aria-hidden="true">{&category.icon}</span>
                {&category.category}
            </button>
        }
    });

    html! {
        <section id="skills" class="section skills" aria-labelledby="skills-heading">
            <div class="section-header">
                <span class="eyebrow">{"EXPERTISE & PROFICIENCY"}</span>
                <h2 id="skills-heading" class="section-title">{"Technical Skills"}</h2>
                <p class="section-lede">
                    {"A diverse toolkit of technologies that I've mastered through hands-on experience"}
                </p>
            </div>

            <div class="skill-tabs" role="tablist">
                { for tabs }
            </div>

            if let Some(category) = selection.category(&props.categories) {
                <CategoryPanel key={selection.selected()} category={category.clone()} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CategoryPanelProps {
    category: SkillCategory,
}

/// Remounted on every selection change via its key, which replays the fade-in.
#[function_component(CategoryPanel)]
fn category_panel(props: &CategoryPanelProps) -> Html {
    let category = &props.category;
    let tone = format!("tone-{}", category.color);

    html! {
        <div class={classes!("skill-panel", tone.clone())} role="tabpanel">
            <div class="skill-panel-header">
                <span class="skill-panel-icon" aria-hidden="true">{&category.icon}</span>
                <div>
                    <h3>{&category.category}</h3>
                    <p class="muted">{format!("{} core competencies", category.skills.len())}</p>
                </div>
            </div>
            <p class="skill-panel-description">{&category.description}</p>

            <div class="skill-grid">
                { for category.skills.iter().enumerate().map(|(index, skill)| html! {
                    <SkillCard key={skill.name.clone()} skill={skill.clone()} {index} tone={tone.clone()} />
                }) }
            </div>

            <div class="skill-stats">
                { for category_stats(category).into_iter().map(|stat| html! {
                    <div class="card stat-card">
                        <div class="stat-icon" aria-hidden="true">{stat.icon}</div>
                        <div class="stat-value">{stat.value}</div>
                        <p class="stat-label">{stat.label}</p>
                    </div>
                }) }
            </div>

            <div class="card mastery-card">
                <h3>
                    <span aria-hidden="true">{&category.icon}</span>
                    {format!(" Mastery in {}", category.category)}
                </h3>
                <p>
                    {format!(
                        "I have developed strong proficiency in {}, working with ",
                        category.category.to_lowercase()
                    )}
                    <strong>{category.highlight()}</strong>
                    {" and more. Through hands-on experience in production environments, I've developed \
                      a deep understanding of best practices, performance optimization, and scalable \
                      architecture."}
                </p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    skill: Skill,
    index: usize,
    tone: String,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let bar_style = format!(
        "width: {}%; animation-delay: {}ms;",
        props.skill.level,
        props.index * 80 + 200
    );

    html! {
        <div class={classes!("card", "skill-card", props.tone.clone())}>
            <div class="skill-card-header">
                <h4>{&props.skill.name}</h4>
                <span class="check" aria-hidden="true">{"✓"}</span>
            </div>
            <div class="proficiency">
                <span class="label">{"Proficiency"}</span>
                <span class="proficiency-value">{format!("{}%", props.skill.level)}</span>
            </div>
            <div
                class="proficiency-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={props.skill.level.to_string()}
            >
                <div class="proficiency-bar" style={bar_style} />
            </div>
            <span class="badge">{"✓ Experienced"}</span>
        </div>
    }
}
