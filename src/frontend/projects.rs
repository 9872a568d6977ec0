use yew::prelude::*;

use super::browser::image_fallback;
use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id="projects" class="section projects" aria-labelledby="projects-heading">
            <h2 id="projects-heading" class="section-title">{"My Projects"}</h2>
            <div class="project-grid">
                { for props.projects.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard
                        key={format!("{}-{index}", project.title)}
                        project={project.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <article class="card project-card">
            if let Some(image) = &project.image {
                <div class="project-media">
                    <img
                        src={image.clone()}
                        alt={project.title.clone()}
                        width="500"
                        height="300"
                        loading="lazy"
                        onerror={image_fallback()}
                    />
                    <span class="badge badge-featured">{"✨ Featured"}</span>
                </div>
            }

            <div class="project-body">
                <h3 class="project-title">{&project.title}</h3>
                <p class="project-description">{&project.description}</p>

                <p class="label">{"Tech Stack"}</p>
                <ul class="tech-stack">
                    { for project.tech_stack.iter().map(|tech| html! {
                        <li class="tech-chip">{tech}</li>
                    }) }
                </ul>

                <div class="project-links">
                    if let Some(live) = &project.live_link {
                        <a class="button button-primary" href={live.clone()} target="_blank" rel="noopener noreferrer">
                            {"Live Demo"}
                            <span aria-hidden="true">{" →"}</span>
                        </a>
                    }
                    if let Some(repo) = &project.github_link {
                        <a class="button button-ghost" href={repo.clone()} target="_blank" rel="noopener noreferrer">
                            {"GitHub"}
                        </a>
                    }
                </div>
            </div>
        </article>
    }
}
