//! Static page content: projects, work history and skill categories.
//!
//! The JSON sources under `data/` are embedded at build time and decoded once
//! when the page boots. Nothing here is mutated afterwards.

use serde::Deserialize;
use thiserror::Error;

const PROJECTS_JSON: &str = include_str!("../data/projects.json");
const EXPERIENCE_JSON: &str = include_str!("../data/experience.json");
const SKILLS_JSON: &str = include_str!("../data/skills.json");

pub const MAX_PROFICIENCY: u8 = 100;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to decode {source_name}: {error}")]
    Decode {
        source_name: &'static str,
        #[source]
        error: serde_json::Error,
    },

    #[error("skill `{skill}` in `{category}` has proficiency {level}, expected 0-100")]
    ProficiencyOutOfRange {
        category: String,
        skill: String,
        level: u8,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub location: String,
    pub duration: String,
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: String,
    pub skills: Vec<Skill>,
    pub description: String,
    pub color: String,
}

impl SkillCategory {
    /// Arithmetic mean of the skill levels, rounded half away from zero.
    pub fn average_proficiency(&self) -> Option<u8> {
        if self.skills.is_empty() {
            return None;
        }

        let total: u32 = self.skills.iter().map(|skill| u32::from(skill.level)).sum();
        let mean = f64::from(total) / self.skills.len() as f64;
        Some(mean.round() as u8)
    }

    /// The first two skill names joined for the mastery blurb, e.g. "React and JavaScript".
    pub fn highlight(&self) -> String {
        self.skills
            .iter()
            .take(2)
            .map(|skill| skill.name.as_str())
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
}

impl Catalog {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_sources(PROJECTS_JSON, EXPERIENCE_JSON, SKILLS_JSON)
    }

    pub fn from_sources(projects: &str, experience: &str, skills: &str) -> Result<Self, ContentError> {
        let catalog = Self {
            projects: decode("projects", projects)?,
            experience: decode("experience", experience)?,
            skills: decode("skills", skills)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for category in &self.skills {
            if let Some(skill) = category.skills.iter().find(|skill| skill.level > MAX_PROFICIENCY) {
                return Err(ContentError::ProficiencyOutOfRange {
                    category: category.category.clone(),
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    source_name: &'static str,
    raw: &str,
) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(raw).map_err(|error| ContentError::Decode { source_name, error })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(levels: &[u8]) -> SkillCategory {
        SkillCategory {
            category: "Frontend".to_string(),
            icon: "🎨".to_string(),
            skills: levels
                .iter()
                .enumerate()
                .map(|(index, level)| Skill {
                    name: format!("skill-{index}"),
                    level: *level,
                })
                .collect(),
            description: String::new(),
            color: String::new(),
        }
    }

    #[test]
    fn embedded_catalog_decodes_and_validates() {
        let catalog = Catalog::load().expect("embedded data is valid");

        assert!(!catalog.projects.is_empty());
        assert_eq!(catalog.experience.len(), 3);
        assert_eq!(catalog.skills.len(), 4);
        assert_eq!(catalog.skills[0].category, "Frontend");
    }

    #[test]
    fn average_proficiency_rounds_mean() {
        assert_eq!(category(&[95, 90, 88, 95, 92, 93]).average_proficiency(), Some(92));
        assert_eq!(category(&[90, 91]).average_proficiency(), Some(91));
        assert_eq!(category(&[]).average_proficiency(), None);
    }

    #[test]
    fn highlight_joins_first_two_names() {
        assert_eq!(category(&[1, 2, 3]).highlight(), "skill-0 and skill-1");
        assert_eq!(category(&[1]).highlight(), "skill-0");
    }

    #[test]
    fn optional_project_links_default_to_none() {
        let projects = r#"[{"title":"T","description":"D","techStack":["Rust"]}]"#;
        let catalog = Catalog::from_sources(projects, "[]", "[]").expect("valid sources");

        let project = &catalog.projects[0];
        assert_eq!(project.tech_stack, vec!["Rust".to_string()]);
        assert!(project.live_link.is_none());
        assert!(project.github_link.is_none());
        assert!(project.image.is_none());
    }

    #[test]
    fn out_of_range_proficiency_is_rejected() {
        let skills = r#"[{"category":"Backend","icon":"⚙️","description":"","color":"",
            "skills":[{"name":"Python","level":101}]}]"#;

        let result = Catalog::from_sources("[]", "[]", skills);
        assert!(matches!(
            result,
            Err(ContentError::ProficiencyOutOfRange { level: 101, .. })
        ));
    }

    #[test]
    fn malformed_source_names_the_failing_file() {
        let error = Catalog::from_sources("[", "[]", "[]").expect_err("truncated JSON");
        assert!(error.to_string().starts_with("failed to decode projects"));
    }
}
