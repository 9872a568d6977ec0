use crate::content::SkillCategory;

pub const EXPERIENCE_LABEL: &str = "5+";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillSelection {
    selected: usize,
}

impl SkillSelection {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Points the selector at `index`; indices past the end are ignored.
    pub fn select(self, index: usize, category_count: usize) -> Self {
        if index < category_count {
            Self { selected: index }
        } else {
            self
        }
    }

    pub fn category<'a>(&self, categories: &'a [SkillCategory]) -> Option<&'a SkillCategory> {
        categories.get(self.selected)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillStat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Stats row under the skills grid, recomputed from the category on every render.
pub fn category_stats(category: &SkillCategory) -> [SkillStat; 3] {
    let average = category
        .average_proficiency()
        .map(|value| format!("{value}%"))
        .unwrap_or_else(|| "–".to_string());

    [
        SkillStat {
            icon: "📊",
            label: "Skills",
            value: category.skills.len().to_string(),
        },
        SkillStat {
            icon: "📈",
            label: "Experience",
            value: EXPERIENCE_LABEL.to_string(),
        },
        SkillStat {
            icon: "⭐",
            label: "Avg Proficiency",
            value: average,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn selection_starts_on_first_category() {
        let catalog = Catalog::load().expect("embedded data is valid");
        let selection = SkillSelection::default();

        assert_eq!(selection.selected(), 0);
        assert_eq!(
            selection.category(&catalog.skills).map(|c| c.category.as_str()),
            Some("Frontend")
        );
    }

    #[test]
    fn select_sets_index_directly_and_ignores_out_of_range() {
        let selection = SkillSelection::default().select(3, 4);
        assert_eq!(selection.selected(), 3);

        let unchanged = selection.select(4, 4);
        assert_eq!(unchanged.selected(), 3);
    }

    #[test]
    fn stats_report_count_and_rounded_average() {
        let catalog = Catalog::load().expect("embedded data is valid");
        let stats = category_stats(&catalog.skills[0]);

        assert_eq!(stats[0].value, "6");
        assert_eq!(stats[1].value, "5+");
        assert_eq!(stats[2].value, "92%");
    }

    #[test]
    fn stats_follow_selected_category() {
        let catalog = Catalog::load().expect("embedded data is valid");
        let selection = SkillSelection::default().select(2, catalog.skills.len());
        let category = selection.category(&catalog.skills).expect("selected category exists");

        // Tools & DevOps: 94, 85, 86, 93, 80, 82 -> 86.67
        assert_eq!(category_stats(category)[2].value, "87%");
    }
}
