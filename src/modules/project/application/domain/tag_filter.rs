use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;

/// Tag vocabulary offered by the editor. Filtering itself is not restricted
/// to this list; stored records may carry older labels.
pub const ALL_TAGS: &[&str] = &[
    "Illustration",
    "2D",
    "Branding",
    "UI/UX",
    "Motion",
    "3D",
    "Strategy",
];

//
// ──────────────────────────────────────────────────────────
// Selection (toggle semantics)
// ──────────────────────────────────────────────────────────
//

/// The set of tags a visitor has switched on. Toggling a selected tag
/// deselects it; clearing returns to the full, unfiltered gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn toggle(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

/// Conjunctive tag filter: a record stays visible only if it carries every
/// selected tag. An empty selection is the identity filter. Input order is
/// preserved; this never re-sorts.
pub fn filter_by_tags(projects: Vec<ProjectRecord>, selected: &[String]) -> Vec<ProjectRecord> {
    if selected.is_empty() {
        return projects;
    }

    projects
        .into_iter()
        .filter(|project| {
            selected
                .iter()
                .all(|tag| project.tags.iter().any(|t| t == tag))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::project_test_fixtures::record_with_tags;

    fn sample_set() -> Vec<ProjectRecord> {
        vec![
            record_with_tags("Neon Tokyo", &["Illustration", "2D", "Branding"]),
            record_with_tags("Motion Interface", &["UI/UX", "Motion"]),
            record_with_tags("Brand System", &["Branding", "Strategy"]),
            record_with_tags("Character Pack", &["Illustration", "2D"]),
        ]
    }

    fn titles(projects: &[ProjectRecord]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn empty_selection_is_identity_and_keeps_order() {
        let projects = sample_set();
        let expected = titles(&projects);

        let filtered = filter_by_tags(projects.clone(), &[]);
        assert_eq!(titles(&filtered), expected);
    }

    #[test]
    fn single_tag_keeps_only_carriers() {
        let filtered = filter_by_tags(sample_set(), &["Illustration".to_string()]);
        assert_eq!(titles(&filtered), vec!["Neon Tokyo", "Character Pack"]);
    }

    #[test]
    fn multiple_tags_are_conjunctive_not_disjunctive() {
        let selected = vec!["Illustration".to_string(), "Branding".to_string()];
        let filtered = filter_by_tags(sample_set(), &selected);

        // Only Neon Tokyo carries both; Brand System carries Branding alone.
        assert_eq!(titles(&filtered), vec!["Neon Tokyo"]);
    }

    #[test]
    fn unmatched_tag_yields_empty_set() {
        let filtered = filter_by_tags(sample_set(), &["Photography".to_string()]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn toggle_twice_is_involution() {
        let mut selection = TagSelection::new(vec!["Motion".to_string()]);
        let original = selection.clone();

        selection.toggle("3D");
        assert_eq!(
            selection.as_slice(),
            &["Motion".to_string(), "3D".to_string()]
        );

        selection.toggle("3D");
        assert_eq!(selection, original);
    }

    #[test]
    fn toggle_on_selected_tag_deselects_it() {
        let mut selection = TagSelection::new(vec!["2D".to_string(), "Motion".to_string()]);
        selection.toggle("2D");
        assert_eq!(selection.as_slice(), &["Motion".to_string()]);
    }

    #[test]
    fn clear_resets_to_full_set() {
        let mut selection = TagSelection::new(vec!["2D".to_string(), "Motion".to_string()]);
        selection.clear();
        assert!(selection.is_empty());

        let projects = sample_set();
        let filtered = filter_by_tags(projects.clone(), selection.as_slice());
        assert_eq!(filtered.len(), projects.len());
    }
}
