//! Category filter over the project catalog.

use crate::content::{Category, Icon, Project};

/// A filter choice. `All` is the pseudo-category that lets everything through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter buttons, in display order.
    pub fn choices() -> impl Iterator<Item = Filter> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub fn from_id(id: &str) -> Option<Self> {
        if id == "all" {
            return Some(Self::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .map(Self::Only)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(c) => c.label(),
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::All => Icon::Server,
            Self::Only(c) => c.icon(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => project.category == c,
        }
    }
}

/// Gallery state: the active filter, `all` until the visitor picks another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    current: Filter,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Filter {
        self.current
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.current = filter;
    }

    pub fn is_active(&self, filter: Filter) -> bool {
        self.current == filter
    }

    /// The projects to display, in catalog order.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> impl Iterator<Item = &'a Project> {
        let filter = self.current;
        projects.iter().filter(move |p| filter.matches(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn starts_unfiltered() {
        let gallery = ProjectFilter::new();
        assert_eq!(gallery.current(), Filter::All);
        assert_eq!(gallery.visible(PROJECTS).count(), PROJECTS.len());
    }

    #[test]
    fn ids_round_trip_through_from_id() {
        for filter in Filter::choices() {
            assert_eq!(Filter::from_id(filter.id()), Some(filter));
        }
        assert_eq!(Filter::from_id("kubernetes"), None);
        assert_eq!(Filter::from_id("All"), None);
    }

    #[test]
    fn choices_start_with_all() {
        let labels = Filter::choices().map(Filter::label).collect::<Vec<_>>();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "All Projects");
        assert_eq!(labels[2], "CI/CD");
    }

    #[test]
    fn set_filter_replaces_selection() {
        let mut gallery = ProjectFilter::new();
        gallery.set_filter(Filter::Only(Category::Security));
        let titles = gallery.visible(PROJECTS).map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(titles, ["Container Security Scanner"]);

        gallery.set_filter(Filter::All);
        assert!(gallery.is_active(Filter::All));
        assert_eq!(gallery.visible(PROJECTS).count(), PROJECTS.len());
    }

    #[test]
    fn filter_over_custom_list_keeps_order() {
        let mut projects = PROJECTS.to_vec();
        projects[2].category = Category::Cloud;
        let mut gallery = ProjectFilter::new();
        gallery.set_filter(Filter::Only(Category::Cloud));
        let ids = gallery.visible(&projects).map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, [1, 3]);
    }
}
