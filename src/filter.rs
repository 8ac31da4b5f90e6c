use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::projects::Project;

/// Returns the projects matching the active selection, in input order.
///
/// A project passes the tag condition if any selected tag appears in its
/// primary or secondary tags. It passes the customer condition if its
/// customer contains `selected_customer`, ignoring case. Empty selections
/// don't filter anything.
pub fn filter_projects<S: AsRef<str>>(
    projects: &[Project],
    selected_tags: &[S],
    selected_customer: &str,
) -> Vec<Project> {
    let customer = selected_customer.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            selected_tags.is_empty() || selected_tags.iter().any(|t| p.has_tag(t.as_ref()))
        })
        .filter(|p| customer.is_empty() || p.customer.to_lowercase().contains(&customer))
        .cloned()
        .collect()
}

/// Selection state behind the projects filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_tags: Vec<String>,
    pub selected_customer: String,
    pub search_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Selecting the current customer again clears the selection.
    pub fn select_customer(&mut self, customer: &str) {
        if self.selected_customer == customer {
            self.selected_customer.clear();
        } else {
            self.selected_customer = customer.to_string();
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.selected_tags.is_empty() || !self.selected_customer.is_empty()
    }

    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        filter_projects(projects, &self.selected_tags, &self.selected_customer)
    }
}

/// Distinct tags for the filter chips: every primary tag first, then the
/// remaining secondary tags, each group in encounter order.
pub fn available_tags(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let primary = projects.iter().flat_map(|p| p.primary_tags.iter());
    let secondary = projects.iter().flat_map(|p| p.tags.iter());
    primary
        .chain(secondary)
        .filter(|&t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

pub fn available_customers(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|p| p.customer.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
