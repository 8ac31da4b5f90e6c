use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::projects::Project;

pub const TOP_TECHNOLOGIES: usize = 15;
pub const MIN_YEAR_SPAN: i32 = 10;

/// Tags recognised as frameworks or libraries.
pub const FRAMEWORKS: &[&str] = &[
    "React",
    "React Native",
    "Angular",
    "Vue.js",
    "Nuxt",
    "Next.js",
    "Svelte",
    "Astro",
    "Redux",
    "RxJS",
    "Tailwind CSS",
    "Express",
    "NestJS",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Laravel",
    "Ruby on Rails",
    ".NET",
    "LangChain",
    "pandas",
    "NumPy",
    "scikit-learn",
    "TensorFlow",
    "PyTorch",
    "Jest",
    "Vitest",
    "Cypress",
    "Playwright",
    "pytest",
    "JUnit",
];

pub fn is_framework(tag: &str) -> bool {
    FRAMEWORKS.contains(&tag)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagStat {
    pub name: String,
    pub count: usize,
    pub percentage: u32,
    pub category: TagCategory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    /// There are no project dates, so the start is estimated from the number
    /// of projects: `end - max(10, total / 2)`.
    pub fn estimate(total_projects: usize, current_year: i32) -> Self {
        let span = i32::try_from(total_projects / 2)
            .unwrap_or(i32::MAX)
            .max(MIN_YEAR_SPAN);
        Self {
            start: current_year.saturating_sub(span),
            end: current_year,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total_projects: usize,
    pub total_technologies: usize,
    pub total_frameworks: usize,
    pub top_technologies: Vec<TagStat>,
    pub primary_tag_stats: Vec<TagStat>,
    pub companies_worked_with: Vec<String>,
    pub year_range: YearRange,
}

impl ProjectStats {
    pub fn technology(&self, name: &str) -> Option<&TagStat> {
        self.top_technologies
            .iter()
            .chain(self.primary_tag_stats.iter())
            .find(|t| t.name == name)
    }
}

/// Insertion-ordered tag counter, so equal counts keep encounter order
/// through the stable sort below.
#[derive(Default)]
struct TagCounter<'a> {
    index: HashMap<&'a str, usize>,
    counts: Vec<(&'a str, usize)>,
}

impl<'a> TagCounter<'a> {
    fn add(&mut self, tag: &'a str) {
        match self.index.get(tag) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(tag, self.counts.len());
                self.counts.push((tag, 1));
            }
        }
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn ranked(
        &self,
        total: usize,
        category_of: impl Fn(&str) -> TagCategory,
    ) -> Vec<TagStat> {
        let mut stats = self
            .counts
            .iter()
            .map(|&(name, count)| TagStat {
                name: name.to_string(),
                count,
                percentage: percentage(count, total),
                category: category_of(name),
            })
            .collect::<Vec<_>>();
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // f64::round rounds half away from zero
    (count as f64 / total as f64 * 100.0).round() as u32
}

pub fn calculate_project_stats(projects: &[Project]) -> ProjectStats {
    calculate_project_stats_at(projects, Utc::now().year())
}

/// Same as [`calculate_project_stats`] with the current year supplied by the
/// caller.
///
/// Empty input gives zero counts and empty lists, but `year_range` is still
/// estimated from `current_year` rather than left at zero.
pub fn calculate_project_stats_at(projects: &[Project], current_year: i32) -> ProjectStats {
    let total = projects.len();
    let year_range = YearRange::estimate(total, current_year);
    if total == 0 {
        return ProjectStats {
            year_range,
            ..Default::default()
        };
    }

    let mut companies = BTreeSet::new();
    let mut primary = TagCounter::default();
    let mut all = TagCounter::default();
    for p in projects {
        companies.insert(p.customer.as_str());
        for tag in &p.primary_tags {
            primary.add(tag);
            all.add(tag);
        }
        for tag in &p.tags {
            all.add(tag);
        }
    }

    let primary_names = primary
        .counts
        .iter()
        .map(|&(name, _)| name)
        .collect::<HashSet<_>>();
    let category_of = |name: &str| {
        if primary_names.contains(name) {
            TagCategory::Primary
        } else {
            TagCategory::Secondary
        }
    };

    let mut top_technologies = all.ranked(total, category_of);
    top_technologies.truncate(TOP_TECHNOLOGIES);

    ProjectStats {
        total_projects: total,
        total_technologies: all.len(),
        total_frameworks: all
            .counts
            .iter()
            .filter(|(name, _)| is_framework(name))
            .count(),
        top_technologies,
        primary_tag_stats: primary.ranked(total, |_| TagCategory::Primary),
        companies_worked_with: companies.into_iter().map(str::to_string).collect(),
        year_range,
    }
}
