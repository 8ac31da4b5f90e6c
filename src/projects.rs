use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

pub const PROJECTS_FILE: &str = "projects.json";
pub const MAX_TAG_LEN: usize = 50;

pub static GLOBAL_PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| match load_projects() {
    Ok(projects) => {
        log::debug!("loaded {} projects", projects.len());
        projects
    }
    Err(e) => {
        log::error!("couldn't load project dataset: {e}");
        Vec::new()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub customer: String,
    pub title: String,
    pub description: Vec<String>,
    pub primary_tags: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Project {
    /// True if `tag` is one of the project's primary or secondary tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.all_tags().any(|t| t == tag)
    }

    /// Primary tags followed by secondary tags.
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.primary_tags
            .iter()
            .chain(self.tags.iter())
            .map(String::as_str)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Project dataset not found")]
    Missing,
    #[error("Couldn't parse project dataset: {0}")]
    Parse(String),
    #[error("Project #{0} has an empty customer")]
    EmptyCustomer(usize),
    #[error("Project #{0} has an empty title")]
    EmptyTitle(usize),
    #[error("Project '{0}' has an empty description paragraph")]
    EmptyParagraph(String),
    #[error("Project '{title}' has an invalid tag '{tag}'")]
    InvalidTag { title: String, tag: String },
    #[error("Project '{title}' lists tag '{tag}' more than once")]
    DuplicateTag { title: String, tag: String },
    #[error("Duplicate project '{title}' for customer '{customer}'")]
    DuplicateProject { customer: String, title: String },
}

/// The embedded dataset, shared for the lifetime of the process.
pub fn projects() -> &'static [Project] {
    &GLOBAL_PROJECTS
}

pub fn load_projects() -> Result<Vec<Project>, DatasetError> {
    let file = Assets::get(PROJECTS_FILE).ok_or(DatasetError::Missing)?;
    let projects = parse_projects(&file.data)?;
    validate_projects(&projects)?;
    Ok(projects)
}

pub fn parse_projects(data: &[u8]) -> Result<Vec<Project>, DatasetError> {
    serde_json::from_slice(data).map_err(|e| DatasetError::Parse(e.to_string()))
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.trim() == tag && tag.chars().count() < MAX_TAG_LEN
}

/// Checks the authoring invariants of a dataset: non-empty fields, clean tags
/// listed once per project, and unique `(customer, title)` pairs.
pub fn validate_projects(projects: &[Project]) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for (i, p) in projects.iter().enumerate() {
        if p.customer.trim().is_empty() {
            return Err(DatasetError::EmptyCustomer(i));
        }
        if p.title.trim().is_empty() {
            return Err(DatasetError::EmptyTitle(i));
        }
        if p.description.iter().any(|para| para.trim().is_empty()) {
            return Err(DatasetError::EmptyParagraph(p.title.clone()));
        }
        if let Some(tag) = p.all_tags().find(|t| !is_valid_tag(t)) {
            return Err(DatasetError::InvalidTag {
                title: p.title.clone(),
                tag: tag.to_string(),
            });
        }
        // A tag may appear once per project, across both tag lists
        let mut tags = HashSet::new();
        if let Some(tag) = p.all_tags().find(|&t| !tags.insert(t)) {
            return Err(DatasetError::DuplicateTag {
                title: p.title.clone(),
                tag: tag.to_string(),
            });
        }
        if !seen.insert((p.customer.as_str(), p.title.as_str())) {
            return Err(DatasetError::DuplicateProject {
                customer: p.customer.clone(),
                title: p.title.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(customer: &str, primary: &[&str], tags: &[&str]) -> Project {
        Project {
            customer: customer.to_string(),
            title: format!("{customer} / {}", primary.join(", ")),
            description: vec!["Some work.".to_string()],
            primary_tags: primary.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            comment: None,
        }
    }

    pub(crate) fn sample_projects() -> Vec<Project> {
        vec![
            project(
                "Company A",
                &["React", "TypeScript"],
                &["Node.js", "AWS", "PostgreSQL"],
            ),
            project("Company B", &["React", "Angular"], &["Node.js", "Docker", "Azure"]),
            project("Company A", &["TypeScript", "AI"], &["Python", "AWS", "GraphQL"]),
        ]
    }

    #[test]
    fn test_embedded_dataset_is_valid() {
        let projects = load_projects().expect("embedded dataset should load");
        assert!(!projects.is_empty());
        assert_eq!(projects.len(), GLOBAL_PROJECTS.len());
    }

    #[test]
    fn test_parse_optional_comment() {
        let data = br#"[
            {"customer": "A", "title": "One", "description": ["x"], "primary_tags": ["Rust"], "tags": []},
            {"customer": "A", "title": "Two", "description": ["y"], "primary_tags": ["Go"], "tags": ["gRPC"], "comment": "note"}
        ]"#;
        let projects = parse_projects(data).unwrap();
        assert_eq!(projects[0].comment, None);
        assert_eq!(projects[1].comment.as_deref(), Some("note"));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let data = br#"[{"customer": "A", "description": [], "primary_tags": [], "tags": []}]"#;
        assert!(matches!(parse_projects(data), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_has_tag_checks_both_tag_sets() {
        let p = project("Company A", &["React"], &["AWS"]);
        assert!(p.has_tag("React"));
        assert!(p.has_tag("AWS"));
        assert!(!p.has_tag("react"));
        assert_eq!(p.all_tags().collect::<Vec<_>>(), vec!["React", "AWS"]);
    }

    #[test]
    fn test_validation() {
        assert!(validate_projects(&sample_projects()).is_ok());
        assert!(validate_projects(&[]).is_ok());

        // Duplicate (customer, title)
        let mut projects = sample_projects();
        projects.push(projects[0].clone());
        assert!(matches!(
            validate_projects(&projects),
            Err(DatasetError::DuplicateProject { .. })
        ));

        // Untrimmed tag
        let bad = project("Company C", &[" React"], &[]);
        assert!(matches!(
            validate_projects(&[bad]),
            Err(DatasetError::InvalidTag { .. })
        ));

        // Overlong tag
        let long = "x".repeat(MAX_TAG_LEN);
        let bad = project("Company C", &["React"], &[long.as_str()]);
        assert!(matches!(
            validate_projects(&[bad]),
            Err(DatasetError::InvalidTag { .. })
        ));

        // Repeated tag within one list, then across both lists
        let bad = project("Company C", &["React"], &["AWS", "AWS"]);
        assert_eq!(
            validate_projects(&[bad]),
            Err(DatasetError::DuplicateTag {
                title: "Company C / React".to_string(),
                tag: "AWS".to_string(),
            })
        );
        let bad = project("Company C", &["React", "React"], &[]);
        assert!(matches!(
            validate_projects(&[bad]),
            Err(DatasetError::DuplicateTag { .. })
        ));
        let bad = project("Company C", &["React"], &["React", "AWS"]);
        assert_eq!(
            validate_projects(&[bad]),
            Err(DatasetError::DuplicateTag {
                title: "Company C / React".to_string(),
                tag: "React".to_string(),
            })
        );

        let mut bad = project("Company C", &["React"], &[]);
        bad.customer = "  ".to_string();
        assert_eq!(validate_projects(&[bad]), Err(DatasetError::EmptyCustomer(0)));

        let mut bad = project("Company C", &["React"], &[]);
        bad.description.push(String::new());
        assert!(matches!(
            validate_projects(&[bad]),
            Err(DatasetError::EmptyParagraph(_))
        ));
    }
}
