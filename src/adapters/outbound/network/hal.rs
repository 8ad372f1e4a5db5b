//! Wire types for SW360's HAL+JSON resources
//!
//! Only the fields the obligation report needs are decoded. Every field is
//! optional on the wire: missing and `null` values fall back to empty ones.
use crate::obligation_report::domain::{
    LinkedProjectRef, ObligationRecord, ObligationSet, ObligationStatus, Project, ProjectId,
    ProjectNode, ReleaseRef,
};
use crate::shared::Result;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResource {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    linked_projects: Option<LinkedProjectsField>,
    #[serde(default, rename = "_links")]
    links: Option<Links>,
    #[serde(default, rename = "_embedded")]
    embedded: Option<Embedded>,
}

/// `linkedProjects` is written either as a list of entries or as a map
/// from project id to relationship
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LinkedProjectsField {
    List(Vec<LinkedProjectEntry>),
    Map(Map<String, Value>),
}

#[derive(Debug, Deserialize)]
struct LinkedProjectEntry {
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    relation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    #[serde(default, rename = "self")]
    self_link: Option<Href>,
}

#[derive(Debug, Deserialize)]
struct Href {
    #[serde(default)]
    href: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Embedded {
    #[serde(default, rename = "sw360:projects", alias = "sw360:linkedProjects")]
    projects: Option<Vec<ProjectResource>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObligationDetail {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    obligation_type: Option<String>,
    #[serde(default)]
    obligation_level: Option<String>,
    #[serde(default)]
    license_ids: Option<Vec<String>>,
    #[serde(default)]
    releases: Option<Vec<ReleaseEntry>>,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReleaseEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// Decodes a `projects/{id}` body
pub fn parse_project(body: &str) -> Result<Project> {
    let resource: ProjectResource = serde_json::from_str(body)?;
    Ok(into_project(resource).0)
}

/// Decodes a `projects/{id}/linkedProjects` body into the nested tree below the project
///
/// An empty body means the project has no linked projects.
pub fn parse_linked_projects(body: &str) -> Result<Vec<ProjectNode>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let resource: ProjectResource = serde_json::from_str(body)?;
    let projects = resource
        .embedded
        .and_then(|embedded| embedded.projects)
        .unwrap_or_default();
    Ok(projects.into_iter().map(into_node).collect())
}

/// Decodes a `projects/{id}/licenseObligations` body
///
/// Entries that cannot be decoded are skipped with a warning; the rest of
/// the map is kept in server order.
pub fn parse_obligations(body: &str) -> Result<ObligationSet> {
    if body.trim().is_empty() {
        return Ok(ObligationSet::new());
    }

    let raw: Map<String, Value> = serde_json::from_str(body)?;
    let mut obligations = ObligationSet::new();

    for (title, value) in raw {
        match serde_json::from_value::<ObligationDetail>(value) {
            Ok(detail) => obligations.insert(into_record(title, detail)),
            Err(e) => log::warn!("Skipping undecodable obligation '{}': {}", title, e),
        }
    }

    Ok(obligations)
}

fn into_node(resource: ProjectResource) -> ProjectNode {
    let (project, children) = into_project(resource);
    let children = children.into_iter().map(into_node).collect();
    ProjectNode::with_implied_links(project, children)
}

fn into_project(resource: ProjectResource) -> (Project, Vec<ProjectResource>) {
    let self_href = resource
        .links
        .and_then(|links| links.self_link)
        .and_then(|link| link.href);
    let id = resolve_id(resource.id.as_deref(), self_href.as_deref());

    let linked_projects = match resource.linked_projects {
        Some(LinkedProjectsField::List(entries)) => entries
            .into_iter()
            .filter_map(|entry| {
                entry
                    .project
                    .map(|reference| LinkedProjectRef::new(reference, entry.relation))
            })
            .collect(),
        Some(LinkedProjectsField::Map(map)) => map
            .into_iter()
            .map(|(reference, value)| LinkedProjectRef::new(reference, relation_of(&value)))
            .collect(),
        None => Vec::new(),
    };

    let children = resource
        .embedded
        .and_then(|embedded| embedded.projects)
        .unwrap_or_default();

    let project = Project::new(
        id,
        resource.name.unwrap_or_default(),
        resource.version.filter(|v| !v.is_empty()),
        linked_projects,
    );
    (project, children)
}

fn resolve_id(id: Option<&str>, self_href: Option<&str>) -> Option<ProjectId> {
    if let Some(raw) = id {
        match ProjectId::new(raw.to_string()) {
            Ok(id) => return Some(id),
            Err(e) => log::warn!("Ignoring invalid project id '{}': {}", raw, e),
        }
    }
    self_href.and_then(ProjectId::from_reference)
}

fn relation_of(value: &Value) -> Option<String> {
    match value {
        Value::String(relation) => Some(relation.clone()),
        Value::Object(fields) => ["projectRelationship", "relation"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(String::from),
        _ => None,
    }
}

fn into_record(title: String, detail: ObligationDetail) -> ObligationRecord {
    ObligationRecord {
        title,
        status: detail
            .status
            .map(ObligationStatus::from)
            .unwrap_or_default(),
        obligation_type: detail.obligation_type.unwrap_or_default(),
        obligation_level: detail.obligation_level.unwrap_or_default(),
        license_ids: detail.license_ids.unwrap_or_default(),
        releases: detail
            .releases
            .unwrap_or_default()
            .into_iter()
            .map(|release| ReleaseRef {
                name: release.name.unwrap_or_default(),
                version: release.version.unwrap_or_default(),
            })
            .collect(),
        comment: detail.comment.unwrap_or_default(),
    }
}
