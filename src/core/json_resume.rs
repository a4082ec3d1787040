//! Maps a JSON Resume document (jsonresume.org schema) onto [`CvData`].
//!
//! The mapping reads the parsed `serde_json::Value` field by field, so a
//! missing or wrongly typed field degrades to an empty value instead of
//! rejecting the whole document.

use serde_json::Value;
use tracing::debug;

use super::dates::normalize_year;
use super::errors::CoreError;
use super::ids::new_id;
use super::models::{ContactInfo, CvData, Education, PersonalDetails, Project, Skill, WorkExperience};
use super::text_resume::split_name;

const SHAPE_KEYS: [&str; 3] = ["basics", "work", "education"];
const ADDRESS_KEYS: [&str; 4] = ["address", "city", "region", "postalCode"];

/// Cheap shape check run before mapping.
pub fn looks_like_json_resume(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| SHAPE_KEYS.iter().any(|key| object.contains_key(*key)))
}

pub fn parse_json_resume(text: &str) -> Result<CvData, CoreError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| CoreError::InvalidJson(err.to_string()))?;
    if !looks_like_json_resume(&value) {
        return Err(CoreError::not_json_resume());
    }

    Ok(map_json_resume(&value))
}

pub fn map_json_resume(resume: &Value) -> CvData {
    let basics = resume.get("basics").unwrap_or(&Value::Null);
    let (first_name, last_name) = split_name(str_field(basics, "name").unwrap_or_default());

    let cv = CvData {
        personal_details: PersonalDetails {
            first_name,
            last_name,
            job_title: string_or_empty(basics, "label"),
            photo: non_empty_field(basics, "image")
                .or_else(|| non_empty_field(basics, "picture"))
                .map(str::to_string),
            professional_summary: string_or_empty(basics, "summary"),
        },
        contact_info: ContactInfo {
            email: string_or_empty(basics, "email"),
            phone: string_or_empty(basics, "phone"),
            address: build_address(basics.get("location").unwrap_or(&Value::Null)),
            linkedin: find_linkedin(basics).unwrap_or_default(),
            website: string_or_empty(basics, "url"),
        },
        work_experience: array_field(resume, "work").iter().map(map_work).collect(),
        education: array_field(resume, "education")
            .iter()
            .map(map_education)
            .collect(),
        skills: array_field(resume, "skills")
            .iter()
            .flat_map(map_skill)
            .collect(),
        projects: array_field(resume, "projects")
            .iter()
            .map(map_project)
            .collect(),
    };

    debug!(
        work = cv.work_experience.len(),
        education = cv.education.len(),
        skills = cv.skills.len(),
        projects = cv.projects.len(),
        "json resume mapped"
    );
    cv
}

fn map_work(work: &Value) -> WorkExperience {
    WorkExperience {
        id: new_id(),
        job_title: string_or_empty(work, "position"),
        company: non_empty_field(work, "name")
            .or_else(|| non_empty_field(work, "company"))
            .unwrap_or_default()
            .to_string(),
        start_date: normalize_year(str_field(work, "startDate")),
        end_date: normalize_year(str_field(work, "endDate")),
        description: describe(str_field(work, "summary"), work),
    }
}

fn map_education(education: &Value) -> Education {
    let degree = [
        non_empty_field(education, "studyType"),
        non_empty_field(education, "area"),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" in ");

    Education {
        id: new_id(),
        degree,
        school: string_or_empty(education, "institution"),
        start_date: normalize_year(str_field(education, "startDate")),
        end_date: normalize_year(str_field(education, "endDate")),
    }
}

/// One skill for the entry's name, then one per keyword.
fn map_skill(skill: &Value) -> Vec<Skill> {
    non_empty_field(skill, "name")
        .into_iter()
        .chain(string_items(skill, "keywords"))
        .map(|name| Skill {
            id: new_id(),
            name: name.to_string(),
        })
        .collect()
}

fn map_project(project: &Value) -> Project {
    Project {
        id: new_id(),
        name: string_or_empty(project, "name"),
        description: describe(str_field(project, "description"), project),
        url: string_or_empty(project, "url"),
    }
}

/// Lead text followed by each highlight as a "- " line.
fn describe(lead: Option<&str>, entry: &Value) -> String {
    lead.filter(|text| !text.is_empty())
        .map(str::to_string)
        .into_iter()
        .chain(
            string_items(entry, "highlights")
                .filter(|h| !h.is_empty())
                .map(|h| format!("- {h}")),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_address(location: &Value) -> String {
    ADDRESS_KEYS
        .iter()
        .filter_map(|key| non_empty_field(location, key))
        .collect::<Vec<_>>()
        .join(", ")
}

fn find_linkedin(basics: &Value) -> Option<String> {
    array_field(basics, "profiles")
        .iter()
        .find(|profile| {
            str_field(profile, "network").is_some_and(|n| n.eq_ignore_ascii_case("linkedin"))
        })
        .and_then(|profile| str_field(profile, "url"))
        .map(str::to_string)
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn non_empty_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    str_field(value, key).filter(|text| !text.is_empty())
}

fn string_or_empty(value: &Value, key: &str) -> String {
    str_field(value, key).unwrap_or_default().to_string()
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string_items<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a str> {
    array_field(value, key).iter().filter_map(Value::as_str)
}
