//! Best-effort conversion of a plain-text resume into [`CvData`].
//!
//! Nothing here fails: text that matches no header or pattern simply leaves
//! the corresponding fields empty.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::experience::parse_experience;
use super::field_extractor::{apply_contact_overrides, extract_contact_info};
use super::ids::new_id;
use super::models::{CvData, Education, Project, Skill};
use super::section_classifier::{SectionBuckets, SectionTag};

static SKILL_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,•\-\*\n]|\s{2,}").unwrap());

pub const IMPORTED_PROJECT_NAME: &str = "Imported Project";
const MAX_SKILLS: usize = 20;
const MAX_SKILL_CHARS: usize = 30;
const JOB_TITLE_SCAN_END: usize = 5;
const FIRST_SECTION_LINE: usize = 2;

pub fn segment_text_resume(text: &str) -> CvData {
    debug!(bytes = text.len(), "segmenting text resume");

    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let mut cv = CvData::empty();

    if let Some(first) = lines.first() {
        let (first_name, last_name) = split_name(first);
        cv.personal_details.first_name = first_name;
        cv.personal_details.last_name = last_name;
    }
    cv.personal_details.job_title = guess_job_title(&lines).unwrap_or_default();

    let sections = SectionBuckets::collect(lines.iter().skip(FIRST_SECTION_LINE).copied());

    if let Some(summary) = sections
        .get(SectionTag::Summary)
        .or_else(|| sections.get(SectionTag::Profile))
    {
        cv.personal_details.professional_summary = summary.join("\n");
    }

    cv.contact_info = extract_contact_info(text);
    if let Some(contact) = sections.get(SectionTag::Contact) {
        apply_contact_overrides(&mut cv.contact_info, contact);
    }

    if let Some(experience) = sections.non_empty(SectionTag::Experience) {
        cv.work_experience = parse_experience(experience);
    }

    if let Some(education) = sections.get(SectionTag::Education) {
        cv.education.push(Education {
            id: new_id(),
            degree: education.join("\n"),
            school: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        });
    }

    if let Some(skills) = sections.non_empty(SectionTag::Skills) {
        cv.skills = split_skills(skills)
            .into_iter()
            .map(|name| Skill { id: new_id(), name })
            .collect();
    }

    if let Some(projects) = sections.get(SectionTag::Projects) {
        cv.projects.push(Project {
            id: new_id(),
            name: IMPORTED_PROJECT_NAME.to_string(),
            description: projects.join("\n"),
            url: String::new(),
        });
    }

    debug!(
        work = cv.work_experience.len(),
        education = cv.education.len(),
        skills = cv.skills.len(),
        projects = cv.projects.len(),
        "text resume segmented"
    );
    cv
}

/// First token is the first name, the rest joined by single spaces.
pub fn split_name(line: &str) -> (String, String) {
    let mut tokens = line.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let rest = tokens.collect::<Vec<_>>().join(" ");
    (first, rest)
}

fn guess_job_title(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(JOB_TITLE_SCAN_END)
        .skip(1)
        .find(|line| {
            !line.is_empty()
                && !line.contains('@')
                && !line.contains("phone")
                && !line.contains("linkedin")
        })
        .map(|line| line.to_string())
}

pub fn split_skills(lines: &[String]) -> Vec<String> {
    let joined = lines.join(" ");
    SKILL_SPLIT_RE
        .split(&joined)
        .map(str::trim)
        .filter(|token| {
            let len = token.chars().count();
            len > 1 && len < MAX_SKILL_CHARS
        })
        .take(MAX_SKILLS)
        .map(str::to_string)
        .collect()
}
