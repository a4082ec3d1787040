use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub photo: Option<String>,
    pub professional_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Canonical resume record produced by every importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub personal_details: PersonalDetails,
    pub contact_info: ContactInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl CvData {
    /// All strings empty, no photo, no list items.
    pub fn empty() -> Self {
        Self {
            personal_details: PersonalDetails::default(),
            contact_info: ContactInfo::default(),
            work_experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.work_experience.len() + self.education.len() + self.skills.len() + self.projects.len()
    }

    /// Copy with every list id blanked, for comparing two imports of the same input.
    pub fn without_ids(&self) -> Self {
        let mut copy = self.clone();
        copy.work_experience.iter_mut().for_each(|w| w.id.clear());
        copy.education.iter_mut().for_each(|e| e.id.clear());
        copy.skills.iter_mut().for_each(|s| s.id.clear());
        copy.projects.iter_mut().for_each(|p| p.id.clear());
        copy
    }

    pub fn all_ids(&self) -> Vec<&str> {
        self.work_experience
            .iter()
            .map(|w| w.id.as_str())
            .chain(self.education.iter().map(|e| e.id.as_str()))
            .chain(self.skills.iter().map(|s| s.id.as_str()))
            .chain(self.projects.iter().map(|p| p.id.as_str()))
            .collect()
    }
}

impl Default for CvData {
    fn default() -> Self {
        Self::empty()
    }
}

pub const DEFAULT_MAX_FILE_BYTES: usize = 5 * 1024 * 1024;
const MIN_FILE_BYTES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportSettings {
    pub fallback_first_name: String,
    pub fallback_last_name: String,
    pub apply_name_fallback: bool,
    pub max_file_bytes: usize,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            fallback_first_name: "Imported".to_string(),
            fallback_last_name: "Resume".to_string(),
            apply_name_fallback: true,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl ImportSettings {
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.fallback_first_name.trim().is_empty() {
            self.fallback_first_name = defaults.fallback_first_name;
        }
        if self.fallback_last_name.trim().is_empty() {
            self.fallback_last_name = defaults.fallback_last_name;
        }
        self.max_file_bytes = self.max_file_bytes.max(MIN_FILE_BYTES);
        self
    }
}
