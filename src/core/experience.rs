//! Splits the lines of an experience section into work entries.
//!
//! The section is folded line by line: a title-looking line closes the entry
//! being built and opens a new one, and the lines after it fill in dates,
//! company and description.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ids::new_id;
use super::models::WorkExperience;

static JOB_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[A-Z][A-Za-z0-9_\s]+(?:Manager|Developer|Engineer|Analyst|Specialist|Director|Lead|Senior|Junior)",
    )
    .unwrap()
});
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());

pub const FALLBACK_JOB_TITLE: &str = "Imported Experience";
pub const FALLBACK_COMPANY: &str = "Company";
const OPEN_END_DATE: &str = "Present";

pub fn is_job_title_line(line: &str) -> bool {
    JOB_TITLE_RE.is_match(line)
}

fn is_bullet_line(line: &str) -> bool {
    line.starts_with(['•', '-', '*'])
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEntry {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Accumulator for the experience fold.
#[derive(Debug, Clone, Default)]
pub struct ExperienceFold {
    entries: Vec<WorkExperience>,
    pending: PendingEntry,
    description: Vec<String>,
}

impl ExperienceFold {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, line: &str) -> Self {
        if line.is_empty() {
            return self;
        }

        if is_job_title_line(line) {
            self.flush();
            self.pending = PendingEntry {
                job_title: Some(line.to_string()),
                ..PendingEntry::default()
            };
        } else if self.pending.start_date.is_none() && YEAR_RE.is_match(line) {
            let mut years = YEAR_RE.find_iter(line).map(|m| m.as_str().to_string());
            self.pending.start_date = years.next();
            self.pending.end_date = Some(years.next().unwrap_or_else(|| OPEN_END_DATE.to_string()));
        } else if self.pending.company.is_none() && !is_bullet_line(line) {
            self.pending.company = Some(line.to_string());
        } else {
            self.description.push(line.to_string());
        }

        self
    }

    /// Emits the last titled entry. Untitled trailing state is dropped.
    pub fn finish(mut self) -> Vec<WorkExperience> {
        self.flush();
        self.entries
    }

    pub fn pending(&self) -> &PendingEntry {
        &self.pending
    }

    pub fn entries(&self) -> &[WorkExperience] {
        &self.entries
    }

    // The description buffer belongs to the next titled entry, so it is only
    // cleared once an entry is actually emitted.
    fn flush(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        let Some(job_title) = pending.job_title else {
            return;
        };

        self.entries.push(WorkExperience {
            id: new_id(),
            job_title,
            company: pending
                .company
                .unwrap_or_else(|| FALLBACK_COMPANY.to_string()),
            start_date: pending.start_date.unwrap_or_default(),
            end_date: pending.end_date.unwrap_or_default(),
            description: std::mem::take(&mut self.description).join("\n"),
        });
    }
}

/// Work entries for an experience section. A non-empty section with no
/// recognisable title still yields one placeholder entry holding all of it.
pub fn parse_experience(lines: &[String]) -> Vec<WorkExperience> {
    let entries = lines
        .iter()
        .fold(ExperienceFold::new(), |fold, line| fold.step(line))
        .finish();

    if entries.is_empty() && !lines.is_empty() {
        return vec![WorkExperience {
            id: new_id(),
            job_title: FALLBACK_JOB_TITLE.to_string(),
            company: FALLBACK_COMPANY.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            description: lines.join("\n"),
        }];
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn job_title_heuristic_boundaries() {
        assert!(is_job_title_line("Lead Engineer"));
        assert!(is_job_title_line("Senior Software Developer"));
        assert!(is_job_title_line("Product MANAGER at Initech"));
        assert!(is_job_title_line("Data analyst"));
        // The whole pattern is case-insensitive, first letter included.
        assert!(is_job_title_line("lead engineer"));

        // A keyword alone has no leading word characters before it.
        assert!(!is_job_title_line("Engineer"));
        assert!(!is_job_title_line("Acme Corp"));
        assert!(!is_job_title_line("- Led the engineering team"));
        assert!(!is_job_title_line("Chef, Head Cook"));
    }

    #[test]
    fn single_entry_with_company_dates_and_description() {
        let entries = parse_experience(&lines(&[
            "Lead Engineer",
            "Acme Corp",
            "2019 2022",
            "Did things",
        ]));

        assert_eq!(entries.len(), 1);
        let job = &entries[0];
        assert_eq!(job.job_title, "Lead Engineer");
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.start_date, "2019");
        assert_eq!(job.end_date, "2022");
        assert_eq!(job.description, "Did things");
    }

    #[test]
    fn single_year_means_present() {
        let entries = parse_experience(&lines(&["Senior Analyst", "Globex", "Since 2021"]));
        assert_eq!(entries[0].start_date, "2021");
        assert_eq!(entries[0].end_date, "Present");
    }

    #[test]
    fn new_title_flushes_previous_entry_in_order() {
        let entries = parse_experience(&lines(&[
            "Senior Developer",
            "Initech",
            "2018 - 2020",
            "- Shipped billing",
            "Junior Developer",
            "2016 - 2018",
            "- Fixed bugs",
            "- Wrote tests",
        ]));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].job_title, "Senior Developer");
        assert_eq!(entries[0].company, "Initech");
        assert_eq!(entries[0].description, "- Shipped billing");
        assert_eq!(entries[1].job_title, "Junior Developer");
        assert_eq!(entries[1].company, "Company");
        assert_eq!(entries[1].start_date, "2016");
        assert_eq!(entries[1].description, "- Fixed bugs\n- Wrote tests");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn second_date_line_is_not_reparsed() {
        let entries = parse_experience(&lines(&[
            "Lead Developer",
            "2015 2017",
            "Hooli",
            "Promoted in 2016",
        ]));
        assert_eq!(entries[0].start_date, "2015");
        assert_eq!(entries[0].end_date, "2017");
        assert_eq!(entries[0].company, "Hooli");
        assert_eq!(entries[0].description, "Promoted in 2016");
    }

    #[test]
    fn prose_only_section_falls_back_to_single_entry() {
        let section = lines(&["worked on many things", "- and more things"]);
        let entries = parse_experience(&section);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title, FALLBACK_JOB_TITLE);
        assert_eq!(entries[0].company, FALLBACK_COMPANY);
        assert_eq!(entries[0].start_date, "");
        assert_eq!(entries[0].end_date, "");
        assert_eq!(
            entries[0].description,
            "worked on many things\n- and more things"
        );
    }

    #[test]
    fn lowercase_title_opens_an_entry() {
        let entries = parse_experience(&lines(&["lead engineer", "Acme"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title, "lead engineer");
        assert_eq!(entries[0].company, "Acme");
    }

    #[test]
    fn empty_section_yields_nothing() {
        assert!(parse_experience(&[]).is_empty());
    }

    #[test]
    fn description_before_first_title_carries_into_it() {
        let entries = parse_experience(&lines(&[
            "Globex",
            "- kept the lights on",
            "Support Engineer",
            "Initech",
        ]));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Initech");
        assert_eq!(entries[0].description, "- kept the lights on");
    }

    #[test]
    fn fold_exposes_pending_state_before_finish() {
        let fold = ExperienceFold::new()
            .step("Staff Engineer")
            .step("Umbrella")
            .step("2010");

        assert!(fold.entries().is_empty());
        assert_eq!(fold.pending().job_title.as_deref(), Some("Staff Engineer"));
        assert_eq!(fold.pending().company.as_deref(), Some("Umbrella"));
        assert_eq!(fold.pending().end_date.as_deref(), Some("Present"));

        let fold = fold.step("Lead Manager");
        assert_eq!(fold.entries().len(), 1);
        assert_eq!(fold.finish().len(), 2);
    }
}
