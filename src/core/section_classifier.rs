use std::collections::HashMap;

/// Canonical resume section a header line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    /// Lines before the first recognised header.
    Preamble,
    Summary,
    Profile,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Header(SectionTag),
    Content(&'a str),
    Blank,
}

// Checked in order; the first keyword contained in the lowercased line wins.
const HEADER_VOCABULARY: [(&str, SectionTag); 19] = [
    ("summary", SectionTag::Summary),
    ("profile", SectionTag::Profile),
    ("objective", SectionTag::Summary),
    ("about", SectionTag::Summary),
    ("experience", SectionTag::Experience),
    ("work experience", SectionTag::Experience),
    ("employment", SectionTag::Experience),
    ("career", SectionTag::Experience),
    ("education", SectionTag::Education),
    ("academic", SectionTag::Education),
    ("qualifications", SectionTag::Education),
    ("skills", SectionTag::Skills),
    ("technical skills", SectionTag::Skills),
    ("competencies", SectionTag::Skills),
    ("abilities", SectionTag::Skills),
    ("projects", SectionTag::Projects),
    ("portfolio", SectionTag::Projects),
    ("contact", SectionTag::Contact),
    ("contact information", SectionTag::Contact),
];

pub fn classify_line(line: &str) -> LineClass<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineClass::Blank;
    }

    let lower = line.to_lowercase();
    HEADER_VOCABULARY
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, tag)| LineClass::Header(*tag))
        .unwrap_or(LineClass::Content(line))
}

/// Lines grouped by the header that preceded them.
#[derive(Debug, Clone)]
pub struct SectionBuckets {
    buckets: HashMap<SectionTag, Vec<String>>,
}

impl SectionBuckets {
    /// Buckets `lines` in order. A repeated header starts its bucket over.
    pub fn collect<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut buckets: HashMap<SectionTag, Vec<String>> = HashMap::new();
        let mut current = SectionTag::Preamble;
        buckets.insert(current, Vec::new());

        for line in lines {
            match classify_line(line) {
                LineClass::Header(tag) => {
                    current = tag;
                    buckets.insert(tag, Vec::new());
                }
                LineClass::Content(text) => {
                    buckets.entry(current).or_default().push(text.to_string());
                }
                LineClass::Blank => {}
            }
        }

        Self { buckets }
    }

    /// `None` when no header for `tag` was seen; an empty slice when one was
    /// seen with nothing under it.
    pub fn get(&self, tag: SectionTag) -> Option<&[String]> {
        self.buckets.get(&tag).map(Vec::as_slice)
    }

    pub fn non_empty(&self, tag: SectionTag) -> Option<&[String]> {
        self.get(tag).filter(|lines| !lines.is_empty())
    }
}
