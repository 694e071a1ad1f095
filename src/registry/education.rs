//! Education entries.
//!
//! Both entries alias `"education"`. That shadowing is part of the authored
//! data; resolution is first-declared-wins (see `entry::resolve_in`).

use serde::Serialize;

use super::entry::{Addressable, Links};

/// One education stint.
#[derive(Debug, Clone, Serialize)]
pub struct EducationItem {
    pub slug: &'static str,
    pub aliases: &'static [&'static str],
    pub school: &'static str,
    pub program: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,

    pub summary: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coursework: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Addressable for EducationItem {
    fn slug(&self) -> &str {
        self.slug
    }
    fn aliases(&self) -> &[&str] {
        self.aliases
    }
}

/// All education entries, in display (and tie-break) order.
pub fn education() -> &'static [EducationItem] {
    EDUCATION
}

static EDUCATION: &[EducationItem] = &[
    EducationItem {
        slug: "The-University-of-British-Columbia",
        aliases: &["education"],
        school: "The University of British Columbia(UBC)",
        program: "Bachelor of Commerce, Business and Computer Science Specialization",
        location: Some("Vancouver, Canada"),
        start: Some("2022"),
        end: Some("2028"),
        summary: "I am a Business and Computer Science student at the UBC Sauder School of Business with a strong interest in data systems, software engineering, and technology-driven problem solving. My academic background combines technical depth in algorithms, databases, and machine learning with business-focused thinking around systems, strategy, and organizational impact.",
        grade: Some(&["GPA: 3.7/4.0"]),
        coursework: Some(&[
            "Databases",
            "Software Engineering",
            "Machine Learning",
            "SQL",
            "Communication and Leadership",
            "Algorithms",
            "Data Structures",
            "Operating Systems",
            "Project Management",
            "Business Analytics",
            "Business Strategy",
            "Business Law",
            "Business Ethics",
        ]),
        links: None,
    },
    EducationItem {
        slug: "Peking-University",
        aliases: &["education"],
        school: "Peking University",
        program: "Exchange Student",
        location: Some("Beijing, China"),
        start: Some("2024"),
        end: Some("2024"),
        summary: "I was an exchange student at Peking University from 2024 to 2024. I took courses in Finance Applications, and I was able to learn about the Financial Estimation and Analysis.",
        grade: Some(&["Grade: A"]),
        coursework: Some(&["Finance Applications", "Financial Estimation and Analysis"]),
        links: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::entry::{canonicalize_in, get_in};

    #[test]
    fn shared_alias_resolves_to_first_declared() {
        // Both entries claim "education"; declaration order decides.
        assert_eq!(
            canonicalize_in(education(), "education"),
            "The-University-of-British-Columbia"
        );
    }

    #[test]
    fn shadowed_entry_still_reachable_by_slug() {
        let pku = get_in(education(), "Peking-University").unwrap();
        assert_eq!(pku.school, "Peking University");
        assert_eq!(pku.grade, Some(&["Grade: A"][..]));
    }

    #[test]
    fn unknown_school_is_not_found() {
        assert!(get_in(education(), "not-a-real-school").is_none());
    }
}
