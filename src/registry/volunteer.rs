//! Volunteer experience entries.

use serde::Serialize;

use super::entry::{Addressable, Links};

/// One volunteer role.
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerItem {
    pub slug: &'static str,
    pub aliases: &'static [&'static str],
    pub org: &'static str,
    pub role: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,

    pub summary: &'static str,
    pub contributions: &'static [&'static str],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Addressable for VolunteerItem {
    fn slug(&self) -> &str {
        self.slug
    }
    fn aliases(&self) -> &[&str] {
        self.aliases
    }
}

/// All volunteer entries, in display (and tie-break) order.
pub fn volunteer() -> &'static [VolunteerItem] {
    VOLUNTEER
}

static VOLUNTEER: &[VolunteerItem] = &[VolunteerItem {
    slug: "Vancouver-Conservation-Campaign",
    aliases: &["volunteer"],
    org: "Conservative Party of British Columbia",
    role: "General Volunteer",
    location: Some("Vancouver, Canada"),
    start: Some("2024"),
    end: Some("2024"),
    summary: "I was a general volunteer for the Conservative Party of British Columbia from 2024 to 2024. I was mainly responsible for the voter registration and voter outreach.",
    contributions: &[
        "Register voters and outreach to potential voters",
        "Go door to door to promote the Conservative Party",
        "Drive people to the polling station",
        "Attend events and meetings to promote the Conservative Party",
        "Provide support for the Conservative Party",
        "Attend meetings and provide updates on the progress of the Conservative Party",
    ],
    impact: Some(&[
        "Helped the Conservative Party of British Columbia to win the election in 2024 by 10%",
    ]),
    skills: Some(&[
        "Communication",
        "Teamwork",
        "Leadership",
        "Public Speaking",
        "Event Planning",
        "Social Media",
        "Marketing",
        "Sales",
    ]),
    links: None,
}];
