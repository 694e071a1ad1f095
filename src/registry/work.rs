//! Work history entries.

use serde::Serialize;

use super::entry::{Addressable, Links};

/// One work role.
#[derive(Debug, Clone, Serialize)]
pub struct WorkItem {
    pub slug: &'static str,
    pub aliases: &'static [&'static str],
    pub company: &'static str,
    pub title: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,

    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Addressable for WorkItem {
    fn slug(&self) -> &str {
        self.slug
    }
    fn aliases(&self) -> &[&str] {
        self.aliases
    }
}

/// All work entries, in display (and tie-break) order.
pub fn work() -> &'static [WorkItem] {
    WORK
}

static WORK: &[WorkItem] = &[WorkItem {
    slug: "Investment-Analyst-Internship",
    aliases: &["work", "experience"],
    company: "ShanDong ZhongCheng Investment Management ltd.",
    title: "Investment Analyst Intern",
    location: Some("Taian, China"),
    start: Some("2023 May"),
    end: Some("2023 August"),
    summary: "I was an investment analyst intern at ShanDong ZhongCheng Investment Management ltd. from 2023 May to 2023 August. I was able to learn about the Investment Analysis and Portfolio Management.",
    responsibilities: &[
        "Read financial statements (income statement, balance sheet, cash flow)",
        "Analyze financial data and prepare reports",
        "Research and analyze investment opportunities",
        "Prepare investment proposals and presentations",
        "Assist with portfolio management and risk analysis",
        "Provide support for investment team and management",
        "Attend meetings and provide updates on investment activities",
    ],
    impact: Some(&[
        "Conducted comprehensive status analyses of 5+ corporate investment projects, supporting strategic decision-making and project optimization. ",
        "Performed investment cost estimations and ROI analyses, improving forecast accuracy by approximately 15% through iterative scenario modeling. ",
        "Collaborated with cross-functional teams of 6-8 members, maintaining high performance standards and incorporating feedback to enhance deliverable quality. ",
    ]),
    tech: Some(&["Excel", "PowerPoint", "Word"]),
    links: None,
}];
