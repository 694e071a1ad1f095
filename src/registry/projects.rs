//! Project entries.

use serde::Serialize;

use super::entry::{Addressable, Links};

/// A portfolio project.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub slug: &'static str,
    pub aliases: &'static [&'static str],
    pub title: &'static str,
    pub tagline: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,

    /// Thumbnail asset path, served by the presentation layer.
    pub thumbnail: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'static [&'static str]>,

    pub stack: &'static [&'static str],
    pub overview: &'static str,
    pub problem: &'static str,
    pub solution: &'static [&'static str],
    pub impact: &'static [&'static str],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<&'static [&'static str]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<Visual>,
}

/// Decorative card treatment for a project.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Visual {
    pub icon: VisualIcon,
    pub kpis: &'static [Kpi],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualIcon {
    Database,
    Sparkles,
    Brain,
    Code,
}

/// A headline figure shown on the project card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
}

impl Addressable for Project {
    fn slug(&self) -> &str {
        self.slug
    }
    fn aliases(&self) -> &[&str] {
        self.aliases
    }
}

/// All projects, in display (and tie-break) order.
pub fn projects() -> &'static [Project] {
    PROJECTS
}

static PROJECTS: &[Project] = &[
    Project {
        slug: "course-database-management-query-engine",
        aliases: &[
            "Course Database Management Query Engine",
            "course-data-query-engine",
        ],
        title: "Course Database Management Query Engine",
        tagline: "Transforms messy academic datasets into structured, queryable data.",
        year: Some("2025"),
        role: Some("Full Stack / Backend"),
        thumbnail: "/file.svg",
        metrics: Some(&[
            "End-to-end pipeline",
            "Automated tests",
            "Security validation",
        ]),
        stack: &["TypeScript", "Node.js", "Next.js", "Testing", "REST API"],
        overview: "Built a modular backend pipeline that validates, transforms, and structures heterogeneous datasets into consistent queryable formats.",
        problem: "Academic datasets come in inconsistent formats and require strict validation and predictable outputs for downstream queries.",
        solution: &[
            "Designed schema + validation rules to reject malformed inputs early.",
            "Implemented transformation pipeline to normalize and structure datasets.",
            "Added automated tests and clear error handling for maintainability.",
        ],
        impact: &[
            "Delivered a reusable ingestion + validation pipeline for multiple datasets.",
            "Improved developer velocity via modular design and test coverage.",
            "Strengthened reliability with input validation and predictable outputs.",
        ],
        architecture: Some(&[
            "Parser → Validator → Transformer → Query layer",
            "Clear contracts between modules for testability",
        ]),
        links: Some(Links {
            github: Some("https://github.com/olddriver12356"),
            live: Some(""),
            website: None,
        }),
        visual: Some(Visual {
            icon: VisualIcon::Database,
            kpis: &[
                Kpi { label: "Pipeline", value: "Ingest → Query" },
                Kpi { label: "Testing", value: "Automated" },
                Kpi { label: "Focus", value: "Validation" },
            ],
        }),
    },
    Project {
        slug: "restaurant-supply-chain-review-system",
        aliases: &[
            "Restaurant Supply Chain & Review Management System",
            "restaurant-db-system",
        ],
        title: "Restaurant Supply Chain & Review System",
        tagline: "Relational database system for operational workflows and analytics queries.",
        year: Some("2025"),
        role: Some("Database / Backend"),
        thumbnail: "/globe.svg",
        metrics: Some(&["15+ entities", "1,000+ records", "~30% faster queries"]),
        stack: &["SQL", "Oracle DB", "Relational Modeling"],
        overview: "Designed and implemented a normalized schema with constraints, realistic seed data, and query optimization considerations.",
        problem: "Operational workflows need consistent data integrity, fast analytics queries, and clear relationships across entities.",
        solution: &[
            "Built normalized relational schema with constraints (PK/FK/CK).",
            "Loaded realistic datasets and validated entity relationships.",
            "Optimized access patterns via indexing and schema refinement.",
        ],
        impact: &[
            "Implemented a 15+ entity schema supporting real-world workflows.",
            "Loaded 1,000+ records for realistic query evaluation.",
            "Reduced query latency through structural improvements and indexing.",
        ],
        architecture: None,
        links: Some(Links {
            github: Some("https://github.com/olddriver12356"),
            live: Some(""),
            website: None,
        }),
        visual: Some(Visual {
            icon: VisualIcon::Sparkles,
            kpis: &[
                Kpi { label: "Schema", value: "15+ entities" },
                Kpi { label: "Data", value: "1,000+ rows" },
                Kpi { label: "Speed", value: "~30% faster" },
            ],
        }),
    },
    Project {
        slug: "machine-learning-predictive-modeling",
        aliases: &[
            "Machine Learning & Predictive Modeling",
            "ml-workflow-framework",
        ],
        title: "Machine Learning & Predictive Modeling",
        tagline: "Reusable ML pipelines with consistent evaluation and model selection.",
        year: Some("2026"),
        role: Some("ML / Data"),
        thumbnail: "/window.svg",
        metrics: Some(&["Reusable pipeline", "CV + tuning", "Consistent metrics"]),
        stack: &["Python", "Pandas", "Scikit-Learn"],
        overview: "Built modular ML workflows that standardize preprocessing, training, validation, and evaluation for structured datasets.",
        problem: "ML experiments become unreliable without consistent preprocessing and evaluation procedures across models and datasets.",
        solution: &[
            "Modularized preprocessing + feature engineering.",
            "Implemented cross-validation and structured tuning.",
            "Standardized evaluation reporting for fair comparison.",
        ],
        impact: &[
            "Improved repeatability of experiments with consistent pipelines.",
            "Enabled faster iteration by reusing components across datasets.",
            "Reduced selection bias via cross-validation and structured tuning.",
        ],
        architecture: None,
        links: Some(Links {
            github: Some("https://github.com/olddriver12356"),
            live: Some(""),
            website: None,
        }),
        visual: Some(Visual {
            icon: VisualIcon::Brain,
            kpis: &[
                Kpi { label: "CV", value: "Cross-validated" },
                Kpi { label: "Tuning", value: "Structured" },
                Kpi { label: "Output", value: "Comparable" },
            ],
        }),
    },
];
