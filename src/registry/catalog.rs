//! Catalog dispatch: one resolution surface over the four entry tables.

use serde::{Serialize, Serializer};

use super::education::{education, EducationItem};
use super::entry::{canonicalize_in, get_in};
use super::projects::{projects, Project};
use super::volunteer::{volunteer, VolunteerItem};
use super::work::{work, WorkItem};

/// The four fixed content catalogs. Closed set; membership never changes at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Catalog {
    Projects,
    Education,
    Work,
    Volunteer,
}

impl Catalog {
    /// All catalogs, in navigation order.
    pub const ALL: [Catalog; 4] = [
        Catalog::Projects,
        Catalog::Education,
        Catalog::Work,
        Catalog::Volunteer,
    ];

    /// URL path segment for this catalog (`/projects/...` etc).
    pub fn segment(&self) -> &'static str {
        match self {
            Catalog::Projects => "projects",
            Catalog::Education => "education",
            Catalog::Work => "work",
            Catalog::Volunteer => "volunteer",
        }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segment())
    }
}

impl std::str::FromStr for Catalog {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "projects" => Ok(Catalog::Projects),
            "education" => Ok(Catalog::Education),
            "work" => Ok(Catalog::Work),
            "volunteer" => Ok(Catalog::Volunteer),
            _ => anyhow::bail!("Unknown catalog: {}", s),
        }
    }
}

/// Canonicalize an identifier within a catalog.
///
/// Returns the owning entry's slug, searching slugs first and then aliases
/// in declaration order; an identifier that matches nothing comes back
/// unchanged, and the caller treats that as unresolved.
pub fn resolve_slug(catalog: Catalog, input: &str) -> String {
    let resolved = match catalog {
        Catalog::Projects => canonicalize_in(projects(), input),
        Catalog::Education => canonicalize_in(education(), input),
        Catalog::Work => canonicalize_in(work(), input),
        Catalog::Volunteer => canonicalize_in(volunteer(), input),
    };
    resolved.to_string()
}

/// Look up an entry by slug or alias. `None` means NotFound, a normal
/// outcome for any identifier outside the catalog.
pub fn get_entry(catalog: Catalog, input: &str) -> Option<EntryRef> {
    match catalog {
        Catalog::Projects => get_in(projects(), input).map(EntryRef::Project),
        Catalog::Education => get_in(education(), input).map(EntryRef::Education),
        Catalog::Work => get_in(work(), input).map(EntryRef::Work),
        Catalog::Volunteer => get_in(volunteer(), input).map(EntryRef::Volunteer),
    }
}

/// Canonical slugs of a catalog, in declaration order (never sorted; order
/// is significant for display and for alias tie-breaks).
pub fn list_slugs(catalog: Catalog) -> Vec<&'static str> {
    match catalog {
        Catalog::Projects => projects().iter().map(|e| e.slug).collect(),
        Catalog::Education => education().iter().map(|e| e.slug).collect(),
        Catalog::Work => work().iter().map(|e| e.slug).collect(),
        Catalog::Volunteer => volunteer().iter().map(|e| e.slug).collect(),
    }
}

/// A borrowed view of one entry from any catalog.
#[derive(Debug, Clone, Copy)]
pub enum EntryRef {
    Project(&'static Project),
    Education(&'static EducationItem),
    Work(&'static WorkItem),
    Volunteer(&'static VolunteerItem),
}

impl EntryRef {
    pub fn catalog(&self) -> Catalog {
        match self {
            EntryRef::Project(_) => Catalog::Projects,
            EntryRef::Education(_) => Catalog::Education,
            EntryRef::Work(_) => Catalog::Work,
            EntryRef::Volunteer(_) => Catalog::Volunteer,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            EntryRef::Project(p) => p.slug,
            EntryRef::Education(e) => e.slug,
            EntryRef::Work(w) => w.slug,
            EntryRef::Volunteer(v) => v.slug,
        }
    }

    /// Headline shown in listings: project title, school, role at company,
    /// or role at org.
    pub fn headline(&self) -> String {
        match self {
            EntryRef::Project(p) => p.title.to_string(),
            EntryRef::Education(e) => e.school.to_string(),
            EntryRef::Work(w) => format!("{} — {}", w.title, w.company),
            EntryRef::Volunteer(v) => format!("{} — {}", v.role, v.org),
        }
    }

    /// Canonical display path, `/<catalog>/<slug>`.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.catalog().segment(), self.slug())
    }
}

impl Serialize for EntryRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EntryRef::Project(p) => p.serialize(serializer),
            EntryRef::Education(e) => e.serialize(serializer),
            EntryRef::Work(w) => w.serialize(serializer),
            EntryRef::Volunteer(v) => v.serialize(serializer),
        }
    }
}

/// Entries of a catalog as uniform refs, declaration order preserved.
pub fn list_entries(catalog: Catalog) -> Vec<EntryRef> {
    match catalog {
        Catalog::Projects => projects().iter().map(EntryRef::Project).collect(),
        Catalog::Education => education().iter().map(EntryRef::Education).collect(),
        Catalog::Work => work().iter().map(EntryRef::Work).collect(),
        Catalog::Volunteer => volunteer().iter().map(EntryRef::Volunteer).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_from_str_accepts_segments() {
        for catalog in Catalog::ALL {
            assert_eq!(catalog.segment().parse::<Catalog>().unwrap(), catalog);
        }
        assert!("blog".parse::<Catalog>().is_err());
    }

    #[test]
    fn every_slug_is_its_own_fixed_point() {
        for catalog in Catalog::ALL {
            for slug in list_slugs(catalog) {
                assert_eq!(resolve_slug(catalog, slug), slug);
            }
        }
    }

    #[test]
    fn resolve_is_idempotent_for_arbitrary_inputs() {
        for catalog in Catalog::ALL {
            for input in ["education", "work", "volunteer", "nope", ""] {
                let once = resolve_slug(catalog, input);
                assert_eq!(resolve_slug(catalog, &once), once);
            }
        }
    }

    #[test]
    fn unresolved_input_is_identity_and_not_found() {
        let input = "not-a-real-school";
        assert_eq!(resolve_slug(Catalog::Education, input), input);
        assert!(get_entry(Catalog::Education, input).is_none());
    }

    #[test]
    fn listing_preserves_declaration_order() {
        let slugs = list_slugs(Catalog::Education);
        assert_eq!(
            slugs,
            vec!["The-University-of-British-Columbia", "Peking-University"]
        );
    }

    #[test]
    fn entry_ref_path_uses_canonical_slug() {
        let entry = get_entry(Catalog::Work, "experience").unwrap();
        assert_eq!(entry.path(), "/work/Investment-Analyst-Internship");
    }
}
