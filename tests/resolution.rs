//! Resolution Integration Tests
//!
//! End-to-end identifier resolution and path mapping across all catalogs.

use folio::registry::{get_entry, list_entries, list_slugs, resolve_slug, Catalog};
use folio::site::{route, Page, RouteOutcome};

#[test]
fn test_shared_education_alias_is_deterministic() {
    // Both education entries carry the alias "education"; the first
    // declared entry must win on every run.
    for _ in 0..10 {
        assert_eq!(
            resolve_slug(Catalog::Education, "education"),
            "The-University-of-British-Columbia"
        );
    }
}

#[test]
fn test_unknown_identifier_is_not_found() {
    assert!(get_entry(Catalog::Education, "not-a-real-school").is_none());
    assert_eq!(
        resolve_slug(Catalog::Education, "not-a-real-school"),
        "not-a-real-school"
    );
}

#[test]
fn test_every_alias_resolves_within_its_catalog() {
    let cases = [
        (Catalog::Projects, "course-data-query-engine"),
        (Catalog::Projects, "restaurant-db-system"),
        (Catalog::Projects, "ml-workflow-framework"),
        (Catalog::Education, "education"),
        (Catalog::Work, "work"),
        (Catalog::Work, "experience"),
        (Catalog::Volunteer, "volunteer"),
    ];

    for (catalog, alias) in cases {
        let canonical = resolve_slug(catalog, alias);
        assert_ne!(canonical, alias, "alias {} should canonicalize", alias);

        let entry = get_entry(catalog, alias)
            .unwrap_or_else(|| panic!("alias {} should find an entry", alias));
        assert_eq!(entry.slug(), canonical);
    }
}

#[test]
fn test_resolution_is_idempotent_everywhere() {
    for catalog in Catalog::ALL {
        let mut inputs = vec!["education", "work", "volunteer", "experience", "missing"];
        inputs.extend(list_slugs(catalog));

        for input in inputs {
            let once = resolve_slug(catalog, input);
            assert_eq!(resolve_slug(catalog, &once), once);
        }
    }
}

#[test]
fn test_listing_matches_declared_counts_and_order() {
    assert_eq!(list_entries(Catalog::Projects).len(), 3);
    assert_eq!(list_entries(Catalog::Education).len(), 2);
    assert_eq!(list_entries(Catalog::Work).len(), 1);
    assert_eq!(list_entries(Catalog::Volunteer).len(), 1);

    let project_slugs = list_slugs(Catalog::Projects);
    assert_eq!(
        project_slugs,
        vec![
            "course-database-management-query-engine",
            "restaurant-supply-chain-review-system",
            "machine-learning-predictive-modeling",
        ]
    );
}

#[test]
fn test_route_redirects_non_canonical_identifiers() {
    assert_eq!(
        route("/education/education"),
        RouteOutcome::Redirect {
            location: "/education/The-University-of-British-Columbia".to_string(),
        }
    );

    assert_eq!(
        route("/work/experience"),
        RouteOutcome::Redirect {
            location: "/work/Investment-Analyst-Internship".to_string(),
        }
    );
}

#[test]
fn test_route_renders_canonical_paths() {
    assert_eq!(
        route("/volunteer/Vancouver-Conservation-Campaign"),
        RouteOutcome::Render(Page::Entry {
            catalog: Catalog::Volunteer,
            slug: "Vancouver-Conservation-Campaign".to_string(),
        })
    );
}

#[test]
fn test_route_not_found_for_unknown_content() {
    assert_eq!(route("/projects/nope"), RouteOutcome::NotFound);
    assert_eq!(route("/nonsense"), RouteOutcome::NotFound);
    assert_eq!(route("/education/a/b/c"), RouteOutcome::NotFound);
}

#[test]
fn test_redirect_then_followup_request_renders() {
    // A collaborator that follows the redirect must land on a render.
    let outcome = route("/projects/ml-workflow-framework");
    let RouteOutcome::Redirect { location } = outcome else {
        panic!("expected redirect, got {:?}", outcome);
    };

    assert_eq!(
        route(&location),
        RouteOutcome::Render(Page::Entry {
            catalog: Catalog::Projects,
            slug: "machine-learning-predictive-modeling".to_string(),
        })
    );
}
