//! Path mapping for the navigation shell.
//!
//! The site exposes one path template per catalog, `/<catalog>/<slug>`,
//! plus a handful of static sections. [`route`] turns a request path into
//! the outcome a page collaborator acts on: render, redirect to the
//! canonical path, or not-found (the HTTP-404 equivalent).

use crate::registry::{get_entry, resolve_slug, Catalog};

/// What a request path maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Path is canonical and backed by content; render it.
    Render(Page),

    /// The client used a non-canonical identifier for an existing entry.
    /// Redirect before rendering so each entry has a single address.
    Redirect { location: String },

    /// Nothing matches after canonicalization.
    NotFound,
}

/// A renderable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Resume,

    /// A catalog's index listing.
    Index(Catalog),

    /// One entry's detail page, addressed by canonical slug.
    Entry { catalog: Catalog, slug: String },
}

/// Resolve a request path.
///
/// Identifiers are matched verbatim against slugs and aliases; URL
/// percent-decoding is the transport collaborator's job. Trailing slashes
/// are tolerated.
pub fn route(path: &str) -> RouteOutcome {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => RouteOutcome::Render(Page::Home),
        ["resume"] => RouteOutcome::Render(Page::Resume),
        [section] => match section.parse::<Catalog>() {
            Ok(catalog) => RouteOutcome::Render(Page::Index(catalog)),
            Err(_) => RouteOutcome::NotFound,
        },
        [section, identifier] => match section.parse::<Catalog>() {
            Ok(catalog) => route_entry(catalog, identifier),
            Err(_) => RouteOutcome::NotFound,
        },
        _ => RouteOutcome::NotFound,
    }
}

fn route_entry(catalog: Catalog, identifier: &str) -> RouteOutcome {
    let canonical = resolve_slug(catalog, identifier);

    if canonical != identifier {
        // Entry exists under another identifier; point at the one address.
        return RouteOutcome::Redirect {
            location: format!("/{}/{}", catalog.segment(), canonical),
        };
    }

    match get_entry(catalog, identifier) {
        Some(entry) => RouteOutcome::Render(Page::Entry {
            catalog,
            slug: entry.slug().to_string(),
        }),
        None => RouteOutcome::NotFound,
    }
}
