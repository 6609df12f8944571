//! Shared schema.org block builders used by several page types.

use serde_json::{json, Value};

use crate::input::CatalogShape;
use crate::parse::nested::Topic;
use crate::parse::records::{HoursRow, Triple};

use super::prune::prune;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Fragment identifier for a sub-entity of a page, e.g.
/// `frag("https://a.com/x/", "webpage")` → `https://a.com/x/#webpage`.
pub fn frag(url: &str, suffix: &str) -> String {
    format!("{}/#{}", url.trim().trim_end_matches('/'), suffix)
}

/// Drop a nested block that pruning would reduce to a bare `@type` tag.
/// Used for blocks that are assembled unconditionally from optional fields
/// (a stub `PostalAddress` with no address lines says nothing).
pub fn non_stub(value: Value) -> Value {
    let pruned = prune(value);
    match &pruned {
        Value::Object(m) if m.len() == 1 && m.contains_key("@type") => Value::Null,
        _ => pruned,
    }
}

pub fn postal_address(street: &str, city: &str, state: &str, zip: &str, country: &str) -> Value {
    non_stub(json!({
        "@type": "PostalAddress",
        "streetAddress": street,
        "addressLocality": city,
        "addressRegion": state,
        "postalCode": zip,
        "addressCountry": country,
    }))
}

/// GeoCoordinates, only when both coordinates are present.
pub fn geo_coordinates(lat: &str, lng: &str) -> Value {
    if lat.trim().is_empty() || lng.trim().is_empty() {
        return Value::Null;
    }
    json!({
        "@type": "GeoCoordinates",
        "latitude": lat,
        "longitude": lng,
    })
}

pub fn aggregate_rating(rating_value: &str, review_count: &str, best_rating: Option<&str>) -> Value {
    json!({
        "@type": "AggregateRating",
        "ratingValue": rating_value,
        "reviewCount": review_count,
        "bestRating": best_rating,
    })
}

pub fn opening_hours(rows: &[HoursRow]) -> Value {
    rows.iter()
        .map(|h| {
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": h.day,
                "opens": h.opens,
                "closes": h.closes,
            })
        })
        .collect()
}

/// BreadcrumbList from (name, url) pairs, 1-based positions.
pub fn breadcrumb_list(id: Option<String>, crumbs: &[(String, String)]) -> Value {
    json!({
        "@type": "BreadcrumbList",
        "@id": id,
        "itemListElement": crumbs
            .iter()
            .enumerate()
            .map(|(i, (name, url))| {
                json!({
                    "@type": "ListItem",
                    "position": i + 1,
                    "name": name,
                    "item": url,
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// FAQPage from (question, answer) pairs.
pub fn faq_page(id: Option<String>, faqs: &[(String, String)]) -> Value {
    json!({
        "@type": "FAQPage",
        "@id": id,
        "mainEntity": faqs
            .iter()
            .map(|(question, answer)| {
                json!({
                    "@type": "Question",
                    "name": question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": answer,
                    },
                })
            })
            .collect::<Vec<_>>(),
    })
}

fn service_entity(service: &Triple) -> Value {
    json!({
        "@type": "Service",
        "name": service.name,
        "description": service.description,
        "url": service.url,
    })
}

/// OfferCatalog in one of the two supported shapes.
pub fn offer_catalog(name: &str, services: &[Triple], shape: CatalogShape) -> Value {
    let items: Vec<Value> = match shape {
        CatalogShape::ServiceList => services.iter().map(service_entity).collect(),
        CatalogShape::OfferWrapped => services
            .iter()
            .map(|s| {
                json!({
                    "@type": "Offer",
                    "itemOffered": service_entity(s),
                })
            })
            .collect(),
    };
    json!({
        "@type": "OfferCatalog",
        "name": name,
        "itemListElement": items,
    })
}

/// A parsed topic as a Thing entity; children nest under `hasPart`.
pub fn topic_entity(topic: &Topic) -> Value {
    let mut entity = json!({
        "@type": "Thing",
        "name": topic.name,
        "sameAs": topic.same_as,
    });
    if !topic.has_part.is_empty() {
        entity["hasPart"] = topic.has_part.iter().map(topic_entity).collect();
    }
    entity
}
