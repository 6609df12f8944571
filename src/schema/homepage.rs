//! Universal homepage builder: one ruleset for any business type.
//!
//! The root entity's @type decides how much of the page is location-bound.
//! Recognized local-business types get address/geo/map/hours/areaServed;
//! everything else is treated as a plain organization and those blocks are
//! withheld even if the record carries values for them.

use serde_json::{json, Value};
use tracing::warn;

use crate::error::{require, SchemaError};
use crate::input::{HomepageInput, IdentifierInput, MainEntityOfPage, MapRef};
use crate::parse::lines::clean_lines;
use crate::parse::nested::parse_topics;
use crate::parse::records::{parse_hours, parse_pairs, parse_triples};

use super::common;

/// schema.org types whose homepage entity is location-bound. Anything not
/// listed here defaults to organizational.
const LOCAL_TYPES: &[&str] = &[
    "LocalBusiness",
    "ProfessionalService",
    "Store",
    "BeautySalon",
    "HairSalon",
    "NailSalon",
    "DaySpa",
    "HealthAndBeautyBusiness",
    "Dentist",
    "MedicalBusiness",
    "Restaurant",
    "Hotel",
    "RealEstateAgent",
];

pub fn build(input: &HomepageInput) -> Result<Vec<Value>, SchemaError> {
    require("site_url", &input.site_url)?;
    require("name", &input.name)?;

    let business_type = match input.business_type.trim() {
        "" => "Organization",
        t => t,
    };
    let local = LOCAL_TYPES.contains(&business_type);
    let business_id = common::frag(
        &input.site_url,
        if local { "localbusiness" } else { "organization" },
    );

    let makes_offer: Vec<Value> = parse_triples(&input.makes_offer)
        .iter()
        .map(|o| {
            json!({
                "@type": "Offer",
                "name": o.name,
                "description": o.description,
                "url": o.url,
            })
        })
        .collect();

    let catalog = input
        .catalog
        .as_ref()
        .map(|c| {
            let name = if c.name.trim().is_empty() { "Services" } else { c.name.trim() };
            common::offer_catalog(name, &parse_triples(&c.services), c.shape)
        })
        .unwrap_or(Value::Null);

    let founders: Vec<Value> = input
        .founders
        .iter()
        .map(|f| {
            json!({
                "@type": "Person",
                "name": f.name,
                "jobTitle": f.job_title,
                "worksFor": {"@id": business_id},
                "sameAs": f.same_as,
            })
        })
        .collect();

    // Location-bound blocks are withheld entirely for organizational types.
    let (address, geo, has_map, hours, area_served) = if local {
        (
            common::postal_address(&input.street, &input.city, &input.state, &input.zip, &input.country),
            common::geo_coordinates(&input.lat, &input.lng),
            map_entity(input.has_map.as_ref()),
            common::opening_hours(&parse_hours(&input.opening_hours)),
            area_served(&input.area_served_json),
        )
    } else {
        (Value::Null, Value::Null, Value::Null, Value::Null, Value::Null)
    };

    let business = json!({
        "@context": common::SCHEMA_CONTEXT,
        "@type": business_type,
        "@id": business_id,
        "name": input.name,
        "legalName": input.org_name,
        "description": input.description,
        "logo": input.logo,
        "image": input.image,
        "telephone": input.telephone,
        "email": input.email,
        "priceRange": input.price_range,
        "address": address,
        "geo": geo,
        "hasMap": has_map,
        "openingHoursSpecification": hours,
        "areaServed": area_served,
        "alternateName": clean_lines(&input.alternate_names),
        "knowsLanguage": input.knows_language,
        "additionalType": clean_lines(&input.additional_types),
        "knowsAbout": clean_lines(&input.knows_about),
        "sameAs": clean_lines(&input.same_as),
        "makesOffer": makes_offer,
        "hasOfferCatalog": catalog,
        "identifier": identifier_entity(input.identifier.as_ref()),
        "founder": founders,
        "mainEntityOfPage": main_entity(&input.main_entity_of_page, &input.site_url),
    });

    let mut documents = vec![business];

    if let Some(site) = &input.website {
        let name = if site.name.trim().is_empty() { input.name.trim() } else { site.name.trim() };
        documents.push(json!({
            "@context": common::SCHEMA_CONTEXT,
            "@type": "WebSite",
            "name": name,
            "url": input.site_url,
            "sameAs": clean_lines(&input.same_as),
            "potentialAction": search_action(&site.search_target),
        }));
    }

    if input.faq_enabled {
        let faqs = parse_pairs(&input.faqs);
        if !faqs.is_empty() {
            let mut faq = common::faq_page(None, &faqs);
            documents.push(json!({
                "@context": common::SCHEMA_CONTEXT,
                "@type": "FAQPage",
                "mainEntity": faq["mainEntity"].take(),
            }));
        }
    }

    Ok(documents)
}

fn map_entity(map: Option<&MapRef>) -> Value {
    match map {
        None => Value::Null,
        Some(MapRef::Url(url)) => json!({"@type": "Map", "url": url}),
        Some(MapRef::Map { id, url }) => json!({"@type": "Map", "@id": id, "url": url}),
    }
}

fn identifier_entity(identifier: Option<&IdentifierInput>) -> Value {
    match identifier {
        None => Value::Null,
        Some(IdentifierInput::PropertyValue { property_id, value }) => json!({
            "@type": "PropertyValue",
            "propertyID": property_id,
            "value": value,
        }),
        Some(IdentifierInput::ValueList(values)) => json!({
            "@type": "PropertyValue",
            "value": values,
        }),
    }
}

/// areaServed arrives as a schema-ready JSON paste. Invalid JSON degrades to
/// absence; generation never fails over it.
fn area_served(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("ignoring invalid areaServed JSON: {err}");
            Value::Null
        }
    }
}

fn main_entity(meop: &MainEntityOfPage, site_url: &str) -> Value {
    match meop {
        MainEntityOfPage::None => Value::Null,
        MainEntityOfPage::Url(url) => json!(url),
        MainEntityOfPage::Page(page) => {
            let url = if page.url.trim().is_empty() { site_url } else { page.url.trim() };
            let id = if page.id.trim().is_empty() { url } else { page.id.trim() };
            json!({
                "@type": "WebPage",
                "name": page.name,
                "url": url,
                "@id": id,
                "additionalType": clean_lines(&page.additional_types),
                "about": parse_topics(&page.about)
                    .iter()
                    .map(common::topic_entity)
                    .collect::<Vec<_>>(),
                "mentions": clean_lines(&page.mentions)
                    .iter()
                    .map(|u| json!({"@type": "Thing", "name": u, "sameAs": u}))
                    .collect::<Vec<_>>(),
            })
        }
    }
}

fn search_action(target: &str) -> Value {
    if target.trim().is_empty() {
        return Value::Null;
    }
    json!({
        "@type": "SearchAction",
        "target": target,
        "query-input": "required name=search_term_string",
    })
}
