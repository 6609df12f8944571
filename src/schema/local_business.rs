//! Local-business page builder: a single entity with toggle-gated optional
//! blocks. Toggles come straight from the form record and are trusted as-is.

use serde_json::{json, Value};

use crate::error::{require, SchemaError};
use crate::input::{CatalogShape, LocalBusinessInput};
use crate::parse::lines::clean_lines;
use crate::parse::records::{parse_hours, parse_triples};

use super::common;

pub fn build(input: &LocalBusinessInput) -> Result<Value, SchemaError> {
    require("name", &input.name)?;
    require("url", &input.url)?;

    let business_type = match input.business_type.trim() {
        "" => "LocalBusiness",
        t => t,
    };

    Ok(json!({
        "@context": common::SCHEMA_CONTEXT,
        "@type": business_type,
        "name": input.name,
        "legalName": input.legal_name,
        "description": input.description,
        "url": input.url,
        "telephone": input.telephone,
        "email": input.email,
        "image": input.image,
        "logo": input.logo,
        "priceRange": input.price_range,
        "address": common::postal_address(
            &input.street, &input.city, &input.state, &input.zip, &input.country,
        ),
        "geo": common::geo_coordinates(&input.lat, &input.lng),
        "aggregateRating": input.rating_enabled.then(|| {
            common::aggregate_rating(&input.rating_value, &input.review_count, None)
        }),
        "hasMap": input.map_enabled.then_some(&input.map_url),
        "sameAs": input.sameas_enabled.then(|| clean_lines(&input.same_as)),
        "additionalType": input
            .additional_type_enabled
            .then(|| clean_lines(&input.additional_types)),
        "alternateName": input
            .alternate_name_enabled
            .then(|| clean_lines(&input.alternate_names)),
        "knowsAbout": input.knows_about_enabled.then(|| clean_lines(&input.knows_about)),
        "areaServed": input.area_served_enabled.then(|| area_served(input)),
        "openingHoursSpecification": input
            .hours_enabled
            .then(|| common::opening_hours(&parse_hours(&input.opening_hours))),
        "identifier": input.identifier_enabled.then(|| {
            json!({
                "@type": "PropertyValue",
                "propertyID": input.identifier_property_id,
                "value": input.identifier_value,
            })
        }),
        "founder": input.founder_enabled.then(|| {
            json!({
                "@type": "Person",
                "name": input.founder_name,
                "jobTitle": input.founder_job_title,
                "sameAs": clean_lines(&input.founder_same_as),
            })
        }),
        "knowsLanguage": input.language_enabled.then_some(&input.knows_language),
        "hasOfferCatalog": input.catalog_enabled.then(|| {
            common::offer_catalog(
                &input.catalog_name,
                &parse_triples(&input.services),
                CatalogShape::OfferWrapped,
            )
        }),
    }))
}

fn area_served(input: &LocalBusinessInput) -> Value {
    json!({
        "@type": "AdministrativeArea",
        "name": input.area_name,
        "geo": {
            "@type": "GeoShape",
            "postalCode": clean_lines(&input.postal_codes),
        },
        "containsPlace": clean_lines(&input.served_cities)
            .iter()
            .map(|city| json!({"@type": "City", "name": city}))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::prune::prune;

    fn minimal() -> LocalBusinessInput {
        LocalBusinessInput {
            name: "Joe's Cafe".to_string(),
            url: "https://joescafe.com".to_string(),
            business_type: "LocalBusiness".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn requires_name_and_url() {
        let mut input = minimal();
        input.url = String::new();
        assert_eq!(build(&input), Err(SchemaError::MissingRequiredField("url")));

        let mut input = minimal();
        input.name = "  ".to_string();
        assert_eq!(build(&input), Err(SchemaError::MissingRequiredField("name")));
    }

    #[test]
    fn minimal_record_prunes_to_identity_fields() {
        let doc = prune(build(&minimal()).unwrap());
        let obj = doc.as_object().unwrap();
        assert_eq!(obj.len(), 4, "got: {doc}");
        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "LocalBusiness");
        assert_eq!(doc["name"], "Joe's Cafe");
        assert_eq!(doc["url"], "https://joescafe.com");
        assert!(doc.get("address").is_none());
        assert!(doc.get("aggregateRating").is_none());
    }

    #[test]
    fn toggled_blocks_appear() {
        let mut input = minimal();
        input.rating_enabled = true;
        input.rating_value = "4.9".to_string();
        input.review_count = "100".to_string();
        input.map_enabled = true;
        input.map_url = "https://maps.example/joes".to_string();
        input.hours_enabled = true;
        input.opening_hours = "Monday | 08:00 | 16:00\nbad line".to_string();

        let doc = build(&input).unwrap();
        assert_eq!(doc["aggregateRating"]["ratingValue"], "4.9");
        assert_eq!(doc["hasMap"], "https://maps.example/joes");
        let hours = doc["openingHoursSpecification"].as_array().unwrap();
        assert_eq!(hours.len(), 1);
        assert_eq!(hours[0]["opens"], "08:00");
    }

    #[test]
    fn untoggled_values_ignored() {
        let mut input = minimal();
        // Data present but the toggle left off: the block stays out.
        input.same_as = "https://facebook.example/joes".to_string();
        let doc = build(&input).unwrap();
        assert_eq!(doc["sameAs"], Value::Null);
    }

    #[test]
    fn area_served_shape() {
        let mut input = minimal();
        input.area_served_enabled = true;
        input.area_name = "Springfield, IL".to_string();
        input.postal_codes = "62701\n62702".to_string();
        input.served_cities = "Springfield\nChatham".to_string();

        let doc = build(&input).unwrap();
        let area = &doc["areaServed"];
        assert_eq!(area["@type"], "AdministrativeArea");
        assert_eq!(area["geo"]["postalCode"], json!(["62701", "62702"]));
        assert_eq!(area["containsPlace"][1]["name"], "Chatham");
    }

    #[test]
    fn catalog_is_offer_wrapped() {
        let mut input = minimal();
        input.catalog_enabled = true;
        input.catalog_name = "Menu".to_string();
        input.services = "Brunch | Weekend brunch | https://joescafe.com/brunch".to_string();

        let doc = build(&input).unwrap();
        let item = &doc["hasOfferCatalog"]["itemListElement"][0];
        assert_eq!(item["@type"], "Offer");
        assert_eq!(item["itemOffered"]["name"], "Brunch");
    }

    #[test]
    fn geo_only_with_both_coordinates() {
        let mut input = minimal();
        input.lat = "39.8".to_string();
        let doc = prune(build(&input).unwrap());
        assert!(doc.get("geo").is_none());
    }
}
