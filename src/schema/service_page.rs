//! Service page builder: a `@graph` document where WebPage, Service and the
//! optional breadcrumb/FAQ blocks cross-reference each other through
//! fragment identifiers derived from the page URL.

use serde_json::{json, Value};

use crate::error::{require, SchemaError};
use crate::input::ServicePageInput;
use crate::parse::records::parse_pairs;

use super::common;

pub fn build(input: &ServicePageInput) -> Result<Value, SchemaError> {
    require("url", &input.url)?;
    require("service_name", &input.service_name)?;

    let page_id = common::frag(&input.url, "webpage");
    let service_id = common::frag(&input.url, "service");

    let provider_type = match input.provider_type.trim() {
        "" => "LocalBusiness",
        t => t,
    };

    let mut graph = vec![
        json!({
            "@type": "WebPage",
            "@id": page_id,
            "url": input.url,
            "name": input.service_name,
            "description": input.service_description,
            "isPartOf": {
                "@type": "WebSite",
                "name": input.site_name,
                "url": input.site_url,
            },
            "about": {"@id": service_id},
        }),
        json!({
            "@type": "Service",
            "@id": service_id,
            "name": input.service_name,
            "description": input.service_description,
            "url": input.url,
            "provider": {
                "@type": provider_type,
                "name": input.provider_name,
                "url": input.provider_url,
            },
            "areaServed": area_served(&input.area_served),
        }),
    ];

    if input.breadcrumb_enabled {
        graph.push(common::breadcrumb_list(
            Some(common::frag(&input.url, "breadcrumb")),
            &parse_pairs(&input.breadcrumbs),
        ));
    }

    if input.faq_enabled {
        graph.push(common::faq_page(
            Some(common::frag(&input.url, "faq")),
            &parse_pairs(&input.faqs),
        ));
    }

    Ok(json!({
        "@context": common::SCHEMA_CONTEXT,
        "@graph": graph,
    }))
}

fn area_served(name: &str) -> Value {
    if name.trim().is_empty() {
        return Value::Null;
    }
    json!({"@type": "Place", "name": name})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ServicePageInput {
        ServicePageInput {
            service_name: "Gutter Cleaning".to_string(),
            url: "https://acme.example/gutters/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn requires_url_and_service_name() {
        let mut input = minimal();
        input.url = String::new();
        assert_eq!(build(&input), Err(SchemaError::MissingRequiredField("url")));

        let mut input = minimal();
        input.service_name = String::new();
        assert_eq!(
            build(&input),
            Err(SchemaError::MissingRequiredField("service_name"))
        );
    }

    #[test]
    fn webpage_references_service_by_id() {
        let doc = build(&minimal()).unwrap();
        let graph = doc["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 2);

        let page = &graph[0];
        let service = &graph[1];
        assert_eq!(page["@id"], "https://acme.example/gutters/#webpage");
        assert_eq!(service["@id"], "https://acme.example/gutters/#service");
        // The cross-reference must point at an entity in the same graph.
        assert_eq!(page["about"]["@id"], service["@id"]);
    }

    #[test]
    fn provider_defaults_to_local_business() {
        let doc = build(&minimal()).unwrap();
        assert_eq!(doc["@graph"][1]["provider"]["@type"], "LocalBusiness");
    }

    #[test]
    fn breadcrumb_and_faq_blocks() {
        let mut input = minimal();
        input.breadcrumb_enabled = true;
        input.breadcrumbs = "Home | https://acme.example\nGutters | https://acme.example/gutters"
            .to_string();
        input.faq_enabled = true;
        input.faqs = "How often? | Twice a year | at least".to_string();

        let doc = build(&input).unwrap();
        let graph = doc["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 4);

        let breadcrumb = &graph[2];
        assert_eq!(breadcrumb["@id"], "https://acme.example/gutters/#breadcrumb");
        assert_eq!(breadcrumb["itemListElement"][1]["position"], 2);

        let faq = &graph[3];
        assert_eq!(faq["@id"], "https://acme.example/gutters/#faq");
        // First-pipe split: the answer keeps its embedded pipe.
        assert_eq!(
            faq["mainEntity"][0]["acceptedAnswer"]["text"],
            "Twice a year | at least"
        );
    }

    #[test]
    fn area_served_as_place() {
        let mut input = minimal();
        input.area_served = "Springfield".to_string();
        let doc = build(&input).unwrap();
        assert_eq!(doc["@graph"][1]["areaServed"]["@type"], "Place");
        assert_eq!(doc["@graph"][1]["areaServed"]["name"], "Springfield");
    }
}
