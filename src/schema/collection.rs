//! Collection / category page builder: CollectionPage plus an ItemList of
//! products, cross-referenced by fragment id.

use serde_json::{json, Value};

use crate::error::{require, SchemaError};
use crate::input::CollectionPageInput;
use crate::parse::records::{parse_pairs, parse_products, ProductRow};

use super::common;

const IN_STOCK: &str = "https://schema.org/InStock";

pub fn build(input: &CollectionPageInput) -> Result<Value, SchemaError> {
    require("url", &input.url)?;
    require("name", &input.name)?;

    let page_id = common::frag(&input.url, "collectionpage");
    let itemlist_id = common::frag(&input.url, "itemlist");

    let items: Vec<Value> = parse_products(&input.products)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "url": row.url,
                "item": product_entity(row, &input.default_currency),
            })
        })
        .collect();

    let mut graph = vec![
        json!({
            "@type": "CollectionPage",
            "@id": page_id,
            "url": input.url,
            "name": input.name,
            "description": input.description,
            "mainEntity": {"@id": itemlist_id},
        }),
        json!({
            "@type": "ItemList",
            "@id": itemlist_id,
            "itemListElement": items,
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

fn product_entity<'a>(row: &'a ProductRow, default_currency: &'a str) -> Value {
    let mut product = json!({
        "@type": "Product",
        "name": row.name,
        "url": row.url,
        "image": row.image,
    });

    // Only priced rows carry an Offer.
    if let Some(price) = row.price.as_deref().filter(|p| !p.is_empty()) {
        let currency = row
            .currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| {
                let fallback = default_currency.trim();
                if fallback.is_empty() { "USD" } else { fallback }
            });
        let availability = row
            .availability
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(IN_STOCK);
        product["offers"] = json!({
            "@type": "Offer",
            "url": row.url,
            "price": price,
            "priceCurrency": currency,
            "availability": availability,
        });
    }

    product
}
