//! Product page builder: a single Product entity whose Offer accumulates
//! the commerce extras (seller, shipping, returns, condition).

use serde_json::{json, Value};

use crate::error::{require, SchemaError};
use crate::input::ProductPageInput;
use crate::parse::lines::clean_lines;
use crate::parse::records::parse_pairs;

use super::common;

pub fn build(input: &ProductPageInput) -> Result<Value, SchemaError> {
    require("product_name", &input.product_name)?;
    require("url", &input.url)?;

    let mut product = json!({
        "@context": common::SCHEMA_CONTEXT,
        "@type": "Product",
        "name": input.product_name,
        "description": input.product_description,
        "sku": input.sku,
        "gtin": input.gtin,
        "mpn": input.mpn,
        "brand": brand_entity(&input.brand),
        "image": clean_lines(&input.product_images),
        "offers": offer_entity(input),
    });

    if input.main_entity_enabled {
        let name = fallback(&input.page_name, &input.product_name);
        let description = fallback(&input.page_description, &input.product_description);
        product["mainEntityOfPage"] = json!({
            "@type": "WebPage",
            "name": name,
            "url": input.url,
            "description": description,
            "isPartOf": {
                "@type": "WebSite",
                "url": input.site_url,
                "name": input.site_name,
            },
        });
    }

    if input.rating_enabled {
        let best = match input.best_rating.trim() {
            "" => "5",
            b => b,
        };
        product["aggregateRating"] =
            common::aggregate_rating(&input.rating_value, &input.review_count, Some(best));
    }

    if input.breadcrumb_enabled {
        product["breadcrumb"] = common::breadcrumb_list(None, &parse_pairs(&input.breadcrumbs));
    }

    Ok(product)
}

fn offer_entity(input: &ProductPageInput) -> Value {
    let mut offer = json!({
        "@type": "Offer",
        "url": input.url,
        "priceCurrency": input.currency,
        "price": input.price,
        "availability": input.availability,
        "itemCondition": input.item_condition,
        "priceValidUntil": input.price_valid_until,
    });

    if input.seller_enabled {
        offer["seller"] = json!({
            "@type": "Organization",
            "name": input.seller_name,
            "url": input.seller_url,
        });
    }

    if input.shipping_enabled {
        offer["shippingDetails"] = json!({
            "@type": "OfferShippingDetails",
            "shippingDestination": {
                "@type": "DefinedRegion",
                "addressCountry": input.shipping_country,
            },
            "deliveryTime": {
                "@type": "ShippingDeliveryTime",
                "handlingTime": quantitative_days(&input.handling_min_days, &input.handling_max_days),
                "transitTime": quantitative_days(&input.transit_min_days, &input.transit_max_days),
            },
        });
    }

    if input.return_policy_enabled {
        offer["hasMerchantReturnPolicy"] = json!({
            "@type": "MerchantReturnPolicy",
            "returnPolicyCategory": input.return_policy_category,
            "merchantReturnDays": input.return_days,
            "returnMethod": input.return_method,
            "returnFees": input.return_fees,
        });
    }

    offer
}

fn quantitative_days(min: &str, max: &str) -> Value {
    json!({
        "@type": "QuantitativeValue",
        "minValue": min,
        "maxValue": max,
        "unitCode": "d",
    })
}

fn brand_entity(brand: &str) -> Value {
    if brand.trim().is_empty() {
        return Value::Null;
    }
    json!({"@type": "Brand", "name": brand})
}

fn fallback<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() { default } else { value }
}
