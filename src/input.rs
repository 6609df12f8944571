//! Typed input records, one per page type.
//!
//! These are the boundary with the form collaborator: flat, form-shaped
//! records where multi-line textarea content arrives as raw strings and
//! optional blocks are gated by explicit toggles. Fields the original form
//! accepted as "dict or string" are modeled as tagged variants instead
//! ([`MapRef`], [`IdentifierInput`], [`MainEntityOfPage`], [`CatalogShape`]).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// One generation request, tagged by page type so a single JSON file fully
/// describes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "page_type", rename_all = "snake_case")]
pub enum PageInput {
    Homepage(HomepageInput),
    LocalBusiness(LocalBusinessInput),
    ServicePage(ServicePageInput),
    CollectionPage(CollectionPageInput),
    ProductPage(ProductPageInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Homepage,
    LocalBusiness,
    ServicePage,
    CollectionPage,
    ProductPage,
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "homepage" | "home" => Ok(Self::Homepage),
            "localbusiness" => Ok(Self::LocalBusiness),
            "servicepage" | "service" => Ok(Self::ServicePage),
            "collectionpage" | "collection" | "categorypage" | "category" => {
                Ok(Self::CollectionPage)
            }
            "productpage" | "product" => Ok(Self::ProductPage),
            _ => Err(format!(
                "unknown page type '{}' (expected homepage, local-business, \
                 service-page, collection-page or product-page)",
                s
            )),
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Homepage => "Homepage",
            Self::LocalBusiness => "Local Business",
            Self::ServicePage => "Service Page",
            Self::CollectionPage => "Collection / Category Page",
            Self::ProductPage => "Product Page",
        };
        f.write_str(name)
    }
}

/// `hasMap`: either a bare map URL or a full Map entity.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MapRef {
    Url(String),
    Map {
        #[serde(default)]
        id: String,
        #[serde(default)]
        url: String,
    },
}

/// `identifier`: a single propertyID/value pair, or a plain list of values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierInput {
    PropertyValue {
        #[serde(default)]
        property_id: String,
        #[serde(default)]
        value: String,
    },
    ValueList(Vec<String>),
}

/// `mainEntityOfPage`: absent, a plain URL string, or a full WebPage block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainEntityOfPage {
    #[default]
    None,
    Url(String),
    Page(MainEntityPage),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MainEntityPage {
    pub name: String,
    pub url: String,
    pub id: String,
    /// One URL per line.
    pub additional_types: String,
    /// Nested topic block, `Parent | urls` with `- Child | urls` lines.
    pub about: String,
    /// One URL per line; each becomes a Thing mention.
    pub mentions: String,
}

/// The two offer-catalog target shapes. Closed set; builders match
/// exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogShape {
    /// `itemListElement` is a list of Service entities.
    #[default]
    ServiceList,
    /// `itemListElement` is a list of Offer entities, each wrapping a
    /// Service under `itemOffered`.
    OfferWrapped,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogInput {
    pub name: String,
    pub shape: CatalogShape,
    /// `name | description | url` lines.
    pub services: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebsiteInput {
    pub name: String,
    /// Search URL template containing `{search_term_string}`; empty means no
    /// SearchAction.
    pub search_target: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FounderInput {
    pub name: String,
    pub job_title: String,
    pub same_as: Vec<String>,
}

// ── Homepage ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HomepageInput {
    pub site_url: String,
    pub name: String,
    /// schema.org @type for the root entity; blank falls back to
    /// Organization. Recognized local-business types unlock the
    /// location-bound blocks.
    pub business_type: String,
    pub org_name: String,
    pub description: String,
    pub logo: String,
    pub image: String,
    pub telephone: String,
    pub email: String,
    pub price_range: String,

    /// One URL per line.
    pub same_as: String,
    /// One name per line.
    pub alternate_names: String,
    pub knows_language: String,
    /// One URL per line.
    pub additional_types: String,
    /// One URL per line.
    pub knows_about: String,

    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub lat: String,
    pub lng: String,
    pub has_map: Option<MapRef>,
    /// `dayOfWeek | opens | closes` lines.
    pub opening_hours: String,
    /// Raw schema-ready JSON paste; invalid JSON degrades to absence.
    pub area_served_json: String,

    pub identifier: Option<IdentifierInput>,
    /// `name | description | url` lines.
    pub makes_offer: String,
    pub catalog: Option<CatalogInput>,
    pub founders: Vec<FounderInput>,
    pub website: Option<WebsiteInput>,
    pub main_entity_of_page: MainEntityOfPage,

    pub faq_enabled: bool,
    /// `Question | Answer` lines.
    pub faqs: String,
}

// ── Local business ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocalBusinessInput {
    pub business_type: String,
    pub name: String,
    pub legal_name: String,
    pub description: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub image: String,
    pub logo: String,
    pub price_range: String,

    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub lat: String,
    pub lng: String,

    pub rating_enabled: bool,
    pub rating_value: String,
    pub review_count: String,

    pub map_enabled: bool,
    pub map_url: String,

    pub sameas_enabled: bool,
    pub same_as: String,

    pub additional_type_enabled: bool,
    pub additional_types: String,

    pub alternate_name_enabled: bool,
    pub alternate_names: String,

    pub knows_about_enabled: bool,
    pub knows_about: String,

    pub area_served_enabled: bool,
    pub area_name: String,
    pub postal_codes: String,
    pub served_cities: String,

    pub hours_enabled: bool,
    pub opening_hours: String,

    pub identifier_enabled: bool,
    pub identifier_property_id: String,
    pub identifier_value: String,

    pub founder_enabled: bool,
    pub founder_name: String,
    pub founder_job_title: String,
    pub founder_same_as: String,

    pub language_enabled: bool,
    pub knows_language: String,

    pub catalog_enabled: bool,
    pub catalog_name: String,
    pub services: String,
}

// ── Service page ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicePageInput {
    pub service_name: String,
    pub service_description: String,
    pub url: String,
    pub provider_type: String,
    pub provider_name: String,
    pub provider_url: String,
    pub site_name: String,
    pub site_url: String,
    pub area_served: String,

    pub breadcrumb_enabled: bool,
    /// `Name | URL` lines.
    pub breadcrumbs: String,

    pub faq_enabled: bool,
    pub faqs: String,
}

// ── Collection / category page ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionPageInput {
    pub name: String,
    pub url: String,
    pub description: String,
    pub default_currency: String,
    /// `Name | URL | Image | Price | Currency | Availability` lines; the
    /// last three are optional.
    pub products: String,

    pub breadcrumb_enabled: bool,
    pub breadcrumbs: String,

    pub faq_enabled: bool,
    pub faqs: String,
}

// ── Product page ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductPageInput {
    pub product_name: String,
    pub product_description: String,
    /// One image URL per line.
    pub product_images: String,
    pub sku: String,
    pub brand: String,
    pub url: String,
    pub currency: String,
    pub price: String,
    pub availability: String,

    pub breadcrumb_enabled: bool,
    pub breadcrumbs: String,

    pub main_entity_enabled: bool,
    pub page_name: String,
    pub page_description: String,
    pub site_url: String,
    pub site_name: String,

    pub rating_enabled: bool,
    pub rating_value: String,
    pub review_count: String,
    pub best_rating: String,

    pub seller_enabled: bool,
    pub seller_name: String,
    pub seller_url: String,

    pub shipping_enabled: bool,
    pub shipping_country: String,
    pub handling_min_days: String,
    pub handling_max_days: String,
    pub transit_min_days: String,
    pub transit_max_days: String,

    pub return_policy_enabled: bool,
    pub return_policy_category: String,
    pub return_days: String,
    pub return_method: String,
    pub return_fees: String,

    pub item_condition: String,
    pub price_valid_until: String,

    pub gtin: String,
    pub mpn: String,
}
