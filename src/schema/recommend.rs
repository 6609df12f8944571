//! Static entity recommendations per page type. Informational only; the
//! builders never consult this.

use crate::input::PageType;

pub struct Recommendations {
    pub must_have: &'static [&'static str],
    pub recommended: &'static [&'static str],
    pub optional: &'static [&'static str],
}

pub fn recommendations(page_type: PageType) -> Recommendations {
    match page_type {
        PageType::Homepage => Recommendations {
            must_have: &["WebSite", "Organization OR LocalBusiness"],
            recommended: &["SearchAction", "sameAs", "logo"],
            optional: &["additionalType", "about/knowsAbout", "OfferCatalog"],
        },
        PageType::LocalBusiness => Recommendations {
            must_have: &["LocalBusiness (or subtype)", "PostalAddress", "url", "telephone"],
            recommended: &["geo", "openingHoursSpecification", "hasMap", "sameAs"],
            optional: &["aggregateRating", "identifier", "founder", "hasOfferCatalog"],
        },
        PageType::ServicePage => Recommendations {
            must_have: &["WebPage", "Service"],
            recommended: &["BreadcrumbList", "FAQPage", "provider"],
            optional: &["areaServed", "offers"],
        },
        PageType::CollectionPage => Recommendations {
            must_have: &["CollectionPage", "ItemList"],
            recommended: &["BreadcrumbList", "FAQPage"],
            optional: &["ProductCollection", "shipping/return references"],
        },
        PageType::ProductPage => Recommendations {
            must_have: &["Product", "Offer"],
            recommended: &[
                "BreadcrumbList",
                "mainEntityOfPage",
                "seller",
                "shippingDetails",
                "returnPolicy",
            ],
            optional: &["aggregateRating", "gtin/mpn", "priceValidUntil", "itemCondition"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_type_has_must_haves() {
        for pt in [
            PageType::Homepage,
            PageType::LocalBusiness,
            PageType::ServicePage,
            PageType::CollectionPage,
            PageType::ProductPage,
        ] {
            assert!(!recommendations(pt).must_have.is_empty(), "{pt}");
        }
    }
}
