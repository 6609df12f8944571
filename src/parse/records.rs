//! Pipe-delimited record parsing for the multi-line form fields.
//!
//! Lines that don't match the expected arity are silently skipped. That
//! leniency is deliberate: a half-typed row in a textarea should never
//! abort generation of the rest of the page.

use super::lines::clean_lines;

/// `name | description | url` row (offers, catalog services).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// `dayOfWeek | opens | closes` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursRow {
    pub day: String,
    pub opens: String,
    pub closes: String,
}

/// `name | url | image [| price [| currency [| availability]]]` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,
    pub url: String,
    pub image: String,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub availability: Option<String>,
}

/// Two-part records (FAQ question/answer, breadcrumb name/url).
/// Split on the FIRST pipe only so the value side may contain pipes.
/// Lines without a pipe are dropped.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    clean_lines(text)
        .iter()
        .filter_map(|line| {
            let (left, right) = line.split_once('|')?;
            Some((left.trim().to_string(), right.trim().to_string()))
        })
        .collect()
}

/// Exactly-three-part records. Any other arity is dropped.
pub fn parse_triples(text: &str) -> Vec<Triple> {
    clean_lines(text)
        .iter()
        .filter_map(|line| {
            let parts = split_parts(line);
            match parts.as_slice() {
                [name, description, url] => Some(Triple {
                    name: name.clone(),
                    description: description.clone(),
                    url: url.clone(),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Opening-hours rows, same exact-arity policy as [`parse_triples`].
pub fn parse_hours(text: &str) -> Vec<HoursRow> {
    clean_lines(text)
        .iter()
        .filter_map(|line| {
            let parts = split_parts(line);
            match parts.as_slice() {
                [day, opens, closes] => Some(HoursRow {
                    day: day.clone(),
                    opens: opens.clone(),
                    closes: closes.clone(),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Product rows: at least name/url/image, optional price/currency/availability.
pub fn parse_products(text: &str) -> Vec<ProductRow> {
    clean_lines(text)
        .iter()
        .filter_map(|line| {
            let parts = split_parts(line);
            if parts.len() < 3 {
                return None;
            }
            Some(ProductRow {
                name: parts[0].clone(),
                url: parts[1].clone(),
                image: parts[2].clone(),
                price: parts.get(3).cloned(),
                currency: parts.get(4).cloned(),
                availability: parts.get(5).cloned(),
            })
        })
        .collect()
}

fn split_parts(line: &str) -> Vec<String> {
    line.split('|').map(|p| p.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_split_on_first_pipe_only() {
        let pairs = parse_pairs("What is X? | It is Y | extra");
        assert_eq!(
            pairs,
            vec![("What is X?".to_string(), "It is Y | extra".to_string())]
        );
    }

    #[test]
    fn pairs_drop_lines_without_pipe() {
        let pairs = parse_pairs("no pipe here\nName | https://a.com");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "Name");
    }

    #[test]
    fn triples_exact_arity() {
        let rows = parse_triples(
            "Beds | Premium beds | https://a.com/beds\n\
             Too | few\n\
             One | two | three | four",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Beds");
        assert_eq!(rows[0].description, "Premium beds");
        assert_eq!(rows[0].url, "https://a.com/beds");
    }

    #[test]
    fn hours_rows() {
        let rows = parse_hours("Monday | 09:00 | 17:00\nbroken line");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day, "Monday");
        assert_eq!(rows[0].closes, "17:00");
    }

    #[test]
    fn products_variable_arity() {
        let rows = parse_products(
            "Bed | https://a.com/bed | https://a.com/bed.jpg | 499 | EUR | https://schema.org/InStock\n\
             Sofa | https://a.com/sofa | https://a.com/sofa.jpg\n\
             Lamp | https://a.com/lamp",
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].price.as_deref(), Some("499"));
        assert_eq!(rows[0].currency.as_deref(), Some("EUR"));
        assert_eq!(rows[1].price, None);
    }

    #[test]
    fn short_line_never_produces_record() {
        assert!(parse_triples("a | b").is_empty());
        assert!(parse_products("a | b").is_empty());
    }
}
