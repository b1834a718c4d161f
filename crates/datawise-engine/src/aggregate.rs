//! Aggregations backing each question template.
//!
//! Every function is total: an empty selection resolves to the template's
//! default answer instead of an error.

use std::collections::HashSet;

use datawise_core::{Answer, SalesField};
use datawise_store::{Predicate, SalesStore};

/// Sum of sales for a product in a city, truncated toward zero.
pub fn total_sales(store: &SalesStore, product: &str, city: &str) -> Answer {
    let total: f64 = store
        .filter(&[
            Predicate::equals(SalesField::Product, product),
            Predicate::equals(SalesField::City, city),
        ])
        .iter()
        .map(|r| r.sales)
        .sum();

    Answer::Total(total.trunc() as i64)
}

/// Number of distinct reps in a region.
pub fn rep_count(store: &SalesStore, region: &str) -> Answer {
    let rows = store.filter(&[Predicate::equals(SalesField::Region, region)]);
    let reps: HashSet<&str> = rows.iter().map(|r| r.rep.as_str()).collect();
    Answer::Count(reps.len() as u64)
}

/// Mean sales for a product in a region, rounded to two decimals.
pub fn average_sales(store: &SalesStore, product: &str, region: &str) -> Answer {
    let rows = store.filter(&[
        Predicate::equals(SalesField::Product, product),
        Predicate::equals(SalesField::Region, region),
    ]);

    if rows.is_empty() {
        return Answer::AverageUndefined;
    }

    let mean = rows.iter().map(|r| r.sales).sum::<f64>() / rows.len() as f64;
    Answer::Average(round2(mean))
}

/// Date of a rep's highest sale in a city. Ties go to the earliest row.
pub fn top_sale_date(store: &SalesStore, rep: &str, city: &str) -> Answer {
    let rows = store.filter(&[
        Predicate::equals(SalesField::Rep, rep),
        Predicate::equals(SalesField::City, city),
    ]);

    let best = rows.into_iter().reduce(|best, r| {
        if r.sales > best.sales {
            r
        } else {
            best
        }
    });

    match best {
        Some(record) => Answer::Date(record.date),
        None => Answer::NoSalesFound,
    }
}

/// Two-decimal rounding with ties to even, so `0.125` becomes `0.12`.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
