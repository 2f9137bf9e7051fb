//! Expected recommendations on the fixture site

use crate::common::*;
use affinity::{BlogPostItem, CalculatorItem, ContentSource, HitOrigin, Locale};

fn slugs(posts: &[&BlogPostItem]) -> Vec<String> {
    posts.iter().map(|p| p.slug.clone()).collect()
}

fn ids(calcs: &[&CalculatorItem]) -> Vec<String> {
    calcs.iter().map(|c| c.id.clone()).collect()
}

// ============================================================================
// Post → posts
// ============================================================================

#[test]
fn test_loan_post_related_posts() {
    let site = TestSite::new();
    let post = site.catalog.post(Locale::En, "how-loans-work").unwrap();
    let hits = site.related.related_posts_for_post_hits(post, 3, Locale::En);

    let got: Vec<(&str, u32)> = hits.iter().map(|h| (h.item.slug.as_str(), h.score)).collect();
    // mortgage post: category 10 + shared "loan" tag 5; compounding: category only
    assert_eq!(
        got,
        vec![("first-home-mortgage", 15), ("power-of-compounding", 10)]
    );
}

#[test]
fn test_turkish_post_related_posts() {
    let site = TestSite::new();
    let post = site.catalog.post(Locale::Tr, "kredi-nasil-hesaplanir").unwrap();
    let result = site.related.related_posts_for_post(post, 5, Locale::Tr);
    assert_eq!(slugs(&result), vec!["konut-kredisi-rehberi"]);
}

#[test]
fn test_post_without_neighbours() {
    let site = TestSite::new();
    let post = site.catalog.post(Locale::En, "metric-vs-imperial").unwrap();
    assert!(site.related.related_posts_for_post(post, 5, Locale::En).is_empty());
}

// ============================================================================
// Post → calculators
// ============================================================================

#[test]
fn test_loan_post_related_calculators() {
    let site = TestSite::new();
    let post = site.catalog.post(Locale::En, "how-loans-work").unwrap();
    let hits = site.related.related_calculators_for_post_hits(post, 5);

    let got: Vec<(&str, HitOrigin)> = hits.iter().map(|h| (h.item.id.as_str(), h.origin)).collect();
    assert_eq!(
        got,
        vec![
            ("loan-calculator", HitOrigin::Manual),
            ("mortgage-calculator", HitOrigin::Manual),
            ("compound-interest-calculator", HitOrigin::Scored),
        ]
    );
}

#[test]
fn test_stale_calculator_in_table_skipped() {
    let site = TestSite::new();
    let post = site.catalog.post(Locale::En, "tax-brackets-explained").unwrap();
    let result = site.related.related_calculators_for_post(post, 5);
    assert_eq!(ids(&result), vec!["income-tax-calculator"]);
}

#[test]
fn test_scored_calculators_without_manual_entry() {
    let site = TestSite::new();
    let post = site.catalog.post(Locale::En, "healthy-weight-guide").unwrap();
    let hits = site.related.related_calculators_for_post_hits(post, 5);

    let got: Vec<(&str, u32)> = hits.iter().map(|h| (h.item.id.as_str(), h.score)).collect();
    // bmi: category 5 + "bmi" 3 + "weight" 3; calorie: category 5
    assert_eq!(got, vec![("bmi-calculator", 11), ("calorie-calculator", 5)]);
}

// ============================================================================
// Calculator → posts
// ============================================================================

#[test]
fn test_mortgage_calculator_related_posts() {
    let site = TestSite::new();
    let calc = site.catalog.calculator("mortgage-calculator").unwrap();
    let result = site.related.related_posts_for_calculator(calc, 3);
    assert_eq!(
        slugs(&result),
        vec!["how-loans-work", "first-home-mortgage", "power-of-compounding"]
    );
}

#[test]
fn test_retired_post_in_table_skipped() {
    let site = TestSite::new();
    let calc = site.catalog.calculator("bmi-calculator").unwrap();
    let hits = site.related.related_posts_for_calculator_hits(calc, 5, Locale::En);

    assert!(hits.iter().all(|h| h.origin == HitOrigin::Scored));
    let got: Vec<&str> = hits.iter().map(|h| h.item.slug.as_str()).collect();
    assert_eq!(got, vec!["healthy-weight-guide", "counting-calories"]);
}

#[test]
fn test_tax_calculator_only_manual_pick() {
    let site = TestSite::new();
    let calc = site.catalog.calculator("income-tax-calculator").unwrap();
    let result = site.related.related_posts_for_calculator(calc, 5);
    assert_eq!(slugs(&result), vec!["tax-brackets-explained"]);
}

#[test]
fn test_calculator_posts_in_turkish() {
    let site = TestSite::new();
    let calc = site.catalog.calculator("loan-calculator").unwrap();
    let result = site.related.related_posts_for_calculator_in(calc, 5, Locale::Tr);
    // manual pick first, then konut-kredisi (category 5), never English posts
    assert_eq!(
        slugs(&result),
        vec!["kredi-nasil-hesaplanir", "konut-kredisi-rehberi"]
    );
}
