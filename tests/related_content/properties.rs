//! Invariants over generated catalogs

use affinity::{
    AffinityEntry, AffinityTable, BlogPostItem, CalculatorItem, Catalog, ContentSource, HitOrigin,
    Locale, RelatedContent,
};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

const CATEGORIES: &[&str] = &["Finance", "Health", "Tax", "Conversion"];
const TAGS: &[&str] = &["loan", "Mortgage", "savings", "bmi", "tax", "income-tax", "diet"];
const WORDS: &[&str] = &[
    "guide", "loan", "basics", "health", "saving", "growth.", "tax", "your", "rates", "home",
];

type PostSpec = (usize, Vec<usize>, Vec<usize>);

fn arb_posts(max: usize) -> impl Strategy<Value = Vec<PostSpec>> {
    prop::collection::vec(
        (
            0..CATEGORIES.len(),
            prop::collection::vec(0..TAGS.len(), 0..4),
            prop::collection::vec(0..WORDS.len(), 0..5),
        ),
        0..max,
    )
}

fn arb_calculators() -> impl Strategy<Value = Vec<(usize, Vec<usize>)>> {
    prop::collection::vec(
        (0..CATEGORIES.len(), prop::collection::vec(0..TAGS.len(), 0..3)),
        0..6,
    )
}

/// Affinity entries as (post index, calculator indexes). Indexes past the
/// catalog produce stale references.
fn arb_affinity() -> impl Strategy<Value = Vec<(usize, Vec<usize>)>> {
    prop::collection::vec((0..10usize, prop::collection::vec(0..8usize, 0..4)), 0..5)
}

fn build_posts(prefix: &str, specs: &[PostSpec]) -> Vec<BlogPostItem> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (cat, tags, words))| {
            let title: Vec<&str> = words.iter().map(|w| WORDS[*w]).collect();
            BlogPostItem::new(format!("{}-{}", prefix, i), title.join(" "), CATEGORIES[*cat])
                .with_tags(tags.iter().map(|t| TAGS[*t]))
        })
        .collect()
}

fn build_engine(
    en: &[PostSpec],
    tr: &[PostSpec],
    calcs: &[(usize, Vec<usize>)],
    affinity: &[(usize, Vec<usize>)],
) -> RelatedContent {
    let calculators: Vec<CalculatorItem> = calcs
        .iter()
        .enumerate()
        .map(|(i, (cat, kws))| {
            CalculatorItem::new(format!("calc-{}", i), "Calc", CATEGORIES[*cat])
                .with_keywords(kws.iter().map(|k| TAGS[*k]))
        })
        .collect();

    let catalog = Catalog::builder()
        .calculators(calculators)
        .posts(Locale::En, build_posts("en", en))
        .posts(Locale::Tr, build_posts("tr", tr))
        .build()
        .expect("generated ids are unique");

    // One entry per post slug; later duplicates are dropped
    let mut entries: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (post, calcs) in affinity {
        entries
            .entry(*post)
            .or_insert_with(|| calcs.iter().map(|c| format!("calc-{}", c)).collect());
    }
    let table = AffinityTable::from_entries(
        entries
            .into_iter()
            .map(|(p, calcs)| AffinityEntry::new(format!("en-{}", p), calcs)),
    )
    .expect("slugs are unique");

    RelatedContent::new(Arc::new(catalog), Arc::new(table))
}

proptest! {
    #[test]
    fn prop_posts_for_post_contracts(
        en in arb_posts(8),
        tr in arb_posts(5),
        n in 0usize..10,
    ) {
        let engine = build_engine(&en, &tr, &[], &[]);
        for locale in Locale::all() {
            for p in engine.source().posts(*locale) {
                let result = engine.related_posts_for_post(p, n, *locale);
                prop_assert!(result.len() <= n);
                prop_assert!(result.iter().all(|r| r.slug != p.slug));

                let unique: HashSet<&str> = result.iter().map(|r| r.slug.as_str()).collect();
                prop_assert_eq!(unique.len(), result.len());

                let prefix = format!("{}-", locale.code());
                prop_assert!(result.iter().all(|r| r.slug.starts_with(&prefix)));

                let again = engine.related_posts_for_post(p, n, *locale);
                prop_assert_eq!(
                    result.iter().map(|r| &r.slug).collect::<Vec<_>>(),
                    again.iter().map(|r| &r.slug).collect::<Vec<_>>()
                );
            }
        }
    }

    #[test]
    fn prop_scored_hits_sorted_and_positive(en in arb_posts(8), n in 1usize..10) {
        let engine = build_engine(&en, &[], &[], &[]);
        for p in engine.source().posts(Locale::En) {
            let hits = engine.related_posts_for_post_hits(p, n, Locale::En);
            prop_assert!(hits.iter().all(|h| h.score > 0));
            prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
            prop_assert!(hits.iter().enumerate().all(|(i, h)| h.rank as usize == i + 1));
        }
    }

    #[test]
    fn prop_calculators_for_post_manual_prefix(
        en in arb_posts(8),
        calcs in arb_calculators(),
        affinity in arb_affinity(),
        n in 0usize..8,
    ) {
        let engine = build_engine(&en, &[], &calcs, &affinity);
        for p in engine.source().posts(Locale::En) {
            let hits = engine.related_calculators_for_post_hits(p, n);
            prop_assert!(hits.len() <= n);

            let unique: HashSet<&str> = hits.iter().map(|h| h.item.id.as_str()).collect();
            prop_assert_eq!(unique.len(), hits.len());

            let first_scored = hits
                .iter()
                .position(|h| h.origin == HitOrigin::Scored)
                .unwrap_or(hits.len());
            prop_assert!(hits[first_scored..].iter().all(|h| h.origin == HitOrigin::Scored));

            // The first resolvable manual pick always leads
            let first_manual = engine
                .affinity()
                .calculators_for(&p.slug)
                .iter()
                .find(|id| engine.source().calculator(id).is_some());
            if let (Some(expected), true) = (first_manual, n >= 1) {
                prop_assert_eq!(hits[0].item.id.as_str(), expected.as_str());
                prop_assert_eq!(hits[0].origin, HitOrigin::Manual);
            }
        }
    }

    #[test]
    fn prop_posts_for_calculator_bounded_unique(
        en in arb_posts(8),
        calcs in arb_calculators(),
        affinity in arb_affinity(),
        n in 0usize..8,
    ) {
        let engine = build_engine(&en, &[], &calcs, &affinity);
        for c in engine.source().calculators() {
            let result = engine.related_posts_for_calculator(c, n);
            prop_assert!(result.len() <= n);
            let unique: HashSet<&str> = result.iter().map(|r| r.slug.as_str()).collect();
            prop_assert_eq!(unique.len(), result.len());
        }
    }
}
