//! End-to-end ranking scenarios driven through the public engine and catalog API.

use shoe_advisor::recommendation::{
    Catalog, CriteriaWeights, EngineError, RecommendationEngine, ShoeId, UserPreferences,
};

fn fixture_catalog() -> Catalog {
    let data = include_bytes!("fixtures/catalog.csv");
    Catalog::from_reader(&data[..]).expect("fixture catalog parses")
}

fn ids(evaluations: &[shoe_advisor::recommendation::ShoeEvaluation]) -> Vec<u32> {
    evaluations
        .iter()
        .map(|evaluation| evaluation.shoe.id.0)
        .collect()
}

#[test]
fn fixture_catalog_imports_every_row() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.len(), 10);
    let wallabee = catalog
        .shoes()
        .iter()
        .find(|shoe| shoe.id == ShoeId(104))
        .expect("wallabee present");
    assert_eq!(wallabee.description.as_deref(), Some("Crepe sole moccasin"));
    assert!(wallabee.image_url.is_none());
}

#[test]
fn default_profile_ranks_fixture_catalog() {
    let catalog = fixture_catalog();
    let engine = RecommendationEngine::new(CriteriaWeights::default(), UserPreferences::default())
        .expect("default weights are valid");

    let evaluations = engine.evaluate(catalog.shoes());

    assert_eq!(evaluations.len(), catalog.len());
    // Samba OG matches every preference inside the ideal price band.
    assert_eq!(evaluations[0].shoe.id, ShoeId(102));
    assert_eq!(evaluations[0].match_percentage, 100.0);
    for (index, evaluation) in evaluations.iter().enumerate() {
        assert_eq!(evaluation.rank, index + 1);
    }
    // The flip flop is out of budget, unbranded and beach-only.
    assert_eq!(evaluations.last().expect("non-empty").shoe.id, ShoeId(109));
}

#[test]
fn prefilter_then_top_recommendations() {
    let catalog = fixture_catalog();
    let engine = RecommendationEngine::new(CriteriaWeights::default(), UserPreferences::default())
        .expect("default weights are valid");

    let shortlist = engine.filter_by_criteria(catalog.shoes());
    let shortlisted: Vec<u32> = shortlist.iter().map(|shoe| shoe.id.0).collect();
    assert_eq!(shortlisted, vec![101, 102, 103, 105, 107, 108]);

    let top = engine.top_recommendations(&shortlist, 3);
    assert_eq!(top.len(), 3);
    assert_eq!(ids(&top)[0], 102);
    assert!(top
        .iter()
        .all(|evaluation| !engine.explain(evaluation).is_empty()));
}

#[test]
fn price_focused_weights_reorder_results() {
    let catalog = fixture_catalog();
    let preferences = UserPreferences {
        preferred_colors: ["Black".to_string()].into_iter().collect(),
        ..UserPreferences::with_budget(800_000, 1_200_000)
    };
    let engine = RecommendationEngine::new(
        CriteriaWeights::from_percentages(0, 0, 100, 0, 0),
        preferences,
    )
    .expect("price-only weights are valid");

    let evaluations = engine.evaluate(catalog.shoes());
    let leaders = &ids(&evaluations)[..3];

    // 999k and 1.099M sit in the 900k-1.1M ideal band; input order breaks the tie.
    assert_eq!(leaders, &[103, 106, 105]);
    assert_eq!(evaluations[0].weighted_score, 10.0);
}

#[test]
fn degenerate_weights_fail_fast() {
    let result = RecommendationEngine::new(
        CriteriaWeights::from_percentages(0, 0, 0, 0, 0),
        UserPreferences::default(),
    );
    assert!(matches!(
        result,
        Err(EngineError::DegenerateWeights { .. })
    ));
}
