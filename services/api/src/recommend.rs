use crate::infra::{load_catalog, parse_weights};
use clap::Args;
use shoe_advisor::config::AppConfig;
use shoe_advisor::error::AppError;
use shoe_advisor::recommendation::catalog::{BRANDS, COLORS, MATERIALS, OCCASIONS};
use shoe_advisor::recommendation::{
    format_rupiah, tables, Catalog, CriteriaWeights, ExplainedEvaluation, RecommendationEngine,
    ShoeEvaluation, UserPreferences,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Preferred colors, comma separated (e.g. Black,White)
    #[arg(long, value_delimiter = ',')]
    pub(crate) colors: Vec<String>,
    /// Preferred materials, comma separated
    #[arg(long, value_delimiter = ',')]
    pub(crate) materials: Vec<String>,
    /// Preferred brands, comma separated
    #[arg(long, value_delimiter = ',')]
    pub(crate) brands: Vec<String>,
    /// Preferred occasions, comma separated
    #[arg(long, value_delimiter = ',')]
    pub(crate) occasions: Vec<String>,
    /// Lower budget bound in rupiah
    #[arg(long, default_value_t = 500_000)]
    pub(crate) min_price: i64,
    /// Upper budget bound in rupiah
    #[arg(long, default_value_t = 2_000_000)]
    pub(crate) max_price: i64,
    /// Relative weights as color,material,price,brand,occasion (defaults to 20,20,25,15,20)
    #[arg(long, value_parser = parse_weights)]
    pub(crate) weights: Option<CriteriaWeights>,
    /// Number of recommendations to show (defaults to RECOMMENDATION_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Drop out-of-budget and off-color shoes before ranking
    #[arg(long)]
    pub(crate) prefilter: bool,
    /// CSV catalog to rank (defaults to SHOE_CATALOG_PATH or the sample catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the ranked evaluations as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// CSV catalog to list (defaults to SHOE_CATALOG_PATH or the sample catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

impl RecommendArgs {
    /// Preference values outside the known vocabularies, as `(flag, value)` pairs.
    fn unrecognized(&self) -> Vec<(&'static str, &str)> {
        let groups: [(&'static str, &[String], &[&str]); 4] = [
            ("colors", &self.colors, &COLORS),
            ("materials", &self.materials, &MATERIALS),
            ("brands", &self.brands, &BRANDS),
            ("occasions", &self.occasions, &OCCASIONS),
        ];

        groups
            .into_iter()
            .flat_map(|(flag, values, known)| {
                values
                    .iter()
                    .filter(move |value| !known.contains(&value.as_str()))
                    .map(move |value| (flag, value.as_str()))
            })
            .collect()
    }

    fn preferences(&self) -> UserPreferences {
        UserPreferences {
            preferred_colors: self.colors.iter().cloned().collect(),
            preferred_materials: self.materials.iter().cloned().collect(),
            min_price: self.min_price,
            max_price: self.max_price,
            preferred_brands: self.brands.iter().cloned().collect(),
            preferred_occasions: self.occasions.iter().cloned().collect(),
        }
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    tables::validate_tables()?;
    let config = AppConfig::load()?;
    let catalog_path = args
        .catalog
        .clone()
        .or(config.recommendation.catalog_path);
    let catalog = load_catalog(catalog_path.as_deref())?;

    let engine = RecommendationEngine::new(args.weights.unwrap_or_default(), args.preferences())?;
    let limit = args.limit.unwrap_or(config.recommendation.default_limit);
    let evaluations = rank(&engine, &catalog, args.prefilter, limit);

    for (flag, value) in args.unrecognized() {
        eprintln!("Note: {value} is not a known value for --{flag}; it can only match exactly");
    }

    if args.json {
        match serde_json::to_string_pretty(&explained(&engine, evaluations)) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Evaluations unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    render_evaluations(&engine, &evaluations, catalog.len());
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog_path = args.catalog.or(config.recommendation.catalog_path);
    let catalog = load_catalog(catalog_path.as_deref())?;

    println!("Catalog ({} shoes)", catalog.len());
    for shoe in catalog.shoes() {
        println!(
            "- #{} {} | {} | {} {} | {} | {}",
            shoe.id,
            shoe.name,
            shoe.brand,
            shoe.color,
            shoe.material,
            shoe.occasion,
            format_rupiah(shoe.price)
        );
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    tables::validate_tables()?;
    let catalog = Catalog::sample();
    let preferences = UserPreferences::default();
    let engine = RecommendationEngine::new(CriteriaWeights::default(), preferences)?;

    println!("Shoe recommendation demo");
    println!(
        "Budget: {} - {}",
        format_rupiah(engine.preferences().min_price),
        format_rupiah(engine.preferences().max_price)
    );

    let shortlist = engine.filter_by_criteria(catalog.shoes());
    println!(
        "Prefilter keeps {} of {} shoes: {}",
        shortlist.len(),
        catalog.len(),
        shortlist
            .iter()
            .map(|shoe| shoe.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let evaluations = engine.top_recommendations(catalog.shoes(), 5);
    render_evaluations(&engine, &evaluations, catalog.len());
    Ok(())
}

pub(crate) fn rank(
    engine: &RecommendationEngine,
    catalog: &Catalog,
    prefilter: bool,
    limit: usize,
) -> Vec<ShoeEvaluation> {
    if prefilter {
        let shortlist = engine.filter_by_criteria(catalog.shoes());
        engine.top_recommendations(&shortlist, limit)
    } else {
        engine.top_recommendations(catalog.shoes(), limit)
    }
}

fn explained(
    engine: &RecommendationEngine,
    evaluations: Vec<ShoeEvaluation>,
) -> Vec<ExplainedEvaluation> {
    evaluations
        .into_iter()
        .map(|evaluation| ExplainedEvaluation::new(engine, evaluation))
        .collect()
}

fn render_evaluations(
    engine: &RecommendationEngine,
    evaluations: &[ShoeEvaluation],
    catalog_size: usize,
) {
    if evaluations.is_empty() {
        println!("\nNo shoes matched ({catalog_size} in catalog)");
        return;
    }

    println!(
        "\nTop {} of {} shoes (weighted score / match)",
        evaluations.len(),
        catalog_size
    );
    for evaluation in evaluations {
        let shoe = &evaluation.shoe;
        println!(
            "{}. {} ({}) {:.2}/10 | {:.0}% match | {}",
            evaluation.rank,
            shoe.name,
            shoe.brand,
            evaluation.weighted_score,
            evaluation.match_percentage,
            format_rupiah(shoe.price)
        );
        let scores = &evaluation.scores;
        println!(
            "   color {:.1} | material {:.1} | price {:.1} | brand {:.1} | occasion {:.1}",
            scores.color, scores.material, scores.price, scores.brand, scores.occasion
        );
        for reason in engine.explain(evaluation) {
            println!("   - {reason}");
        }
    }
}
