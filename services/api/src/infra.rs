use metrics_exporter_prometheus::PrometheusHandle;
use shoe_advisor::recommendation::{Catalog, CatalogError, CriteriaWeights};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads a CSV catalog when a path is given, otherwise the built-in sample.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::from_path(path),
        None => Ok(Catalog::sample()),
    }
}

/// Parses `color,material,price,brand,occasion` relative weights, e.g. `20,20,25,15,20`.
pub(crate) fn parse_weights(raw: &str) -> Result<CriteriaWeights, String> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|err| format!("invalid weight '{}' ({err})", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [color, material, price, brand, occasion] => Ok(CriteriaWeights {
            color: *color,
            material: *material,
            price: *price,
            brand: *brand,
            occasion: *occasion,
        }),
        _ => Err(format!(
            "expected 5 comma separated weights (color,material,price,brand,occasion), got {}",
            values.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_five_weights() {
        let weights = parse_weights("20, 20,25,15 ,20").expect("weights parse");
        assert_eq!(
            weights,
            CriteriaWeights {
                color: 20.0,
                material: 20.0,
                price: 25.0,
                brand: 15.0,
                occasion: 20.0,
            }
        );
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(parse_weights("1,2,3").is_err());
        assert!(parse_weights("1,2,3,4,x").is_err());
    }

    #[test]
    fn falls_back_to_sample_catalog() {
        let catalog = load_catalog(None).expect("sample loads");
        assert_eq!(catalog.len(), Catalog::sample().len());
    }
}
