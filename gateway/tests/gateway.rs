use std::{fs, io, path::PathBuf, sync::Arc, thread};

use gateway::{
    Gateway, LoadError, ModelError, PredictError, PredictionRequest, RawPrediction, catalog,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/model.json")
}

fn load() -> Gateway {
    Gateway::load(fixture()).unwrap()
}

fn has_two_decimals(value: f64) -> bool {
    let cents = value * 100.0;
    (cents - cents.round()).abs() < 1e-6
}

#[test]
fn pinned_prediction_for_two_bhk_in_vesu() {
    let gateway = load();
    let value = gateway
        .predict(&RawPrediction::new("2", "vesu", "1000"))
        .unwrap();

    assert_eq!(value, 19800.77);
}

#[test]
fn every_catalog_locality_yields_a_rounded_finite_value() {
    let gateway = load();

    for locality in catalog::LOCALITIES {
        for (bhk, sqft) in [(1, 350.0), (2, 1000.0), (4, 2375.5), (10, 10000.0)] {
            let request = PredictionRequest::new(bhk, locality, sqft);
            let value = gateway.predict_request(&request).unwrap();

            assert!(value.is_finite(), "{request:?}");
            assert!(has_two_decimals(value), "{request:?} -> {value}");
        }
    }
}

#[test]
fn huge_finite_inputs_never_yield_infinity() {
    let gateway = load();
    let bhk = u32::MAX.to_string();

    for (bhk, sqft) in [("2", "1e306"), (bhk.as_str(), "1e306"), (bhk.as_str(), "1e300")] {
        let value = gateway
            .predict(&RawPrediction::new(bhk, "vesu", sqft))
            .unwrap();

        assert!(value.is_finite(), "{bhk} / {sqft} -> {value}");
        assert!(value > 0.0, "{bhk} / {sqft} -> {value}");
    }
}

#[test]
fn overflowing_model_output_is_a_failure() {
    let gateway = load();
    let err = gateway
        .predict(&RawPrediction::new("2", "vesu", "1.7e308"))
        .unwrap_err();

    assert!(
        matches!(err, PredictError::Model(ModelError::NonFiniteOutput(_))),
        "{err}"
    );
}

#[test]
fn repeated_requests_are_identical() {
    let gateway = load();
    let raw = RawPrediction::new("3", "adajan", "1432.25");

    let first = gateway.predict(&raw).unwrap();
    let second = gateway.predict(&raw).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn concurrent_callers_share_one_model() {
    let gateway = Arc::new(load());
    let expected = gateway
        .predict(&RawPrediction::new("2", "pal", "900"))
        .unwrap();

    let results: Vec<f64> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gateway = Arc::clone(&gateway);
                s.spawn(move || gateway.predict(&RawPrediction::new("2", "pal", "900")))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });

    assert!(results.iter().all(|&v| v == expected));
}

#[test]
fn non_numeric_inputs_are_described() {
    let gateway = load();

    let err = gateway
        .predict(&RawPrediction::new("abc", "vesu", "1000"))
        .unwrap_err();
    assert!(err.to_string().contains("BHK"), "{err}");

    let err = gateway
        .predict(&RawPrediction::new("2", "vesu", "lots"))
        .unwrap_err();
    assert!(err.to_string().contains("Sqft"), "{err}");
}

#[test]
fn unknown_locality_is_a_model_failure() {
    let gateway = load();
    let err = gateway
        .predict(&RawPrediction::new("2", "mumbai", "1000"))
        .unwrap_err();

    assert_eq!(
        err,
        PredictError::Model(ModelError::UnknownCategory {
            column: "Main_Locality".into(),
            value: "mumbai".into(),
        })
    );
}

#[test]
fn missing_artifact_prevents_startup() {
    let path = fixture().with_file_name("does-not-exist.json");

    match Gateway::load(&path) {
        Err(LoadError::Io { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("loaded a model that doesn't exist"),
    }
}

#[test]
fn corrupt_artifact_prevents_startup() {
    let path = std::env::temp_dir().join(format!("rent-model-{}.json", std::process::id()));
    fs::write(&path, "{ not json").unwrap();

    let res = Gateway::load(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(res, Err(LoadError::Parse(_))));
}
