mod utils;

use std::io::Write;
use std::path::Path;

use heart_predict::{
    Classifier, FEATURE_COLUMNS, FeatureAssembler, ModelArtifact, Outcome, PatientInput,
    PredictorError,
};
use heart_predict::classifier::sigmoid;
use tempfile::NamedTempFile;
use utils::{REFERENCE_VECTOR, reference_bundle, standard_registry};

fn write_artifact(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn columns() -> String {
    serde_json::to_string(&FEATURE_COLUMNS).unwrap()
}

#[test]
fn test_logistic_artifact_from_disk() {
    // Only sex contributes: male 0.25, female -0.25
    let file = write_artifact(&format!(
        r#"{{
            "kind": "logistic",
            "feature_names": {},
            "coefficients": [0, 0.5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            "intercept": -0.25
        }}"#,
        columns()
    ));
    let artifact = ModelArtifact::load(file.path()).unwrap();
    let assembler = FeatureAssembler::new(standard_registry(), artifact);

    let male = assembler.predict(&reference_bundle()).unwrap();
    assert_eq!(male.outcome, Outcome::Present);
    assert_eq!(male.probability, Some(sigmoid(0.25)));

    let female = assembler
        .predict(&reference_bundle().with(heart_predict::Feature::Sex, "Female"))
        .unwrap();
    assert_eq!(female.outcome, Outcome::Absent);
    assert_eq!(female.probability, Some(sigmoid(-0.25)));
}

#[test]
fn test_tree_ensemble_artifact() {
    let json = format!(
        r#"{{
            "kind": "tree_ensemble",
            "feature_names": {},
            "base_score": -0.1,
            "trees": [
                {{"nodes": [
                    {{"feature": 2, "threshold": 0.5, "left": 1, "right": 2}},
                    {{"leaf": 0.8}},
                    {{"leaf": -0.8}}
                ]}},
                {{"nodes": [
                    {{"feature": 9, "threshold": 1.0, "left": 1, "right": 2}},
                    {{"leaf": -0.3}},
                    {{"leaf": 0.6}}
                ]}}
            ]
        }}"#,
        columns()
    );
    let artifact = ModelArtifact::from_json(&json).unwrap();
    assert_eq!(artifact.size(), 6);

    let margin = artifact.margin(&REFERENCE_VECTOR).unwrap();
    assert!((margin - 1.3).abs() < 1e-9);
    assert_eq!(artifact.predict(&REFERENCE_VECTOR).unwrap(), 1);

    let assembler = FeatureAssembler::new(standard_registry(), artifact);
    let bundle = reference_bundle()
        .with(heart_predict::Feature::ChestPain, "Asymptomatic")
        .with(heart_predict::Feature::StDepression, 0.0);
    let result = assembler.predict(&bundle).unwrap();
    assert_eq!(result.outcome, Outcome::Absent);
    let probability = result.probability.unwrap();
    assert!((probability - sigmoid(-1.2)).abs() < 1e-9);
}

#[test]
fn test_tree_with_backward_edge_is_rejected() {
    let json = format!(
        r#"{{
            "kind": "tree_ensemble",
            "feature_names": {},
            "trees": [{{"nodes": [{{"feature": 0, "threshold": 1.0, "left": 0, "right": 1}}, {{"leaf": 0.1}}]}}]
        }}"#,
        columns()
    );
    assert!(matches!(
        ModelArtifact::from_json(&json),
        Err(PredictorError::Artifact(msg)) if msg.contains("invalid child 0")
    ));
}

#[test]
fn test_missing_artifact_is_io_error() {
    let result = ModelArtifact::load(Path::new("/nonexistent/heart_model.json"));
    assert!(matches!(result, Err(PredictorError::Io(_))));
}

#[test]
fn test_malformed_artifact_is_json_error() {
    let file = write_artifact("{ not json");
    assert!(matches!(
        ModelArtifact::load(file.path()),
        Err(PredictorError::Json(_))
    ));
}

#[test]
fn test_demo_artifact_and_patient() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("demo");
    let artifact = ModelArtifact::load(&root.join("heart_model.json")).unwrap();

    let patient =
        PatientInput::from_json(&std::fs::read_to_string(root.join("patient.json")).unwrap())
            .unwrap();
    assert_eq!(patient.to_bundle(), reference_bundle());

    let assembler = FeatureAssembler::new(standard_registry(), artifact);
    let vector = assembler.assemble(&patient.to_bundle()).unwrap();
    assert_eq!(vector.values(), REFERENCE_VECTOR);

    let result = assembler.predict_vector(&vector).unwrap();
    let probability = result.probability.unwrap();
    assert!((0.0..=1.0).contains(&probability));
    assert_eq!(result.outcome == Outcome::Present, probability >= 0.5);
}
