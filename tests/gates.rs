use linear_learning::{
    MlErr,
    config::TrainerConfig,
    dataset::{DataDescriptor, FeatureMatrix},
    sampling::NormalSampler,
    training::{DeltaRule, TrainerBuilder},
};
use rand::{SeedableRng, rngs::StdRng};

const AND_PERCEPTRON: &str = include_str!("../configs/and_perceptron.json");

#[test]
fn perceptron_config_trains_an_and_gate() {
    let config = TrainerConfig::from_json(AND_PERCEPTRON).unwrap();
    let (matrix, descriptor) = config.dataset.load().unwrap();

    let mut trainer = TrainerBuilder::new().build(&config).unwrap();
    let score = trainer.train(&matrix, &descriptor).unwrap();

    assert!(score.converged());
    assert!(score.iterations() < config.max_iterations);
    assert_eq!(score.weights().len(), descriptor.features());
    assert_eq!(score.total_error(), 0.);
    assert_eq!(score.errors().len(), matrix.nrows());
}

#[test]
fn config_survives_a_json_round_trip() {
    let config = TrainerConfig::from_json(AND_PERCEPTRON).unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let parsed = TrainerConfig::from_json(&json).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn delta_config_with_threshold_clamp() {
    let json = r#"{
        "algorithm": { "kind": "delta", "clamp": "threshold" },
        "learning_rate": 1.0,
        "max_iterations": 1000,
        "dataset": {
            "kind": "inline",
            "features": 3,
            "rows": [[0, 0, 1, 0], [0, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 1]]
        }
    }"#;
    let config = TrainerConfig::from_json(json).unwrap();
    let (matrix, descriptor) = config.dataset.load().unwrap();

    let score = TrainerBuilder::new()
        .build(&config)
        .unwrap()
        .train(&matrix, &descriptor)
        .unwrap();

    assert!(score.converged());
    assert!(score.total_error() <= DeltaRule::TOLERANCE);
    assert_eq!(score.bias(), None);
    assert_eq!(
        score.model().predict(&matrix, &descriptor).unwrap(),
        [0., 0., 0., 1.]
    );
}

#[test]
fn zero_iterations_still_predict() {
    let json = AND_PERCEPTRON.replace(r#""max_iterations": 50"#, r#""max_iterations": 0"#);
    let config = TrainerConfig::from_json(&json).unwrap();
    let (matrix, descriptor) = config.dataset.load().unwrap();

    let score = TrainerBuilder::new()
        .build(&config)
        .unwrap()
        .train(&matrix, &descriptor)
        .unwrap();

    assert_eq!(score.iterations(), 0);
    assert!(!score.converged());
    assert_eq!(score.errors(), [0.; 4]);
    assert_eq!(score.model().predict(&matrix, &descriptor).unwrap().len(), 4);
}

#[test]
fn ragged_and_mislabelled_inputs_are_rejected() {
    assert!(matches!(
        FeatureMatrix::from_rows([vec![0., 0., 0.], vec![1., 1.]]),
        Err(MlErr::SizeMismatch { .. })
    ));

    let config = TrainerConfig::from_json(AND_PERCEPTRON).unwrap();
    let (matrix, _) = config.dataset.load().unwrap();
    let mut trainer = TrainerBuilder::new().build(&config).unwrap();

    let err = trainer
        .train(&matrix, &DataDescriptor::new(2, 5))
        .unwrap_err();
    assert!(err.is_invalid_input());

    let empty = FeatureMatrix::new(vec![], 3).unwrap();
    let err = trainer
        .train(&empty, &DataDescriptor::trailing_label(2))
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn sampler_is_usable_on_its_own() {
    let mut sampler = NormalSampler::new(StdRng::seed_from_u64(1));

    let xs = sampler.sample_vec_with(5., 0.01, 1000);
    let mean = xs.iter().sum::<f64>() / xs.len() as f64;

    assert!((mean - 5.).abs() < 0.01);
}
