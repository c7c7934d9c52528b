#![cfg(test)]

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    arch::{OutputPolicy, activations::ActFn},
    dataset::{DataDescriptor, FeatureMatrix},
    initialization::WeightInit,
    training::{DeltaClamp, DeltaRule, ModelTrainer, Perceptron, Trainer},
};

fn and2() -> FeatureMatrix {
    FeatureMatrix::from_rows([
        [0., 0., 0.], // 0
        [0., 1., 0.], // 0
        [1., 0., 0.], // 0
        [1., 1., 1.], // 1
    ])
    .unwrap()
}

fn and3() -> FeatureMatrix {
    let rows = (0..8).map(|i| {
        let x = [(i >> 2) & 1, (i >> 1) & 1, i & 1].map(f64::from);
        let y = if i == 7 { 1. } else { 0. };
        [x[0], x[1], x[2], y]
    });

    FeatureMatrix::from_rows(rows).unwrap()
}

#[test]
fn test_perceptron_and2_gate_convergence() {
    let descriptor = DataDescriptor::trailing_label(2);
    let mut trainer = ModelTrainer::new(Perceptron::new(0.1, 0.), 50, StdRng::seed_from_u64(0));

    let score = trainer.train(&and2(), &descriptor).unwrap();
    assert!(score.converged());
    assert!(score.iterations() < 50);

    let model = score.into_model();
    assert_eq!(model.policy(), OutputPolicy::Activation);
    assert_eq!(model.dims(), 2);
}

#[test]
fn test_perceptron_and3_gate_reports_every_row() {
    let descriptor = DataDescriptor::trailing_label(3);
    let rule = Perceptron::new(0.1, 0.).with_init(WeightInit::zeros());
    let mut trainer = ModelTrainer::new(rule, 100, StdRng::seed_from_u64(0));

    let score = trainer.train(&and3(), &descriptor).unwrap();

    assert_eq!(score.weights().len(), 3);
    assert_eq!(score.errors().len(), 8);
    assert_eq!(score.history().len(), score.iterations());
}

#[test]
fn test_label_in_the_first_column() {
    // AND with the label moved in front of the features.
    let matrix = FeatureMatrix::from_rows([
        [0., 0., 0.],
        [0., 0., 1.],
        [0., 1., 0.],
        [1., 1., 1.],
    ])
    .unwrap();
    let descriptor = DataDescriptor::new(2, 0);
    let rule = Perceptron::new(0.1, 0.).with_init(WeightInit::zeros());
    let mut trainer = ModelTrainer::new(rule, 50, StdRng::seed_from_u64(0));

    let score = trainer.train(&matrix, &descriptor).unwrap();

    // Same run as with the trailing label.
    assert_eq!(score.history(), [1., -1., -1., 0.]);

    let features_only = FeatureMatrix::from_rows([[1., 1.]]).unwrap();
    let pred = score.model().predict(&features_only, &descriptor).unwrap();
    assert_eq!(pred.len(), 1);
}

#[test]
fn test_delta_policies_agree_on_a_trained_and_gate() {
    let matrix = FeatureMatrix::from_rows([
        [0., 0., 1., 0.],
        [0., 1., 1., 0.],
        [1., 0., 1., 0.],
        [1., 1., 1., 1.],
    ])
    .unwrap();
    let descriptor = DataDescriptor::trailing_label(3);

    let mut predictions = Vec::new();
    for clamp in [DeltaClamp::Legacy, DeltaClamp::Threshold] {
        let rule = DeltaRule::new(1.).with_clamp(clamp);
        let mut trainer = ModelTrainer::new(rule, 1000, StdRng::seed_from_u64(0));
        let score = trainer.train(&matrix, &descriptor).unwrap();

        assert!(score.converged());
        predictions.push(score.model().predict(&matrix, &descriptor).unwrap());
    }

    assert_eq!(predictions[0], [0., 0., 0., 1.]);
    assert_eq!(predictions[0], predictions[1]);
}

#[test]
fn test_trainers_behind_the_trait() {
    let descriptor = DataDescriptor::trailing_label(2);
    let mut trainers: Vec<Box<dyn Trainer>> = vec![
        Box::new(ModelTrainer::new(
            Perceptron::new(0.1, 0.),
            20,
            StdRng::seed_from_u64(1),
        )),
        Box::new(ModelTrainer::new(
            DeltaRule::new(0.5).with_act_fn(ActFn::sigmoid(1.)),
            20,
            StdRng::seed_from_u64(1),
        )),
    ];

    for trainer in trainers.iter_mut() {
        let score = trainer.train(&and2(), &descriptor).unwrap();
        assert_eq!(score.weights().len(), 2);
        assert!(score.iterations() <= 20);
    }
}

#[test]
fn test_normal_init_is_reproducible() {
    let descriptor = DataDescriptor::trailing_label(2);
    let init = WeightInit::Normal {
        mean: 0.,
        std_dev: 0.1,
    };

    let run = || {
        let rule = DeltaRule::new(1.).with_init(init);
        ModelTrainer::new(rule, 5, StdRng::seed_from_u64(9))
            .train(&and2(), &descriptor)
            .unwrap()
    };

    assert_eq!(run().weights(), run().weights());
}
