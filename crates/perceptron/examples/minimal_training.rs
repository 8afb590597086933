//! Minimal self-contained perceptron training example.
//!
//! Run:
//!   cargo run -p perceptron-rs --example minimal_training

use perceptron_rs::classify::classify;
use perceptron_rs::train::train;
use perceptron_rs::{set_quiet, Label, PerceptronParameter, Sample};

fn main() {
    set_quiet(true);

    // Tiny linearly-separable dataset in 2D.
    let samples = vec![
        Sample::new(Label::Positive, vec![2.0, 2.0]),
        Sample::new(Label::Positive, vec![2.5, 1.8]),
        Sample::new(Label::Negative, vec![-2.0, -1.5]),
        Sample::new(Label::Negative, vec![-2.4, -2.2]),
    ];

    let param = PerceptronParameter::default();
    let model = train(&samples, &param).expect("training failed");

    println!(
        "Converged: {} ({} epoch(s), {} update(s))",
        model.converged, model.epochs_run, model.update_count
    );
    println!("Weights: {:?}", model.weights);

    let query = vec![1.8, 1.9];
    let pred = classify(&model.weights, &query).expect("classification failed");
    println!("Predicted label for [1.8, 1.9]: {}", pred.value());

    let train_correct = samples
        .iter()
        .filter(|s| matches!(model.classify(&s.features), Ok(p) if p == s.label))
        .count();
    println!("Training accuracy: {}/{}", train_correct, samples.len());
}
