//! Shows that sample order shapes the learned weights.
//!
//! Updates happen immediately as each sample is visited, so two
//! presentations of the same set can settle on different separators.
//! Both still fit the data.
//!
//! Run:
//!   cargo run -p perceptron-rs --example order_sensitivity

use perceptron_rs::train::train;
use perceptron_rs::{set_quiet, Label, PerceptronParameter, Sample};

fn fixture() -> Vec<Sample> {
    vec![
        Sample::new(Label::Positive, vec![3.0, 0.0]),
        Sample::new(Label::Positive, vec![0.0, 1.0]),
        Sample::new(Label::Negative, vec![-1.0, -2.0]),
    ]
}

fn fits(model: &perceptron_rs::PerceptronModel, samples: &[Sample]) -> bool {
    samples
        .iter()
        .all(|s| matches!(model.classify(&s.features), Ok(p) if p == s.label))
}

fn main() {
    set_quiet(true);

    let param = PerceptronParameter {
        learning_rate: 0.1,
        ..Default::default()
    };

    let forward = fixture();
    let mut reversed = fixture();
    reversed.reverse();

    let model_a = train(&forward, &param).expect("training failed");
    let model_b = train(&reversed, &param).expect("training failed");

    println!(
        "Forward order:  weights {:?}, {} update(s)",
        model_a.weights, model_a.update_count
    );
    println!(
        "Reversed order: weights {:?}, {} update(s)",
        model_b.weights, model_b.update_count
    );
    println!(
        "Both separate the set: {}",
        fits(&model_a, &forward) && fits(&model_b, &forward)
    );
}
