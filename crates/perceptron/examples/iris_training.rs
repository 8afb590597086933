//! Classic Iris workflow example: setosa versus the rest.
//!
//! Run:
//!   cargo run -p perceptron-rs --example iris_training

use perceptron_rs::io::load_dataset;
use perceptron_rs::metrics::training_accuracy;
use perceptron_rs::train::train;
use perceptron_rs::util::shuffle;
use perceptron_rs::{set_quiet, PerceptronParameter};
use std::path::Path;

fn main() {
    set_quiet(true);

    let mut samples =
        load_dataset(Path::new("data/iris.csv"), "setosa").expect("failed to load iris dataset");
    shuffle(&mut samples, 1);

    let param = PerceptronParameter::default();
    let model = train(&samples, &param).expect("training failed");

    println!(
        "Converged: {} ({} epoch(s), {} update(s))",
        model.converged, model.epochs_run, model.update_count
    );
    println!("Weights: {:?}", model.weights);

    let (percent, correct, total) =
        training_accuracy(&model, &samples).expect("accuracy check failed");
    println!("Iris training accuracy: {percent}% ({correct}/{total})");
}
