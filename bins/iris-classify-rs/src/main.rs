use perceptron_rs::interact::{run_query_loop, QueryPrompts};
use perceptron_rs::io::load_dataset;
use perceptron_rs::metrics::training_accuracy;
use perceptron_rs::train::train;
use perceptron_rs::util::shuffle;
use perceptron_rs::PerceptronParameter;
use std::path::Path;
use std::process;

fn exit_with_help() -> ! {
    print!(
        "\
Usage: iris-classify-rs [options] training_set_file
options:
-l learning_rate : set the learning rate (default 0.01)
-m max_epochs : set the limit on training passes (default 1000)
-s seed : set the shuffle seed (default 1)
-p class_name : class name mapped to label +1 (default setosa)
-n class_name : display name for label -1 (default virginica)
-q : quiet mode (no training progress)
"
    );
    process::exit(1);
}

/// Feature prompts for the query loop. Four-column datasets get the iris
/// measurement names; anything else falls back to generic coordinates.
fn feature_names(dimension: usize) -> Vec<String> {
    if dimension == 4 {
        ["sepal length", "sepal width", "petal length", "petal width"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        (1..=dimension).map(|i| format!("x{}", i)).collect()
    }
}

fn dataset_display_name(input_file: &str) -> String {
    Path::new(input_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("this data")
        .to_string()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut param = PerceptronParameter::default();
    let mut seed: u64 = 1;
    let mut positive_class = String::from("setosa");
    let mut negative_class = String::from("virginica");
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        if !args[i].starts_with('-') {
            break;
        }
        let flag = &args[i];

        // -q takes no argument
        if flag == "-q" {
            quiet = true;
            i += 1;
            continue;
        }

        // All other flags consume the next argument
        i += 1;
        if i >= args.len() || flag.len() < 2 {
            exit_with_help();
        }

        match flag.as_bytes()[1] {
            b'l' => {
                param.learning_rate = args[i].parse().unwrap_or_else(|_| exit_with_help());
            }
            b'm' => {
                param.max_epochs = args[i].parse().unwrap_or_else(|_| exit_with_help());
            }
            b's' => {
                seed = args[i].parse().unwrap_or_else(|_| exit_with_help());
            }
            b'p' => {
                positive_class = args[i].clone();
            }
            b'n' => {
                negative_class = args[i].clone();
            }
            _ => {
                eprintln!("Unknown option: {}", flag);
                exit_with_help();
            }
        }
        i += 1;
    }

    // Remaining: training_set_file
    if i >= args.len() {
        exit_with_help();
    }
    let input_file = &args[i];

    if quiet {
        perceptron_rs::set_quiet(true);
    }

    let mut samples = load_dataset(Path::new(input_file), &positive_class).unwrap_or_else(|e| {
        eprintln!("can't open input file {}: {}", input_file, e);
        process::exit(1);
    });

    shuffle(&mut samples, seed);

    let model = train(&samples, &param).unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    });

    let (percent, correct, total) = training_accuracy(&model, &samples).unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    });
    if !quiet {
        eprintln!(
            "Accuracy = {}% ({}/{}) (training set)",
            percent, correct, total
        );
    }

    let prompts = QueryPrompts {
        banner: format!("\"I know {}. Ask me !\"", dataset_display_name(input_file)),
        features: feature_names(model.dimension()),
        positive: positive_class,
        negative: negative_class,
    };

    println!("(type \"quit\" or \"exit\" to stop)");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = run_query_loop(&model, &prompts, stdin.lock(), stdout.lock()) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
