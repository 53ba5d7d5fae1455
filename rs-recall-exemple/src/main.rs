use std::collections::HashMap;

use rs_recall_core::config::AnalysisConfig;
use rs_recall_core::instrument::timed;
use rs_recall_core::lexicon::{apply_labels, reverse_labels, to_local_space};
use rs_recall_core::sequence::{Entry, drop_perseverations, flatten_once, ngrams};
use rs_recall_core::stats::{ExGauss, pearson};

fn main() -> Result<(), String> {
    // Configuration is an explicit struct; validate before use
    let config = AnalysisConfig::default();
    config.validate()?;

    // A small reaction-time sample with the long right tail typical of
    // recall data (seconds)
    let rts = [0.31, 0.35, 0.38, 0.41, 0.45, 0.52, 0.70, 1.20];

    if rts.len() < config.min_rt_samples {
        return Err("Not enough reaction times to fit".to_owned());
    }

    // Fit an ex-Gaussian by the method of moments
    let params = timed("fit", || ExGauss::fit_moments(&rts));
    println!(
        "mu = {:.4}, sigma = {:.4}, lambda = {:.4}",
        params.mu, params.sigma, params.lambda
    );
    println!(
        "fitted mean = {:.4}, variance = {:.6}",
        params.mean(),
        params.variance()
    );

    // Draw a few simulated reaction times from the fitted distribution
    for i in 0..5 {
        println!("simulated rt {}: {:.4}", i + 1, params.sample()?);
    }

    // Two subjects' recall sequences in the shared group index space,
    // and the group lexicon
    let group_sequences = vec![vec![5, 5, 7], vec![7, 9]];
    let group_labels: HashMap<usize, &str> = HashMap::from([(5, "dog"), (7, "cat"), (9, "fox")]);

    // Remove perseverations (the repeated 5 in the first sequence)
    let cleaned: Vec<Vec<usize>> = if config.drop_perseverations {
        group_sequences
            .iter()
            .map(|sequence| drop_perseverations(sequence))
            .collect()
    } else {
        group_sequences.clone()
    };
    println!("cleaned sequences: {:?}", cleaned);

    // Translate into a compact per-subject index space
    let (local_sequences, local_labels) = to_local_space(&cleaned, &group_labels)?;
    println!("local sequences: {:?}", local_sequences);
    println!("local lexicon: {:?}", local_labels);

    // Back to labels, and the reverse lookup table
    let labeled = apply_labels(&local_sequences, &local_labels)?;
    println!("labeled: {:?}", labeled);
    println!("reverse lexicon: {:?}", reverse_labels(&local_labels));

    // N-gram windows over the first cleaned sequence
    for gram in ngrams(&cleaned[0], config.ngram_size) {
        println!("ngram: {:?}", gram);
    }

    // Some trials yield a burst of items, some a single item; flatten one
    // level before counting (flattened items come first, then singles)
    let bursts = vec![Entry::Seq(vec![5, 7]), Entry::Scalar(9), Entry::Seq(vec![7])];
    println!("flattened trials: {:?}", flatten_once(bursts));

    // Correlate two measures, e.g. recall position against reaction time
    let positions: Vec<f64> = (1..=rts.len()).map(|p| p as f64).collect();
    println!("r(position, rt) = {:.4}", pearson(&positions, &rts));

    Ok(())
}
