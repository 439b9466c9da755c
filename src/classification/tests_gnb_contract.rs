// =========================================================================
// FALSIFY-GNB: contract tests for the driving-intent Gaussian Naive Bayes
//
// Each test tries to break one promised property of fit/predict:
// exact population statistics, prior normalisation, likelihood-only
// scoring, first-maximum tie-break and NaN propagation for missing classes.
// =========================================================================

use super::*;

fn one_feature(values: &[f64]) -> Matrix<f64> {
    Matrix::from_vec(values.len(), 1, values.to_vec()).expect("n x 1")
}

/// FALSIFY-GNB-001: Priors sum to one when every label is present
#[test]
fn falsify_gnb_001_priors_normalised() {
    let x = one_feature(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let y = [
        Label::Left,
        Label::Keep,
        Label::Keep,
        Label::Right,
        Label::Right,
        Label::Right,
        Label::Right,
    ];
    let model = fit(&x, &y).expect("fit");

    let sum: f64 = model.priors().iter().sum();
    assert!((sum - 1.0).abs() < 1e-12, "FALSIFIED GNB-001: priors sum to {sum}");
    assert!((model.prior(Label::Right) - 4.0 / 7.0).abs() < 1e-12);
}

/// FALSIFY-GNB-002: Mean equals sum / count per class and feature
#[test]
fn falsify_gnb_002_mean_exact() {
    let x = Matrix::from_rows(&[
        [1.0, -4.0],
        [2.0, -2.0],
        [6.0, 9.0],
        [7.0, 11.0],
        [3.0, 0.5],
        [100.0, 0.5],
    ])
    .expect("6x2");
    let y = [
        Label::Left,
        Label::Left,
        Label::Keep,
        Label::Keep,
        Label::Keep,
        Label::Right,
    ];
    let model = fit(&x, &y).expect("fit");

    assert_eq!(model.means(Label::Left), &[1.5, -3.0]);
    assert!((model.mean(Label::Keep, 0) - 16.0 / 3.0).abs() < 1e-12);
    assert!((model.mean(Label::Keep, 1) - 20.5 / 3.0).abs() < 1e-12);
    assert_eq!(model.means(Label::Right), &[100.0, 0.5]);
}

/// FALSIFY-GNB-003: Standard deviation is the population (n) statistic, not n-1
#[test]
fn falsify_gnb_003_population_stdev() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let x = one_feature(&values);
    let y = [Label::Keep; 8];
    let model = fit(&x, &y).expect("fit");

    // Population stdev of this textbook set is exactly 2, sample stdev is ~2.138
    let sigma = model.stdev(Label::Keep, 0);
    assert!(
        (sigma - 2.0).abs() < 1e-12,
        "FALSIFIED GNB-003: stdev = {sigma}, expected population value 2"
    );
}

/// FALSIFY-GNB-004: Large offsets do not cancel catastrophically
#[test]
fn falsify_gnb_004_variance_stable_under_offset() {
    let offset = 1e9;
    let x = one_feature(&[offset + 4.0, offset + 7.0, offset + 13.0, offset + 16.0]);
    let y = [Label::Left; 4];
    let model = fit(&x, &y).expect("fit");

    // deviations -6, -3, 3, 6 → variance 22.5
    let sigma = model.stdev(Label::Left, 0);
    assert!(
        (sigma - 22.5_f64.sqrt()).abs() < 1e-6,
        "FALSIFIED GNB-004: stdev = {sigma}"
    );
}

/// FALSIFY-GNB-005: Reference scenario fits to exact parameters
#[test]
fn falsify_gnb_005_reference_fit() {
    let x = one_feature(&[0.0, 2.0, 10.0, 12.0, 20.0, 22.0]);
    let y = [
        Label::Left,
        Label::Left,
        Label::Keep,
        Label::Keep,
        Label::Right,
        Label::Right,
    ];
    let model = fit(&x, &y).expect("fit");

    assert_eq!(model.means(Label::Left), &[1.0]);
    assert_eq!(model.means(Label::Keep), &[11.0]);
    assert_eq!(model.means(Label::Right), &[21.0]);
    for label in Label::ALL {
        assert_eq!(model.stdevs(label), &[1.0]);
        assert!((model.prior(label) - 1.0 / 3.0).abs() < 1e-12);
    }

    assert_eq!(predict(&model, &[1.0], ScoringRule::Likelihood).expect("predict"), Label::Left);
    assert_eq!(predict(&model, &[11.0], ScoringRule::Likelihood).expect("predict"), Label::Keep);
    assert_eq!(predict(&model, &[21.0], ScoringRule::Likelihood).expect("predict"), Label::Right);
}

/// FALSIFY-GNB-006: Deterministic predictions
#[test]
fn falsify_gnb_006_deterministic() {
    let x = one_feature(&[0.0, 2.0, 10.0, 12.0, 20.0, 22.0]);
    let y = [
        Label::Left,
        Label::Left,
        Label::Keep,
        Label::Keep,
        Label::Right,
        Label::Right,
    ];
    let mut nb = GaussianNB::new();
    nb.fit(&x, &y).expect("fit");

    let queries = one_feature(&[-3.0, 5.0, 6.0, 15.5, 16.0, 40.0]);
    let p1 = nb.predict_batch(&queries).expect("predict 1");
    let p2 = nb.predict_batch(&queries).expect("predict 2");
    assert_eq!(p1, p2, "FALSIFIED GNB-006: predictions differ on same input");
}

/// FALSIFY-GNB-007: Identical scores resolve to the lowest-indexed label
#[test]
fn falsify_gnb_007_tie_breaks_to_first_label() {
    // Keep and Right share identical statistics, Left is far away.
    let x = one_feature(&[100.0, 102.0, 10.0, 12.0, 10.0, 12.0]);
    let y = [
        Label::Left,
        Label::Left,
        Label::Keep,
        Label::Keep,
        Label::Right,
        Label::Right,
    ];
    let model = fit(&x, &y).expect("fit");

    let scores = class_scores(&model, &[11.0], ScoringRule::Likelihood).expect("scores");
    assert_eq!(scores[Label::Keep.index()], scores[Label::Right.index()]);
    assert_eq!(
        predict(&model, &[11.0], ScoringRule::Likelihood).expect("predict"),
        Label::Keep,
        "FALSIFIED GNB-007: tie did not resolve to keep"
    );

    // Every score underflows to exactly 0.0, so all three tie.
    assert_eq!(
        predict(&model, &[1e6], ScoringRule::Likelihood).expect("predict"),
        Label::Left
    );
}

/// FALSIFY-GNB-008: A missing class has NaN statistics and never wins
#[test]
fn falsify_gnb_008_missing_class_never_predicted() {
    let x = one_feature(&[0.0, 2.0, 20.0, 22.0]);
    let y = [Label::Left, Label::Left, Label::Right, Label::Right];
    let model = fit(&x, &y).expect("fit");

    assert_eq!(model.count(Label::Keep), 0);
    assert_eq!(model.prior(Label::Keep), 0.0);
    assert!(model.mean(Label::Keep, 0).is_nan());
    assert!(model.stdev(Label::Keep, 0).is_nan());
    assert_eq!(model.missing_labels(), vec![Label::Keep]);

    for q in [-50.0, 0.0, 1.0, 10.0, 11.0, 12.0, 21.0, 500.0] {
        let label = predict(&model, &[q], ScoringRule::Likelihood).expect("predict");
        assert_ne!(label, Label::Keep, "FALSIFIED GNB-008: keep predicted for {q}");
    }
}

/// FALSIFY-GNB-009: Default scoring ignores priors
#[test]
fn falsify_gnb_009_likelihood_ignores_priors() {
    // Left is rare but its density at the query is higher.
    let x = one_feature(&[0.0, 2.0, 3.0, 5.0, 3.0, 5.0, 3.0, 5.0, 3.0, 5.0]);
    let y = [
        Label::Left,
        Label::Left,
        Label::Right,
        Label::Right,
        Label::Right,
        Label::Right,
        Label::Right,
        Label::Right,
        Label::Keep,
        Label::Keep,
    ];
    let model = fit(&x, &y).expect("fit");

    let likelihood = class_scores(&model, &[2.0], ScoringRule::Likelihood).expect("scores");
    let posterior = class_scores(&model, &[2.0], ScoringRule::Posterior).expect("scores");
    for label in Label::ALL {
        let expected = likelihood[label.index()] * model.prior(label);
        assert!((posterior[label.index()] - expected).abs() < 1e-15);
    }
    assert_eq!(argmax(&likelihood), Label::Left);
}

/// FALSIFY-GNB-010: Observations of the wrong arity are rejected
#[test]
fn falsify_gnb_010_arity_checked() {
    let x = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0], [5.0, 5.0]]).expect("3x2");
    let y = [Label::Left, Label::Keep, Label::Right];
    let model = fit(&x, &y).expect("fit");

    for sample in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
        assert!(
            predict(&model, sample, ScoringRule::Likelihood).is_err(),
            "FALSIFIED GNB-010: accepted {} features",
            sample.len()
        );
    }
}
