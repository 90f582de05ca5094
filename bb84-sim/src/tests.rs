use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::intercept_resend::InterceptResendTrial;
use crate::params::{Protocol, SimulationParameters};
use crate::simulation::run_seeded;
use crate::statistics::binomial_std;
use crate::trial::Trial;

fn params(protocol: Protocol, n: usize, runs: usize) -> SimulationParameters {
    SimulationParameters::for_protocol(protocol, n, runs).unwrap()
}

#[test]
fn test_basis_agreement_converges_to_one_half() {
    let report = run_seeded(
        Protocol::BasisAgreement,
        params(Protocol::BasisAgreement, 100, 1000),
        2025,
    )
    .unwrap();
    let stats = report.summary;

    println!(
        "agreement: mean={:.4} std={:.5} theory={:.5} sigma={:.3}",
        stats.empirical_mean, stats.empirical_std, stats.theoretical_std, stats.significance
    );

    assert_eq!(report.samples.len(), 1000);
    assert!(
        stats.empirical_mean >= 0.45 && stats.empirical_mean <= 0.55,
        "Mean agreement rate {} outside [0.45, 0.55]",
        stats.empirical_mean
    );
    assert!((stats.theoretical_std - 0.05).abs() < 1e-12);
    assert!(stats.significance < 4.0);
}

#[test]
fn test_basis_agreement_large_n() {
    let report = run_seeded(
        Protocol::BasisAgreement,
        params(Protocol::BasisAgreement, 10_000, 200),
        31,
    )
    .unwrap();
    assert!(
        report.summary.significance < 4.0,
        "significance {} too large",
        report.summary.significance
    );
    // Per-run spread should match the binomial prediction
    let ratio = report.summary.empirical_std / report.summary.theoretical_std;
    assert!(ratio > 0.7 && ratio < 1.3, "std ratio {}", ratio);
}

#[test]
fn test_intercept_resend_converges_to_one_quarter() {
    let report = run_seeded(
        Protocol::InterceptResend,
        params(Protocol::InterceptResend, 1000, 1000),
        7,
    )
    .unwrap();
    let stats = report.summary;

    assert_eq!(report.excluded_runs(), 0);
    assert!(
        stats.empirical_mean >= 0.20 && stats.empirical_mean <= 0.30,
        "Mean error rate {} outside [0.20, 0.30]",
        stats.empirical_mean
    );
    assert!((stats.theoretical_std - 0.0137).abs() < 1e-4);
    assert!(stats.is_consistent(4.0));
}

#[test]
fn test_intercept_resend_sifted_sizes_rederived() {
    let mut rng = StdRng::seed_from_u64(100);
    let mut rates = Vec::new();
    for _ in 0..1000 {
        let transcript = InterceptResendTrial.generate(100, &mut rng);
        let matching = transcript
            .alice_bases
            .iter()
            .zip(transcript.bob_bases.iter())
            .filter(|(a, b)| a == b)
            .count();
        let sample = InterceptResendTrial
            .sample(&transcript)
            .expect("100 positions leave a sifted key");
        assert_eq!(sample.compared, matching);
        rates.push(sample.rate);
    }
    let mean = rates.iter().sum::<f64>() / rates.len() as f64;
    assert!((mean - 0.25).abs() < 0.02, "mean error rate {}", mean);
}

#[test]
fn test_fixed_basis_converges_to_one_quarter() {
    let report = run_seeded(
        Protocol::FixedBasis,
        params(Protocol::FixedBasis, 100, 1000),
        55,
    )
    .unwrap();
    let stats = report.summary;

    assert_eq!(report.samples.len(), 1000);
    assert_eq!(report.excluded_runs(), 0);
    assert!(
        (stats.empirical_mean - 0.25).abs() < 0.02,
        "mean error rate {}",
        stats.empirical_mean
    );
    assert_eq!(stats.theoretical_std, binomial_std(0.25, 100));
    assert!(stats.significance < 4.0);
}

#[test]
fn test_single_bit_intercept_resend_excludes_empty_sifts() {
    let report = run_seeded(
        Protocol::InterceptResend,
        params(Protocol::InterceptResend, 1, 1000),
        3,
    )
    .unwrap();
    let kept = report.samples.len();

    assert!(kept < 1000);
    assert_eq!(kept + report.excluded_runs(), 1000);
    assert!(
        report.excluded_runs() > 400 && report.excluded_runs() < 600,
        "expected about half excluded, got {}",
        report.excluded_runs()
    );
    // Excluded runs never show up as placeholder values
    assert!(report
        .samples
        .rates()
        .iter()
        .all(|&r| r == 0.0 || r == 1.0));
}

#[test]
fn test_all_rates_in_unit_interval() {
    for protocol in Protocol::ALL {
        for n in [1, 3, 64] {
            let report = run_seeded(protocol, params(protocol, n, 200), n as u64).unwrap();
            assert!(report
                .samples
                .rates()
                .iter()
                .all(|r| (0.0..=1.0).contains(r)));
            assert!(report.summary.empirical_mean.is_finite());
            assert!(report.summary.significance.is_finite());
        }
    }
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_seeded(
        Protocol::FixedBasis,
        params(Protocol::FixedBasis, 10, 5),
        1,
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["protocol"], "fixed-basis");
    assert_eq!(json["parameters"]["n"], 10);
    assert_eq!(json["samples"]["rates"].as_array().unwrap().len(), 5);
    assert!(json["summary"]["significance"].is_number());
}
