//! Scenario-driven validation of the scan pipeline.
//!
//! Scenarios are described as JSON (the same shape the CLI consumes for its
//! reports) and rendered to synthetic frames, so expected feature counts and
//! chain topology are known exactly.

use scanflow::{FeatureScanner, PixelBuffer, ScanConfig};
use serde::Deserialize;

const SCENARIOS_JSON: &str = r#"[
  {
    "name": "single_stripe",
    "width": 100,
    "height": 100,
    "background": 30,
    "stripes": [{ "x0": 40, "x1": 50, "value": 220 }],
    "spacing": 10.0,
    "bin_count": 50,
    "expected_points": 16,
    "expected_chains": 2
  },
  {
    "name": "two_stripes",
    "width": 200,
    "height": 100,
    "background": 30,
    "stripes": [
      { "x0": 40, "x1": 60, "value": 220 },
      { "x0": 130, "x1": 150, "value": 200 }
    ],
    "spacing": 10.0,
    "bin_count": 64,
    "expected_points": 32,
    "expected_chains": 4
  },
  {
    "name": "low_contrast_stripe_is_ignored",
    "width": 100,
    "height": 100,
    "background": 100,
    "stripes": [{ "x0": 40, "x1": 50, "value": 112 }],
    "spacing": 10.0,
    "bin_count": 50,
    "expected_points": 0,
    "expected_chains": 0
  },
  {
    "name": "coarse_spacing_shortens_chains",
    "width": 100,
    "height": 100,
    "background": 30,
    "stripes": [{ "x0": 40, "x1": 50, "value": 220 }],
    "spacing": 25.0,
    "bin_count": 50,
    "expected_points": 4,
    "expected_chains": 2
  }
]"#;

#[derive(Debug, Deserialize)]
struct Stripe {
    x0: usize,
    x1: usize,
    value: u8,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    width: usize,
    height: usize,
    background: u8,
    stripes: Vec<Stripe>,
    spacing: f32,
    bin_count: usize,
    expected_points: usize,
    expected_chains: usize,
}

fn render(scenario: &Scenario) -> PixelBuffer {
    let mut data = vec![scenario.background; scenario.width * scenario.height * 3];
    for stripe in &scenario.stripes {
        for y in 0..scenario.height {
            for x in stripe.x0..stripe.x1 {
                let idx = (y * scenario.width + x) * 3;
                data[idx..idx + 3].copy_from_slice(&[stripe.value; 3]);
            }
        }
    }
    PixelBuffer::from_vec(data, scenario.width, scenario.height).unwrap()
}

#[test]
fn scenarios_match_expected_topology() {
    let scenarios: Vec<Scenario> =
        serde_json::from_str(SCENARIOS_JSON).expect("scenarios parse");

    for scenario in &scenarios {
        let frame = render(scenario);
        let config = ScanConfig {
            spacing: scenario.spacing,
            bin_count: scenario.bin_count,
            ..ScanConfig::default()
        };

        let mut scanner = FeatureScanner::new();
        scanner.scan(&frame.view(), 0.0, &config).unwrap();
        let table = scanner.table().unwrap();

        assert_eq!(
            scanner.points().len(),
            scenario.expected_points,
            "{}: points",
            scenario.name
        );
        assert_eq!(
            table.chains().len(),
            scenario.expected_chains,
            "{}: chains",
            scenario.name
        );

        // Every stored link must be reachable from exactly one chain head.
        let reached: usize = table
            .chains()
            .iter()
            .map(|&head| table.chain(head).count())
            .sum();
        assert_eq!(reached, scanner.points().len(), "{}: coverage", scenario.name);
    }
}
