//! Pre-built event scenarios for integration testing
//!
//! Each scenario is a hardware input window plus the jet LSB it is converted
//! with, and the jet counts it must produce.

use stage2jet_core::{BxCollection, HardwareJet};

use super::harness::TestRng;

/// Expected product sizes
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ExpectedOutcomes {
    pub jets: usize,
    pub central: usize,
    pub forward: usize,
}

/// Complete scenario with input and expectations
pub struct TestScenario {
    pub name: &'static str,
    pub input: BxCollection<HardwareJet>,
    pub jet_lsb: f64,
    pub expected: ExpectedOutcomes,
}

/// Pre-built scenario definitions
pub struct Scenarios;

impl Scenarios {
    /// Single central jet in crossing 0
    pub fn single_central() -> TestScenario {
        TestScenario {
            name: "single_central",
            input: event(0, 0, &[(0, HardwareJet::new(10, 5, 10, 0))]),
            jet_lsb: 0.5,
            expected: ExpectedOutcomes { jets: 1, central: 1, forward: 0 },
        }
    }

    /// Single jet in the outermost HF tower
    pub fn single_forward() -> TestScenario {
        TestScenario {
            name: "single_forward",
            input: event(0, 0, &[(0, HardwareJet::new(4, 32, 1, 0))]),
            jet_lsb: 1.0,
            expected: ExpectedOutcomes { jets: 1, central: 0, forward: 1 },
        }
    }

    /// Window [-1, 1] with nothing in crossing -1
    pub fn sparse_window() -> TestScenario {
        TestScenario {
            name: "sparse_window",
            input: event(-1, 1, &[
                (0, HardwareJet::new(10, 5, 10, 0)),
                (1, HardwareJet::new(4, 32, 1, 0)),
            ]),
            jet_lsb: 0.5,
            expected: ExpectedOutcomes { jets: 2, central: 1, forward: 1 },
        }
    }

    /// One jet per tower on both sides, at the triggered crossing
    pub fn full_eta_scan() -> TestScenario {
        let jets: Vec<_> = (-32..=32)
            .filter(|hw_eta| *hw_eta != 0)
            .map(|hw_eta| (0, HardwareJet::new(20, hw_eta, 36, 1)))
            .collect();
        TestScenario {
            name: "full_eta_scan",
            input: event(0, 0, &jets),
            jet_lsb: 0.5,
            // Towers 29 - 32 on each side are HF
            expected: ExpectedOutcomes { jets: 64, central: 56, forward: 8 },
        }
    }

    /// Standard five-crossing readout with random in-range jets
    pub fn random_readout(seed: u32) -> BxCollection<HardwareJet> {
        let mut rng = TestRng::new(seed);
        let mut input = BxCollection::with_range(-2, 2).expect("valid range");
        for bx in -2..=2 {
            for _ in 0..rng.gen_range(0, 12) {
                let hw_eta = loop {
                    let candidate = rng.gen_range(-32, 32);
                    if candidate != 0 {
                        break candidate;
                    }
                };
                let jet = HardwareJet::new(
                    rng.gen_range(0, 2047),
                    hw_eta,
                    rng.gen_range(1, 72),
                    rng.gen_range(0, 3),
                );
                input.push(bx, jet).expect("bx inside range");
            }
        }
        input
    }

    pub fn all_scenarios() -> Vec<TestScenario> {
        vec![
            Self::single_central(),
            Self::single_forward(),
            Self::sparse_window(),
            Self::full_eta_scan(),
        ]
    }
}

/// Build an input window from `(bx, jet)` pairs
pub fn event(first: i32, last: i32, jets: &[(i32, HardwareJet)]) -> BxCollection<HardwareJet> {
    let mut input = BxCollection::with_range(first, last).expect("valid range");
    for (bx, jet) in jets {
        input.push(*bx, *jet).expect("bx inside range");
    }
    input
}
