//! Test harness for integration tests
//!
//! Provides:
//! - Named test cases with collected results and a summary
//! - Tolerance assertions for floating-point coordinates
//! - Deterministic random hardware words

use std::time::Instant;

/// Test result tracking
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub duration_us: u64,
    pub error_message: Option<String>,
}

/// Test harness for running integration tests
pub struct TestHarness {
    results: Vec<TestResult>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self { results: Vec::new() }
    }

    /// Run a single test case
    pub fn run_test<F>(&mut self, name: &str, test_fn: F)
    where
        F: FnOnce() -> Result<(), String>,
    {
        let start = Instant::now();
        let result = test_fn();

        self.results.push(TestResult {
            name: name.to_string(),
            passed: result.is_ok(),
            duration_us: start.elapsed().as_micros() as u64,
            error_message: result.err(),
        });
    }

    /// Run the same check over a list of parameters
    pub fn run_parameterized_test<T, F>(&mut self, name: &str, params: &[T], test_fn: F)
    where
        T: core::fmt::Debug,
        F: Fn(&T) -> Result<(), String>,
    {
        for (i, param) in params.iter().enumerate() {
            self.run_test(&format!("{}[{}]", name, i), || test_fn(param));
        }
    }

    /// Print test results summary
    pub fn print_summary(&self) {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.passed).count();

        println!("\nTest Results:");
        println!("============");
        println!("Total:  {}", total);
        println!("Passed: {}", passed);
        println!("Failed: {}", total - passed);

        for result in self.results.iter().filter(|r| !r.passed) {
            println!("  FAILED {}", result.name);
            if let Some(msg) = &result.error_message {
                println!("    Error: {}", msg);
            }
        }

        let slowest = self.results.iter().map(|r| r.duration_us).max().unwrap_or(0);
        println!("Slowest case: {} us", slowest);
    }

    /// Check if all tests passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform integer in `[min, max]`
    pub fn gen_range(&mut self, min: i32, max: i32) -> i32 {
        let span = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + (self.next_u32() as u64 % span) as i64) as i32
    }
}
