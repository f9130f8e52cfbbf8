use crate::driver;
use crate::expect;
use crate::registry::{CheckFixture, Sample};
use crate::sink::Collector;
use crate::verify;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, error, info};

/// Outcome of one check's verification: both protocols, pass or fail.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Run both verification protocols for every named check, in order.
///
/// Checks are independent; a failure in one never affects the others, so
/// the suite always runs to completion and reports per check.
pub fn run_suite(root: &Path, checks: &[&str]) -> Vec<CheckReport> {
    checks
        .iter()
        .map(|name| {
            info!("Verifying check '{}'", name);
            match run_check(root, name) {
                Ok(()) => {
                    debug!("Check '{}' passed", name);
                    CheckReport {
                        name: name.to_string(),
                        passed: true,
                        failure: None,
                    }
                }
                Err(err) => {
                    error!("Check '{}' failed: {:#}", name, err);
                    CheckReport {
                        name: name.to_string(),
                        passed: false,
                        failure: Some(format!("{err:#}")),
                    }
                }
            }
        })
        .collect()
}

/// Verify one check: the violating sample must reproduce the expectations
/// file exactly (order-independent), and the clean sample must produce
/// nothing at all. A fresh collector is constructed per run so no state
/// leaks between runs or checks.
pub fn run_check(root: &Path, name: &str) -> Result<()> {
    let fixture = CheckFixture::new(root, name);

    let mut collector = Collector::new();
    driver::run_sample(&fixture, Sample::Invalid, &mut collector)
        .with_context(|| format!("check '{name}': violating sample run failed"))?;
    let expected = expect::load(&fixture.expectations_path())
        .with_context(|| format!("check '{name}': broken expectations fixture"))?;
    verify::verify_violating(collector.events(), &expected, collector.summary())
        .with_context(|| format!("check '{name}': violating sample"))?;

    let mut collector = Collector::new();
    driver::run_sample(&fixture, Sample::Valid, &mut collector)
        .with_context(|| format!("check '{name}': clean sample run failed"))?;
    verify::verify_clean(&collector).with_context(|| format!("check '{name}': clean sample"))?;

    Ok(())
}
