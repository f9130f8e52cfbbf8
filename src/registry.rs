use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Full ordered list of registered checks. Each name resolves to a fixture
/// directory bundle under the fixture root.
pub const CHECKS: &[&str] = &[
    "EmptyLinesCheck",
    "TrailingWhitespaceCheck",
    "TabCharacterCheck",
    "LineLengthCheck",
    "FinalNewlineCheck",
];

/// Which sample of a fixture bundle to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// The sample expected to trigger findings.
    Invalid,
    /// The sample expected to trigger none.
    Valid,
}

impl Sample {
    fn stem(self) -> &'static str {
        match self {
            Sample::Invalid => "Invalid",
            Sample::Valid => "Valid",
        }
    }
}

/// One check's fixture bundle: configuration, samples, and expectations,
/// all living in a directory named after the check.
#[derive(Debug, Clone)]
pub struct CheckFixture {
    name: String,
    dir: PathBuf,
}

impl CheckFixture {
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            dir: root.join(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.xml")
    }

    pub fn expectations_path(&self) -> PathBuf {
        self.dir.join("violations.txt")
    }

    /// Locate the sample file by stem, any extension (`Invalid.*`).
    pub fn sample_path(&self, sample: Sample) -> Result<PathBuf> {
        let globset = sample_globset(sample.stem())?;
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read fixture directory {}", self.dir.display()))?;
        for entry in entries {
            let entry = entry?;
            if let Some(file_name) = entry.file_name().to_str() {
                if globset.is_match(file_name) {
                    return Ok(entry.path());
                }
            }
        }
        bail!(
            "fixture '{}' has no {}.* sample in {}",
            self.name,
            sample.stem(),
            self.dir.display()
        );
    }
}

fn sample_globset(stem: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new(&format!("{stem}.*"))?);
    Ok(builder.build()?)
}
