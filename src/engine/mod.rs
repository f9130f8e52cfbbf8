pub mod checks;
pub mod config;

use crate::driver::Analyzer;
use crate::sink::FindingListener;
use crate::violation::{ConfigFailure, ProcessingFailure, RawFinding, RuleFinding};
use checks::{
    Check, EmptyLinesCheck, FinalNewlineCheck, LineLengthCheck, TabCharacterCheck,
    TrailingWhitespaceCheck,
};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// The built-in line-oriented style analyzer.
///
/// Built fresh from a configuration document for every run. Failures inside
/// a run are emitted as findings, never as errors: an unreadable file
/// becomes a processing finding, a configuration issue (unknown module,
/// malformed property value) becomes a configuration finding.
pub struct StyleEngine {
    checks: Vec<Box<dyn Check>>,
    config_issues: Vec<String>,
}

impl StyleEngine {
    /// Build an engine from a `config.xml` document. A document that does
    /// not parse at all is a fatal configuration load failure.
    pub fn from_config(xml: &str) -> Result<Self, quick_xml::DeError> {
        let parsed = config::parse(xml)?;
        let mut checks: Vec<Box<dyn Check>> = Vec::new();
        let mut config_issues = Vec::new();
        for module in &parsed.modules {
            match module.name.as_str() {
                "EmptyLinesCheck" => checks.push(Box::new(EmptyLinesCheck)),
                "TrailingWhitespaceCheck" => checks.push(Box::new(TrailingWhitespaceCheck)),
                "TabCharacterCheck" => checks.push(Box::new(TabCharacterCheck)),
                "FinalNewlineCheck" => checks.push(Box::new(FinalNewlineCheck)),
                "LineLengthCheck" => match module.property("max") {
                    None => checks.push(Box::new(LineLengthCheck::default())),
                    Some(raw) => match raw.parse() {
                        Ok(max) => checks.push(Box::new(LineLengthCheck::new(max))),
                        Err(_) => config_issues.push(format!(
                            "Invalid value for property 'max' of LineLengthCheck: {raw}"
                        )),
                    },
                },
                other => config_issues.push(format!("Unknown module: {other}")),
            }
        }
        debug!(
            "Configured style engine with {} checks, {} config issues",
            checks.len(),
            config_issues.len()
        );
        Ok(Self {
            checks,
            config_issues,
        })
    }
}

impl Analyzer for StyleEngine {
    fn process(&mut self, files: &[PathBuf], listener: &mut dyn FindingListener) {
        for issue in &self.config_issues {
            listener.on_finding(RawFinding::Config(ConfigFailure {
                issue: issue.clone(),
            }));
        }
        for file in files {
            let name = file.display().to_string();
            match fs::read_to_string(file) {
                Ok(source) => {
                    for check in &self.checks {
                        for hit in check.scan(&source) {
                            listener.on_finding(RawFinding::Rule(RuleFinding {
                                rule: check.name().to_string(),
                                file: name.clone(),
                                begin_line: hit.begin_line,
                                end_line: hit.end_line,
                                description: hit.message,
                            }));
                        }
                    }
                }
                Err(err) => listener.on_finding(RawFinding::Processing(ProcessingFailure {
                    file: name.clone(),
                    message: format!("Cannot read {name}"),
                    detail: format!(": {err}"),
                })),
            }
        }
    }
}

impl Drop for StyleEngine {
    fn drop(&mut self) {
        // Loaded rule set is released with the engine at the end of each
        // run, on success and failure paths alike.
        debug!("Releasing style engine with {} checks", self.checks.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Collector;

    fn write_sample(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_emits_rule_findings_for_configured_checks() {
        let dir = tempfile::tempdir().unwrap();
        let sample = write_sample(&dir, "Invalid.java", "int a;\t\nint b;\n\n\nint c;\n");
        let mut engine = StyleEngine::from_config(
            r#"<checks>
                <module name="TabCharacterCheck"/>
                <module name="EmptyLinesCheck"/>
            </checks>"#,
        )
        .unwrap();

        let mut collector = Collector::new();
        engine.process(std::slice::from_ref(&sample), &mut collector);

        let mut found: Vec<_> = collector
            .events()
            .iter()
            .map(|v| (v.category().to_string(), v.line().unwrap()))
            .collect();
        found.sort();
        assert_eq!(
            found,
            vec![
                ("EmptyLinesCheck".to_string(), 4),
                ("TabCharacterCheck".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_unconfigured_checks_stay_silent() {
        let dir = tempfile::tempdir().unwrap();
        let sample = write_sample(&dir, "Invalid.java", "int a;\t\n\n\n");
        let mut engine =
            StyleEngine::from_config(r#"<checks><module name="TabCharacterCheck"/></checks>"#)
                .unwrap();

        let mut collector = Collector::new();
        engine.process(std::slice::from_ref(&sample), &mut collector);
        assert_eq!(collector.events().len(), 1);
        assert_eq!(collector.events()[0].category(), "TabCharacterCheck");
    }

    #[test]
    fn test_unknown_module_becomes_config_finding() {
        let dir = tempfile::tempdir().unwrap();
        let sample = write_sample(&dir, "Valid.java", "clean\n");
        let mut engine =
            StyleEngine::from_config(r#"<checks><module name="NoSuchCheck"/></checks>"#).unwrap();

        let mut collector = Collector::new();
        engine.process(std::slice::from_ref(&sample), &mut collector);
        assert_eq!(collector.events().len(), 1);
        let finding = &collector.events()[0];
        assert_eq!(finding.category(), "ProcessingError");
        assert_eq!(finding.subject(), "unknown");
        assert_eq!(finding.location(), "unknown");
        assert_eq!(finding.description(), "Unknown module: NoSuchCheck");
    }

    #[test]
    fn test_bad_property_value_becomes_config_finding() {
        let dir = tempfile::tempdir().unwrap();
        let sample = write_sample(&dir, "Valid.java", "clean\n");
        let mut engine = StyleEngine::from_config(
            r#"<checks>
                <module name="LineLengthCheck">
                    <property name="max" value="lots"/>
                </module>
            </checks>"#,
        )
        .unwrap();

        let mut collector = Collector::new();
        engine.process(std::slice::from_ref(&sample), &mut collector);
        assert_eq!(collector.events().len(), 1);
        assert_eq!(
            collector.events()[0].description(),
            "Invalid value for property 'max' of LineLengthCheck: lots"
        );
    }

    #[test]
    fn test_unreadable_file_becomes_processing_finding() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Missing.java");
        let mut engine =
            StyleEngine::from_config(r#"<checks><module name="TabCharacterCheck"/></checks>"#)
                .unwrap();

        let mut collector = Collector::new();
        engine.process(std::slice::from_ref(&missing), &mut collector);
        assert_eq!(collector.events().len(), 1);
        let finding = &collector.events()[0];
        assert_eq!(finding.category(), "ProcessingError");
        assert_eq!(finding.location(), "unknown");
        assert!(finding.description().starts_with("Cannot read "));
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        assert!(StyleEngine::from_config("<checks><module").is_err());
    }
}
