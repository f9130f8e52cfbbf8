use serde::Deserialize;

/// Root of a `config.xml` analyzer configuration:
/// `<checks><module name="..."><property name="..." value="..."/></module></checks>`.
#[derive(Debug, Deserialize)]
pub struct ChecksConfig {
    #[serde(rename = "module", default)]
    pub modules: Vec<ModuleConfig>,
}

/// One enabled check module.
#[derive(Debug, Deserialize)]
pub struct ModuleConfig {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "property", default)]
    pub properties: Vec<PropertyConfig>,
}

/// A module property as a raw name/value pair. Interpretation is up to the
/// check the property belongs to.
#[derive(Debug, Deserialize)]
pub struct PropertyConfig {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

impl ModuleConfig {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .map(|property| property.value.as_str())
    }
}

/// Parse a configuration document. A document that is not well-formed XML
/// is a configuration load failure, fatal to the check it belongs to.
pub fn parse(xml: &str) -> Result<ChecksConfig, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}
