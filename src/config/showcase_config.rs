use crate::domain::model::{Employee, PermanentEmployee, SignupRequest};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Sample data for every demo. Any section left out of the TOML file falls
/// back to the built-in samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub srp: SrpConfig,
    #[serde(default)]
    pub ocp: OcpConfig,
    #[serde(default)]
    pub lsp: LspConfig,
    #[serde(default)]
    pub isp: IspConfig,
    #[serde(default)]
    pub dip: DipConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrpConfig {
    #[serde(default = "default_requests")]
    pub requests: Vec<SignupRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcpConfig {
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
    /// Country to city.
    #[serde(default = "default_directory")]
    pub directory: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LspConfig {
    #[serde(default = "default_employee")]
    pub employee: Employee,
    #[serde(default = "default_permanent")]
    pub permanent: PermanentEmployee,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IspConfig {
    #[serde(default = "default_values")]
    pub values: Vec<i64>,
    #[serde(default = "default_invoice_label")]
    pub invoice_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DipConfig {
    #[serde(default = "default_wheel_count")]
    pub wheel_count: u8,
    #[serde(default = "default_engine")]
    pub engine: String,
}

fn default_requests() -> Vec<SignupRequest> {
    vec![
        SignupRequest::new("Ada", "ada@example.com"),
        SignupRequest::new("Bob", "not-an-email"),
    ]
}

fn default_cities() -> Vec<String> {
    ["London", "Paris", "Tokyo"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_directory() -> BTreeMap<String, String> {
    [("England", "London"), ("France", "Paris"), ("Japan", "Tokyo")]
        .iter()
        .map(|(country, city)| (country.to_string(), city.to_string()))
        .collect()
}

fn default_employee() -> Employee {
    Employee {
        name: "Jane".to_string(),
        id: 1,
        department: "Engineering".to_string(),
        salary: 5000,
    }
}

fn default_permanent() -> PermanentEmployee {
    PermanentEmployee {
        employee: Employee {
            name: "John".to_string(),
            id: 2,
            department: "Finance".to_string(),
            salary: 6000,
        },
        designation: "Senior Accountant".to_string(),
        withholding_tax: 900,
    }
}

fn default_values() -> Vec<i64> {
    vec![12, 30, 8]
}

fn default_invoice_label() -> String {
    "Invoice #42".to_string()
}

fn default_wheel_count() -> u8 {
    4
}

fn default_engine() -> String {
    "V6".to_string()
}

impl Default for SrpConfig {
    fn default() -> Self {
        Self {
            requests: default_requests(),
        }
    }
}

impl Default for OcpConfig {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            directory: default_directory(),
        }
    }
}

impl Default for LspConfig {
    fn default() -> Self {
        Self {
            employee: default_employee(),
            permanent: default_permanent(),
        }
    }
}

impl Default for IspConfig {
    fn default() -> Self {
        Self {
            values: default_values(),
            invoice_label: default_invoice_label(),
        }
    }
}

impl Default for DipConfig {
    fn default() -> Self {
        Self {
            wheel_count: default_wheel_count(),
            engine: default_engine(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ShowcaseConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_collection("srp.requests", &self.srp.requests)?;
        for request in &self.srp.requests {
            validation::validate_non_empty_string("srp.requests.name", &request.name)?;
        }

        validation::validate_non_empty_collection("ocp.cities", &self.ocp.cities)?;
        if self.ocp.directory.is_empty() {
            return Err(DemoError::InvalidConfigValueError {
                field: "ocp.directory".to_string(),
                value: "{}".to_string(),
                reason: "At least one entry is required".to_string(),
            });
        }

        validation::validate_non_empty_string("lsp.employee.name", &self.lsp.employee.name)?;
        let permanent = &self.lsp.permanent;
        validation::validate_non_empty_string("lsp.permanent.name", &permanent.employee.name)?;
        validation::validate_at_most(
            "lsp.permanent.withholding_tax",
            permanent.withholding_tax,
            permanent.employee.salary,
        )?;

        validation::validate_non_empty_collection("isp.values", &self.isp.values)?;

        if self.dip.wheel_count == 0 {
            return Err(DemoError::InvalidConfigValueError {
                field: "dip.wheel_count".to_string(),
                value: "0".to_string(),
                reason: "A car needs at least one wheel".to_string(),
            });
        }
        validation::validate_non_empty_string("dip.engine", &self.dip.engine)?;

        Ok(())
    }
}
