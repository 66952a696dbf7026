use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub id: u32,
    pub department: String,
    pub salary: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    pub designation: String,
    pub withholding_tax: u64,
}

/// Salary as reported by `Staff::salary_details`.
///
/// `Basic` is the shape the base contract promises. `Withheld` is what the
/// permanent-employee override returns instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SalaryDetails {
    Basic {
        salary: u64,
    },
    Withheld {
        salary: u64,
        withholding_tax: u64,
        take_home: u64,
    },
}

impl SalaryDetails {
    pub fn shape(&self) -> &'static str {
        match self {
            SalaryDetails::Basic { .. } => "basic",
            SalaryDetails::Withheld { .. } => "withheld",
        }
    }
}

impl fmt::Display for SalaryDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryDetails::Basic { salary } => write!(f, "salary {}", salary),
            SalaryDetails::Withheld {
                salary,
                withholding_tax,
                take_home,
            } => write!(
                f,
                "salary {}, withholding tax {}, take-home {}",
                salary, withholding_tax, take_home
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility",
            Principle::Ocp => "Open/Closed",
            Principle::Lsp => "Substitutability",
            Principle::Isp => "Interface Segregation",
            Principle::Dip => "Dependency Inversion",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        };
        f.write_str(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Flawed,
    Improved,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Flawed => f.write_str("flawed"),
            Variant::Improved => f.write_str("improved"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub principle: Principle,
    pub variant: Variant,
    pub line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn lines_for(&self, principle: Principle, variant: Variant) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.principle == principle && e.variant == variant)
            .map(|e| e.line.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
