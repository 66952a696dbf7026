//! Interface segregation: small capability traits instead of one that makes
//! every implementor provide everything.

use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Calculate, CalculatePrint, Console, Demo, Print};
use crate::utils::error::{DemoError, Result};

/// Flawed: only needs to add numbers, but `CalculatePrint` forces it to
/// have an opinion about printing too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumOnly {
    values: Vec<i64>,
}

impl SumOnly {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }
}

impl CalculatePrint for SumOnly {
    fn calculate(&self) -> i64 {
        self.values.iter().sum()
    }

    fn print(&self, _console: &dyn Console) -> Result<()> {
        Err(DemoError::Unsupported {
            implementor: "SumOnly".to_string(),
            capability: "print".to_string(),
        })
    }
}

/// Improved: implements `Calculate` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    values: Vec<i64>,
}

impl Sum {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }
}

impl Calculate for Sum {
    fn calculate(&self) -> i64 {
        self.values.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    label: String,
    amounts: Vec<i64>,
}

impl Invoice {
    pub fn new(label: impl Into<String>, amounts: Vec<i64>) -> Self {
        Self {
            label: label.into(),
            amounts,
        }
    }
}

impl Calculate for Invoice {
    fn calculate(&self) -> i64 {
        self.amounts.iter().sum()
    }
}

impl Print for Invoice {
    fn print(&self, console: &dyn Console) -> Result<()> {
        console.log(&format!("{}: {}", self.label, self.calculate()));
        Ok(())
    }
}

pub fn total<C: Calculate + ?Sized>(calculator: &C) -> i64 {
    calculator.calculate()
}

pub fn print_report<T: Calculate + Print + ?Sized>(document: &T, console: &dyn Console) -> Result<()> {
    document.print(console)
}

/// What a consumer of the monolithic trait has to do: call both and hope.
pub fn run_combined(subject: &dyn CalculatePrint, console: &dyn Console) -> Result<i64> {
    let value = subject.calculate();
    subject.print(console)?;
    Ok(value)
}

pub struct IspDemo {
    values: Vec<i64>,
    invoice_label: String,
}

impl IspDemo {
    pub fn new(values: Vec<i64>, invoice_label: impl Into<String>) -> Self {
        Self {
            values,
            invoice_label: invoice_label.into(),
        }
    }
}

impl Demo for IspDemo {
    fn principle(&self) -> Principle {
        Principle::Isp
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Flawed, Variant::Improved]
    }

    fn run(&self, variant: Variant, console: &dyn Console) -> Result<()> {
        match variant {
            Variant::Flawed => {
                let subject = SumOnly::new(self.values.clone());
                console.log(&format!("Sum: {}", subject.calculate()));
                if let Err(e) = run_combined(&subject, console) {
                    console.log(&format!("Forced capability failed: {}", e));
                }
            }
            Variant::Improved => {
                console.log(&format!("Sum: {}", total(&Sum::new(self.values.clone()))));
                print_report(
                    &Invoice::new(self.invoice_label.clone(), self.values.clone()),
                    console,
                )?;
            }
        }
        Ok(())
    }
}
