//! Substitutability, shown by breaking it.
//!
//! `PermanentEmployee` stands in wherever a `Staff` is expected, but its
//! `salary_details` answers with a different shape than the base contract
//! promises. Code written against `Staff` stops working once a permanent
//! employee shows up. There is deliberately no corrected version here.

use crate::domain::model::{Employee, PermanentEmployee, Principle, SalaryDetails, Variant};
use crate::domain::ports::{Console, Demo, Staff};
use crate::utils::error::{DemoError, Result};

impl Staff for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn salary_details(&self) -> SalaryDetails {
        SalaryDetails::Basic {
            salary: self.salary,
        }
    }
}

impl Staff for PermanentEmployee {
    fn name(&self) -> &str {
        self.employee.name()
    }

    fn id(&self) -> u32 {
        self.employee.id()
    }

    fn department(&self) -> &str {
        self.employee.department()
    }

    // Violates the base contract: reports a withheld breakdown instead of a basic salary.
    fn salary_details(&self) -> SalaryDetails {
        SalaryDetails::Withheld {
            salary: self.employee.salary,
            withholding_tax: self.withholding_tax,
            take_home: self.employee.salary.saturating_sub(self.withholding_tax),
        }
    }
}

/// Sums basic salaries. Written against the `Staff` contract only.
pub fn payroll_total(staff: &[&dyn Staff]) -> Result<u64> {
    staff.iter().try_fold(0u64, |total, member| match member.salary_details() {
        SalaryDetails::Basic { salary } => {
            total
                .checked_add(salary)
                .ok_or_else(|| DemoError::InvalidConfigValueError {
                    field: "salary".to_string(),
                    value: salary.to_string(),
                    reason: format!("payroll total overflows after {}", member.name()),
                })
        }
        other => Err(DemoError::ContractViolation {
            subject: member.name().to_string(),
            expected: "basic".to_string(),
            found: other.shape().to_string(),
        }),
    })
}

pub fn describe_salary(member: &dyn Staff, console: &dyn Console) {
    console.log(&format!(
        "{} (#{}, {}): {}",
        member.name(),
        member.id(),
        member.department(),
        member.salary_details()
    ));
}

pub struct LspDemo {
    employee: Employee,
    permanent: PermanentEmployee,
}

impl LspDemo {
    pub fn new(employee: Employee, permanent: PermanentEmployee) -> Self {
        Self {
            employee,
            permanent,
        }
    }
}

impl Demo for LspDemo {
    fn principle(&self) -> Principle {
        Principle::Lsp
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Flawed]
    }

    fn run(&self, _variant: Variant, console: &dyn Console) -> Result<()> {
        let staff: [&dyn Staff; 2] = [&self.employee, &self.permanent];
        for member in staff {
            describe_salary(member, console);
        }

        match payroll_total(&staff) {
            Ok(total) => console.log(&format!("Payroll total: {}", total)),
            Err(e) => {
                tracing::debug!("payroll rejected: {}", e);
                console.log(&format!("Payroll aborted: {}", e));
            }
        }
        Ok(())
    }
}
