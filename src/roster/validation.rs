//! Employee record validation.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{EmployeeDraft, NewEmployee};

use super::withholding::to_cents;

/// The largest salary a record may carry: one trillion.
pub const MAX_SALARY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Validates a candidate employee record.
///
/// Checks run in a fixed order and stop at the first failure: full name,
/// job title, country, then salary. Text fields must be non-empty after
/// trimming; salary must be present, strictly positive once rounded to
/// cents, and no larger than [`MAX_SALARY`]. Accepted text is kept as given,
/// without trimming; the accepted salary is the rounded amount.
///
/// # Examples
///
/// ```
/// use roster_engine::error::ValidationError;
/// use roster_engine::models::EmployeeDraft;
/// use roster_engine::roster::validate_employee;
/// use rust_decimal::Decimal;
///
/// let draft = EmployeeDraft {
///     full_name: "".to_string(),
///     job_title: "Engineer".to_string(),
///     country: "".to_string(),
///     salary: Some(Decimal::new(50000, 0)),
/// };
/// assert_eq!(validate_employee(&draft), Err(ValidationError::MissingFullName));
/// ```
pub fn validate_employee(draft: &EmployeeDraft) -> Result<NewEmployee, ValidationError> {
    if draft.full_name.trim().is_empty() {
        return Err(ValidationError::MissingFullName);
    }
    if draft.job_title.trim().is_empty() {
        return Err(ValidationError::MissingJobTitle);
    }
    if draft.country.trim().is_empty() {
        return Err(ValidationError::MissingCountry);
    }
    let salary = match draft.salary.map(to_cents) {
        Some(salary) if salary > Decimal::ZERO => salary,
        _ => return Err(ValidationError::InvalidSalary),
    };
    if salary > MAX_SALARY {
        return Err(ValidationError::SalaryTooLarge);
    }

    Ok(NewEmployee {
        full_name: draft.full_name.clone(),
        job_title: draft.job_title.clone(),
        country: draft.country.clone(),
        salary,
    })
}
