//! Salary aggregation by country and job title.
//!
//! Groups are keyed on the exact stored string, so "India" and "india" are
//! separate groups. Averages are rounded to two decimal places. Salary
//! totals are summed with checked arithmetic; a total that cannot be
//! represented fails the whole computation with
//! [`EngineError::SalaryOverflow`].

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CountryMetrics, Employee, JobTitleMetrics};

use super::withholding::round_money;

#[derive(Debug, Clone, Copy)]
struct SalaryStats {
    count: usize,
    sum: Decimal,
    min: Decimal,
    max: Decimal,
}

impl SalaryStats {
    fn new(salary: Decimal) -> Self {
        Self {
            count: 1,
            sum: salary,
            min: salary,
            max: salary,
        }
    }

    fn add(&mut self, group: &str, salary: Decimal) -> EngineResult<()> {
        self.sum = self
            .sum
            .checked_add(salary)
            .ok_or_else(|| EngineError::SalaryOverflow {
                group: group.to_string(),
            })?;
        self.count += 1;
        self.min = self.min.min(salary);
        self.max = self.max.max(salary);
        Ok(())
    }

    fn average(&self) -> Decimal {
        self.sum / Decimal::from(self.count)
    }
}

/// Groups records by a key, keeping groups in order of first appearance.
fn group_by<'a>(
    records: &'a [Employee],
    key: impl Fn(&'a Employee) -> &'a str,
) -> EngineResult<Vec<(&'a str, SalaryStats)>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, SalaryStats)> = Vec::new();

    for record in records {
        let name = key(record);
        match index.get(name) {
            Some(&i) => groups[i].1.add(name, record.salary)?,
            None => {
                index.insert(name, groups.len());
                groups.push((name, SalaryStats::new(record.salary)));
            }
        }
    }

    Ok(groups)
}

/// Computes salary statistics per country.
///
/// Groups are ordered alphabetically by country name, ignoring case; names
/// differing only in case are ordered by their exact bytes.
///
/// # Examples
///
/// ```
/// use roster_engine::models::Employee;
/// use roster_engine::roster::metrics_by_country;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let records = vec![Employee {
///     id: 1,
///     full_name: "Asha Rao".to_string(),
///     job_title: "Engineer".to_string(),
///     country: "India".to_string(),
///     salary: Decimal::new(40000, 0),
///     created_at: Utc::now(),
/// }];
///
/// let metrics = metrics_by_country(&records).unwrap();
/// assert_eq!(metrics[0].min_salary, metrics[0].max_salary);
/// assert_eq!(metrics[0].avg_salary, Decimal::new(40000, 0));
/// ```
pub fn metrics_by_country(records: &[Employee]) -> EngineResult<Vec<CountryMetrics>> {
    let mut metrics: Vec<CountryMetrics> = group_by(records, |e| e.country.as_str())?
        .into_iter()
        .map(|(country, stats)| CountryMetrics {
            country: country.to_string(),
            employee_count: stats.count,
            min_salary: stats.min,
            max_salary: stats.max,
            avg_salary: round_money(stats.average()),
        })
        .collect();

    metrics.sort_by(|a, b| {
        a.country
            .to_lowercase()
            .cmp(&b.country.to_lowercase())
            .then_with(|| a.country.cmp(&b.country))
    });
    Ok(metrics)
}

/// Computes average salary per job title, highest-paid title first.
///
/// Titles with the same average keep the order in which they first appear
/// in `records`.
pub fn metrics_by_job_title(records: &[Employee]) -> EngineResult<Vec<JobTitleMetrics>> {
    let mut groups = group_by(records, |e| e.job_title.as_str())?;
    groups.sort_by(|(_, a), (_, b)| b.average().cmp(&a.average()));

    Ok(groups
        .into_iter()
        .map(|(job_title, stats)| JobTitleMetrics {
            job_title: job_title.to_string(),
            employee_count: stats.count,
            avg_salary: round_money(stats.average()),
        })
        .collect())
}
