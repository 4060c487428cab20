//! Withholding (TDS) calculation.
//!
//! Withholding is a flat percentage of gross salary chosen solely by the
//! employee's country. India withholds 10%, the United States 12%, and every
//! other country nothing.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A tax jurisdiction recognised by the withholding rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jurisdiction {
    /// India, matched as "india" in any casing.
    India,
    /// The United States, matched as "usa", "us" or "united states".
    UnitedStates,
    /// Any country without a withholding rule.
    Untaxed,
}

impl Jurisdiction {
    /// Resolves a free-form country name to its jurisdiction.
    ///
    /// Matching ignores case. "United States" also matches with any run of
    /// whitespace (or none) between the two words. Leading and trailing
    /// whitespace is not ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::roster::Jurisdiction;
    ///
    /// assert_eq!(Jurisdiction::from_country("INDIA"), Jurisdiction::India);
    /// assert_eq!(Jurisdiction::from_country("UnitedStates"), Jurisdiction::UnitedStates);
    /// assert_eq!(Jurisdiction::from_country("Spain"), Jurisdiction::Untaxed);
    /// ```
    pub fn from_country(country: &str) -> Self {
        let lower = country.to_lowercase();
        if lower == "india" {
            Jurisdiction::India
        } else if lower == "usa" || lower == "us" || is_united_states(&lower) {
            Jurisdiction::UnitedStates
        } else {
            Jurisdiction::Untaxed
        }
    }

    /// The withholding rate as a fraction of gross salary.
    pub fn rate(self) -> Decimal {
        match self {
            Jurisdiction::India => Decimal::new(10, 2),
            Jurisdiction::UnitedStates => Decimal::new(12, 2),
            Jurisdiction::Untaxed => Decimal::ZERO,
        }
    }
}

fn is_united_states(lower: &str) -> bool {
    lower
        .strip_prefix("united")
        .is_some_and(|rest| rest.trim_start() == "states")
}

/// Withholding and net salary for one gross amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withholding {
    /// Amount withheld.
    pub withheld: Decimal,
    /// Gross minus withheld.
    pub net: Decimal,
}

/// Computes withholding and net salary for a gross salary and country.
///
/// The results are exact and unrounded. Negative gross values are not
/// rejected here; validate before calling.
///
/// # Examples
///
/// ```
/// use roster_engine::roster::compute_net;
/// use rust_decimal::Decimal;
///
/// let result = compute_net(Decimal::new(1000, 0), "USA");
/// assert_eq!(result.withheld, Decimal::new(120, 0));
/// assert_eq!(result.net, Decimal::new(880, 0));
/// ```
pub fn compute_net(gross: Decimal, country: &str) -> Withholding {
    let withheld = gross * Jurisdiction::from_country(country).rate();
    Withholding {
        withheld,
        net: gross - withheld,
    }
}

/// A salary breakdown formatted for textual reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Gross salary, two decimal places.
    pub gross: String,
    /// Amount withheld, two decimal places.
    pub tds: String,
    /// Net salary, two decimal places.
    pub net: String,
}

/// Computes withholding like [`compute_net`], with every amount fixed to
/// exactly two decimal places.
///
/// # Examples
///
/// ```
/// use roster_engine::roster::salary_breakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = salary_breakdown(Decimal::new(1000, 0), "India");
/// assert_eq!(breakdown.gross, "1000.00");
/// assert_eq!(breakdown.tds, "100.00");
/// assert_eq!(breakdown.net, "900.00");
/// ```
pub fn salary_breakdown(gross: Decimal, country: &str) -> SalaryBreakdown {
    let Withholding { withheld, net } = compute_net(gross, country);
    SalaryBreakdown {
        gross: to_fixed_2(gross),
        tds: to_fixed_2(withheld),
        net: to_fixed_2(net),
    }
}

/// Rounds half away from zero to two places and always prints both places.
fn to_fixed_2(value: Decimal) -> String {
    to_cents(value).to_string()
}

/// Rounds a money amount to two places and fixes its scale at two, so
/// whole amounts keep their trailing zeros.
pub(crate) fn to_cents(value: Decimal) -> Decimal {
    let mut rounded = round_money(value);
    rounded.rescale(2);
    rounded
}

/// Rounds a money amount half away from zero to two decimal places.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
