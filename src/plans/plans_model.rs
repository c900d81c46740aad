use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::plans_errors::PlanError;
use crate::constants::DEFAULT_TARGET_UNITS;

/// The user's goal definition. Created once, immutable afterwards; a reset
/// is the only way to replace it.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub target_units: Decimal,
    pub duration_days: i64,
    pub started_at: DateTime<Utc>,
    pub fixed_end_mode: bool,
    pub fixed_end_date: Option<NaiveDate>,
}

/// User input for creating a plan.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewPlan {
    /// Custom goal size; absent means the standard goal of
    /// `DEFAULT_TARGET_UNITS`.
    pub target_units: Option<Decimal>,
    /// User-entered day count; ignored when `fixed_end_mode` is set.
    pub duration_days: Option<i64>,
    pub fixed_end_mode: bool,
    pub fixed_end_date: Option<NaiveDate>,
}

impl NewPlan {
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.fixed_end_mode {
            if self.fixed_end_date.is_none() {
                return Err(PlanError::MissingEndDate);
            }
        } else {
            match self.duration_days {
                Some(days) if days >= 1 => {}
                _ => return Err(PlanError::InvalidDayCount),
            }
        }

        if let Some(target) = self.target_units {
            if target <= Decimal::ZERO {
                return Err(PlanError::InvalidTargetUnits);
            }
        }

        Ok(())
    }
}

impl Plan {
    /// Builds a plan from validated user input, anchored at the given
    /// instant. In fixed end mode the day count is derived from the end
    /// date instead of taken from the input, and never drops below one day.
    pub fn from_new(
        new_plan: NewPlan,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<Plan, PlanError> {
        new_plan.validate()?;

        let duration_days = if new_plan.fixed_end_mode {
            let end_date = new_plan.fixed_end_date.ok_or(PlanError::MissingEndDate)?;
            (end_date - today).num_days().max(1)
        } else {
            new_plan.duration_days.ok_or(PlanError::InvalidDayCount)?
        };

        Ok(Plan {
            target_units: new_plan.target_units.unwrap_or(DEFAULT_TARGET_UNITS),
            duration_days,
            started_at: now,
            fixed_end_mode: new_plan.fixed_end_mode,
            fixed_end_date: if new_plan.fixed_end_mode {
                new_plan.fixed_end_date
            } else {
                None
            },
        })
    }

    /// Sanity check applied to plans coming back from persistence; a plan
    /// violating these bounds is treated as corrupt and discarded.
    pub fn is_well_formed(&self) -> bool {
        self.target_units > Decimal::ZERO && self.duration_days >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
    }

    fn test_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_validate_rejects_missing_day_count() {
        let new_plan = NewPlan {
            target_units: Some(dec!(30)),
            duration_days: None,
            ..Default::default()
        };

        assert_eq!(new_plan.validate(), Err(PlanError::InvalidDayCount));
    }

    #[test]
    fn test_validate_rejects_non_positive_day_count() {
        let new_plan = NewPlan {
            duration_days: Some(0),
            ..Default::default()
        };

        assert_eq!(new_plan.validate(), Err(PlanError::InvalidDayCount));
    }

    #[test]
    fn test_validate_rejects_non_positive_target() {
        let new_plan = NewPlan {
            target_units: Some(dec!(0)),
            duration_days: Some(30),
            ..Default::default()
        };

        assert_eq!(new_plan.validate(), Err(PlanError::InvalidTargetUnits));
    }

    #[test]
    fn test_validate_rejects_fixed_end_mode_without_end_date() {
        let new_plan = NewPlan {
            duration_days: Some(30),
            fixed_end_mode: true,
            fixed_end_date: None,
            ..Default::default()
        };

        assert_eq!(new_plan.validate(), Err(PlanError::MissingEndDate));
    }

    #[test]
    fn test_from_new_applies_default_target() {
        let new_plan = NewPlan {
            target_units: None,
            duration_days: Some(30),
            ..Default::default()
        };

        let plan = Plan::from_new(new_plan, test_now(), test_today()).unwrap();
        assert_eq!(plan.target_units, DEFAULT_TARGET_UNITS);
        assert_eq!(plan.duration_days, 30);
        assert_eq!(plan.started_at, test_now());
        assert_eq!(plan.fixed_end_date, None);
    }

    #[test]
    fn test_from_new_derives_duration_from_end_date() {
        let end_date = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let new_plan = NewPlan {
            target_units: Some(dec!(15)),
            duration_days: None,
            fixed_end_mode: true,
            fixed_end_date: Some(end_date),
        };

        let plan = Plan::from_new(new_plan, test_now(), test_today()).unwrap();
        assert_eq!(plan.duration_days, 29);
        assert_eq!(plan.fixed_end_date, Some(end_date));
    }

    #[test]
    fn test_from_new_clamps_past_end_date_to_one_day() {
        let end_date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let new_plan = NewPlan {
            fixed_end_mode: true,
            fixed_end_date: Some(end_date),
            ..Default::default()
        };

        let plan = Plan::from_new(new_plan, test_now(), test_today()).unwrap();
        assert_eq!(plan.duration_days, 1);
    }

    #[test]
    fn test_is_well_formed_rejects_corrupt_values() {
        let new_plan = NewPlan {
            duration_days: Some(10),
            ..Default::default()
        };
        let mut plan = Plan::from_new(new_plan, test_now(), test_today()).unwrap();
        assert!(plan.is_well_formed());

        plan.target_units = dec!(0);
        assert!(!plan.is_well_formed());
    }
}
