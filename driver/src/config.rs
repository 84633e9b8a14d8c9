use std::str::FromStr;

use error_stack::ResultExt;

use kernel::prelude::entity::{BorrowPeriod, BorrowRule, DailyFine, MaxBorrow};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static BORROW_MAX_COUNT: &str = "BORROW_MAX_COUNT";
static BORROW_PERIOD_DAYS: &str = "BORROW_PERIOD_DAYS";
static BORROW_DAILY_FINE: &str = "BORROW_DAILY_FINE";

/// Builds the initial borrow rule from the environment.
///
/// Unset keys fall back to [`BorrowRule::default`].
pub fn rule_from_env() -> error_stack::Result<BorrowRule, KernelError> {
    rule_from(env)
}

fn rule_from<F>(lookup: F) -> error_stack::Result<BorrowRule, KernelError>
where
    F: Fn(&str) -> Result<Option<String>, DriverError>,
{
    let fallback = BorrowRule::default();
    let max_borrow =
        read(&lookup, BORROW_MAX_COUNT, *fallback.max_borrow().as_ref()).convert_error()?;
    let borrow_period =
        read(&lookup, BORROW_PERIOD_DAYS, *fallback.borrow_period().as_ref()).convert_error()?;
    let daily_fine =
        read(&lookup, BORROW_DAILY_FINE, *fallback.daily_fine().as_ref()).convert_error()?;

    let rule = BorrowRule::new(
        MaxBorrow::new(max_borrow),
        BorrowPeriod::new(borrow_period),
        DailyFine::new(daily_fine),
    )
    .attach_printable("Borrow rule loaded from environment is invalid")?;

    tracing::info!(max_borrow, borrow_period, daily_fine, "borrow rule configured");
    Ok(rule)
}

fn read<F, T>(lookup: &F, key: &'static str, fallback: T) -> Result<T, DriverError>
where
    F: Fn(&str) -> Result<Option<String>, DriverError>,
    T: FromStr,
{
    match lookup(key)? {
        Some(raw) => parse(key, raw),
        None => Ok(fallback),
    }
}

fn parse<T: FromStr>(key: &'static str, raw: String) -> Result<T, DriverError> {
    let parsed = raw.trim().parse::<T>();
    parsed.map_err(|_| DriverError::InvalidValue { key, value: raw })
}
