//! Owner-level statistics across several years.
//!
//! A league-wide window is sliced into one [`YearFilters`] per qualifying year, a
//! per-year calculator runs on each slice, and its team-keyed result is re-keyed onto
//! owners through that year's team list before the years are combined.

use crate::decimal::ratio;
use crate::error::AnalyticsError;
use crate::filters::{AllTimeFilters, YearFilters};
use crate::year::TeamStat;
use core_types::{CoreError, League, OwnerId, Year};
use rayon::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub mod stats;

pub use stats::*;

/// A statistic for every owner of the league.
pub type OwnerStat<V> = BTreeMap<OwnerId, V>;

/// Values the sum combinator can add across years without silently overflowing.
pub trait Summable: Copy + Default + Send {
    fn checked_sum(self, other: Self) -> Option<Self>;
}

impl Summable for u32 {
    fn checked_sum(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }
}

impl Summable for Decimal {
    fn checked_sum(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }
}

fn add_years<V: Summable>(acc: &mut V, value: V) -> Result<(), AnalyticsError> {
    *acc = acc
        .checked_sum(value)
        .ok_or_else(|| AnalyticsError::Calculation("overflow while summing years".to_string()))?;
    Ok(())
}

/// The effective week window of every year inside the league-wide range, in year order.
///
/// The first year runs from the start week to its last week, the last year from week 1
/// to the end week, and years in between are taken whole. A single-year range keeps
/// both week bounds as given.
pub fn year_windows<'a>(league: &'a League, filters: &AllTimeFilters) -> Vec<(&'a Year, YearFilters)> {
    let mut years: Vec<&Year> = league
        .years
        .iter()
        .filter(|y| filters.contains_year(y.year_number))
        .collect();
    years.sort_by_key(|y| y.year_number);

    let single_year = filters.year_number_start() == filters.year_number_end();
    years
        .into_iter()
        .map(|year| {
            let last_week = year.week_count();
            let (start, end) = if single_year {
                (filters.week_number_start(), filters.week_number_end())
            } else if year.year_number == filters.year_number_start() {
                (filters.week_number_start(), last_week)
            } else if year.year_number == filters.year_number_end() {
                (1, filters.week_number_end())
            } else {
                (1, last_week)
            };
            tracing::debug!(year = year.year_number, start, end, "Sliced all-time window");
            let window = YearFilters::window(start, end, filters.include_matchup_types().clone());
            (year, window)
        })
        .collect()
}

/// Moves every team's value onto its owner, resolving through the year's own team list.
fn rekey<V>(league: &League, year: &Year, stat: TeamStat<V>) -> Result<OwnerStat<V>, AnalyticsError> {
    let mut by_owner = BTreeMap::new();
    for (team_id, value) in stat {
        let owner_id = year.owner_id_of(team_id)?;
        league.owner(owner_id)?;
        if by_owner.insert(owner_id, value).is_some() {
            return Err(CoreError::InvalidInput(
                format!("year {}", year.year_number),
                format!("owner {owner_id} has more than one team"),
            )
            .into());
        }
    }
    Ok(by_owner)
}

/// Runs a per-year calculator on every qualifying year and re-keys each result.
///
/// Years are computed in parallel; the returned results keep year order.
pub fn per_year<V, F>(
    league: &League,
    filters: &AllTimeFilters,
    calculator: F,
) -> Result<Vec<OwnerStat<V>>, AnalyticsError>
where
    V: Send,
    F: Fn(&Year, &YearFilters) -> Result<TeamStat<V>, AnalyticsError> + Sync,
{
    year_windows(league, filters)
        .par_iter()
        .map(|(year, window)| rekey(league, year, calculator(*year, window)?))
        .collect()
}

/// Folds per-year results into one accumulator per league owner, starting from `init`.
///
/// Owners absent from a year simply receive nothing for it.
fn fold_years<V, A>(
    league: &League,
    results: Vec<OwnerStat<V>>,
    init: A,
    fold: impl Fn(&mut A, V) -> Result<(), AnalyticsError>,
) -> Result<OwnerStat<A>, AnalyticsError>
where
    A: Clone,
{
    let mut combined: OwnerStat<A> = league
        .owner_ids()
        .into_iter()
        .map(|owner_id| (owner_id, init.clone()))
        .collect();

    for result in results {
        for (owner_id, value) in result {
            let accumulator = combined
                .get_mut(&owner_id)
                .ok_or(CoreError::MissingOwner { owner_id })?;
            fold(accumulator, value)?;
        }
    }
    Ok(combined)
}

/// Generic combination of a per-year calculator over the range.
pub fn combine<V, A, F>(
    league: &League,
    filters: &AllTimeFilters,
    calculator: F,
    init: A,
    fold: impl Fn(&mut A, V) -> Result<(), AnalyticsError>,
) -> Result<OwnerStat<A>, AnalyticsError>
where
    V: Send,
    A: Clone,
    F: Fn(&Year, &YearFilters) -> Result<TeamStat<V>, AnalyticsError> + Sync,
{
    let results = per_year(league, filters, calculator)?;
    fold_years(league, results, init, fold)
}

/// Sums a statistic over every qualifying year.
pub fn sum<V, F>(league: &League, filters: &AllTimeFilters, calculator: F) -> Result<OwnerStat<V>, AnalyticsError>
where
    V: Summable,
    F: Fn(&Year, &YearFilters) -> Result<TeamStat<V>, AnalyticsError> + Sync,
{
    combine(league, filters, calculator, V::default(), add_years)
}

/// Sums a statistic and divides by the number of qualifying years.
///
/// The divisor is the same for every owner, whether or not they played each year.
pub fn average<F>(league: &League, filters: &AllTimeFilters, calculator: F) -> Result<OwnerStat<Decimal>, AnalyticsError>
where
    F: Fn(&Year, &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> + Sync,
{
    let results = per_year(league, filters, calculator)?;
    let years = Decimal::from(results.len());
    let totals = fold_years(league, results, Decimal::ZERO, add_years)?;
    Ok(totals
        .into_iter()
        .map(|(owner_id, total)| (owner_id, ratio(total, years)))
        .collect())
}

/// Picks an extreme of optional values across years; absent years are skipped.
pub fn extreme<F>(
    league: &League,
    filters: &AllTimeFilters,
    calculator: F,
    pick: fn(Decimal, Decimal) -> Decimal,
) -> Result<OwnerStat<Option<Decimal>>, AnalyticsError>
where
    F: Fn(&Year, &YearFilters) -> Result<TeamStat<Option<Decimal>>, AnalyticsError> + Sync,
{
    combine(league, filters, calculator, None, |acc: &mut Option<Decimal>, v| {
        *acc = match (*acc, v) {
            (Some(current), Some(candidate)) => Some(pick(current, candidate)),
            (current, candidate) => current.or(candidate),
        };
        Ok(())
    })
}

/// Concatenates per-year lists, in year order.
pub fn pool<T, F>(league: &League, filters: &AllTimeFilters, calculator: F) -> Result<OwnerStat<Vec<T>>, AnalyticsError>
where
    T: Clone + Send,
    F: Fn(&Year, &YearFilters) -> Result<TeamStat<Vec<T>>, AnalyticsError> + Sync,
{
    combine(league, filters, calculator, Vec::new(), |acc: &mut Vec<T>, v| {
        acc.extend(v);
        Ok(())
    })
}
