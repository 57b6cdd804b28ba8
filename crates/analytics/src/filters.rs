//! Turns sparse, caller-supplied options into a validated query window.
//!
//! Resolution is a pure function of `(year or league, options)` and always runs before
//! any statistic is computed, so an invalid option never yields a partial result.

use crate::error::AnalyticsError;
use core_types::{League, MatchupType, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The options bag accepted by every statistic.
///
/// Bounds are signed so that out-of-range values reach validation instead of
/// being rejected by the type system with a less helpful message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterOptions {
    #[serde(default)]
    pub only_post_season: bool,
    #[serde(default)]
    pub only_regular_season: bool,
    #[serde(default)]
    pub only_championship: bool,
    pub week_number_start: Option<i64>,
    pub week_number_end: Option<i64>,
    pub year_number_start: Option<i64>,
    pub year_number_end: Option<i64>,
}

impl FilterOptions {
    /// Parses a loosely typed options object, e.g. one received over JSON.
    ///
    /// Non-integer bounds and unrecognised keys fail with `InvalidFilter`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, AnalyticsError> {
        serde_json::from_value(value.clone())
            .map_err(|e| AnalyticsError::InvalidFilter(format!("malformed options: {e}")))
    }

    /// The matchup segments selected by the three mutually exclusive flags.
    fn include_matchup_types(&self) -> Result<BTreeSet<MatchupType>, AnalyticsError> {
        let selected = [self.only_post_season, self.only_regular_season, self.only_championship]
            .into_iter()
            .filter(|flag| *flag)
            .count();
        if selected > 1 {
            return Err(AnalyticsError::InvalidFilter(
                "onlyPostSeason, onlyRegularSeason and onlyChampionship are mutually exclusive"
                    .to_string(),
            ));
        }

        // Ignored matchups are never selectable.
        let counted = [MatchupType::RegularSeason, MatchupType::Playoff, MatchupType::Championship];
        Ok(counted
            .into_iter()
            .filter(|t| {
                if self.only_regular_season {
                    *t == MatchupType::RegularSeason
                } else if self.only_post_season {
                    t.is_post_season()
                } else if self.only_championship {
                    *t == MatchupType::Championship
                } else {
                    true
                }
            })
            .collect())
    }
}

/// A resolved single-year window: an inclusive week range and the included segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearFilters {
    week_number_start: u32,
    week_number_end: u32,
    include_matchup_types: BTreeSet<MatchupType>,
}

impl YearFilters {
    /// Resolves options against a year. Year bounds are not accepted at this scope.
    pub fn resolve(year: &Year, options: &FilterOptions) -> Result<Self, AnalyticsError> {
        if options.year_number_start.is_some() || options.year_number_end.is_some() {
            return Err(AnalyticsError::InvalidFilter(
                "yearNumberStart and yearNumberEnd only apply to all-time statistics".to_string(),
            ));
        }
        let include_matchup_types = options.include_matchup_types()?;
        let week_count = i64::from(year.week_count());

        let start = options.week_number_start.unwrap_or(1);
        let end = options.week_number_end.unwrap_or(week_count);

        if start < 1 {
            return Err(AnalyticsError::InvalidFilter(format!(
                "weekNumberStart must be at least 1, got {start}"
            )));
        }
        if end > week_count {
            return Err(AnalyticsError::InvalidFilter(format!(
                "weekNumberEnd {end} exceeds the {week_count} weeks of year {}",
                year.year_number
            )));
        }
        if start > end {
            return Err(AnalyticsError::InvalidFilter(format!(
                "weekNumberStart {start} is after weekNumberEnd {end}"
            )));
        }

        let filters = Self {
            week_number_start: to_u32(start, "weekNumberStart")?,
            week_number_end: to_u32(end, "weekNumberEnd")?,
            include_matchup_types,
        };
        tracing::debug!(year = year.year_number, ?filters, "Resolved year filters");
        Ok(filters)
    }

    /// Builds a window whose bounds the caller has already validated.
    pub(crate) fn window(start: u32, end: u32, include_matchup_types: BTreeSet<MatchupType>) -> Self {
        Self {
            week_number_start: start,
            week_number_end: end,
            include_matchup_types,
        }
    }

    pub fn week_number_start(&self) -> u32 {
        self.week_number_start
    }

    pub fn week_number_end(&self) -> u32 {
        self.week_number_end
    }

    pub fn include_matchup_types(&self) -> &BTreeSet<MatchupType> {
        &self.include_matchup_types
    }

    pub fn includes(&self, matchup_type: MatchupType) -> bool {
        self.include_matchup_types.contains(&matchup_type)
    }
}

/// A resolved league-wide window running from `(year start, week start)` to `(year end, week end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllTimeFilters {
    year_number_start: u32,
    week_number_start: u32,
    year_number_end: u32,
    week_number_end: u32,
    include_matchup_types: BTreeSet<MatchupType>,
}

impl AllTimeFilters {
    pub fn resolve(league: &League, options: &FilterOptions) -> Result<Self, AnalyticsError> {
        let include_matchup_types = options.include_matchup_types()?;

        let (first, last) = match (league.first_year(), league.last_year()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(AnalyticsError::InvalidFilter("league has no years".to_string())),
        };

        let year_start = options
            .year_number_start
            .unwrap_or(i64::from(first.year_number));
        let year_end = options.year_number_end.unwrap_or(i64::from(last.year_number));
        let start_year = find_year(league, year_start, "yearNumberStart")?;
        let end_year = find_year(league, year_end, "yearNumberEnd")?;

        if year_start > year_end {
            return Err(AnalyticsError::InvalidFilter(format!(
                "yearNumberStart {year_start} is after yearNumberEnd {year_end}"
            )));
        }

        let week_start = options.week_number_start.unwrap_or(1);
        let week_end = options
            .week_number_end
            .unwrap_or(i64::from(end_year.week_count()));

        if week_start < 1 || week_start > i64::from(start_year.week_count()) {
            return Err(AnalyticsError::InvalidFilter(format!(
                "weekNumberStart {week_start} is outside the {} weeks of year {year_start}",
                start_year.week_count()
            )));
        }
        if week_end < 1 || week_end > i64::from(end_year.week_count()) {
            return Err(AnalyticsError::InvalidFilter(format!(
                "weekNumberEnd {week_end} is outside the {} weeks of year {year_end}",
                end_year.week_count()
            )));
        }
        if year_start == year_end && week_start > week_end {
            return Err(AnalyticsError::InvalidFilter(format!(
                "weekNumberStart {week_start} is after weekNumberEnd {week_end}"
            )));
        }

        let filters = Self {
            year_number_start: start_year.year_number,
            week_number_start: to_u32(week_start, "weekNumberStart")?,
            year_number_end: end_year.year_number,
            week_number_end: to_u32(week_end, "weekNumberEnd")?,
            include_matchup_types,
        };
        tracing::debug!(?filters, "Resolved all-time filters");
        Ok(filters)
    }

    pub fn year_number_start(&self) -> u32 {
        self.year_number_start
    }

    pub fn week_number_start(&self) -> u32 {
        self.week_number_start
    }

    pub fn year_number_end(&self) -> u32 {
        self.year_number_end
    }

    pub fn week_number_end(&self) -> u32 {
        self.week_number_end
    }

    pub fn include_matchup_types(&self) -> &BTreeSet<MatchupType> {
        &self.include_matchup_types
    }

    pub fn contains_year(&self, year_number: u32) -> bool {
        year_number >= self.year_number_start && year_number <= self.year_number_end
    }
}

fn find_year<'a>(league: &'a League, year_number: i64, option: &str) -> Result<&'a Year, AnalyticsError> {
    let number = to_u32(year_number, option)?;
    league
        .year(number)
        .map_err(|_| AnalyticsError::InvalidFilter(format!("{option} {year_number} is not a year of the league")))
}

fn to_u32(value: i64, option: &str) -> Result<u32, AnalyticsError> {
    u32::try_from(value)
        .map_err(|_| AnalyticsError::InvalidFilter(format!("{option} {value} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{YearBuilder, league, owners};
    use core_types::Matchup;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn three_week_year(year_number: u32, owners: &[core_types::Owner]) -> Year {
        let mut builder = YearBuilder::new(year_number, owners);
        for _ in 0..3 {
            builder = builder.week(|t| vec![Matchup::new(t[0], t[1], dec!(1), dec!(2))]);
        }
        builder.build()
    }

    #[test]
    fn year_defaults_cover_the_whole_season() {
        let owners = owners(&["a", "b"]);
        let year = three_week_year(2020, &owners);

        let filters = YearFilters::resolve(&year, &FilterOptions::default()).unwrap();
        assert_eq!(filters.week_number_start(), 1);
        assert_eq!(filters.week_number_end(), 3);
        assert_eq!(
            filters.include_matchup_types().iter().copied().collect::<Vec<_>>(),
            vec![MatchupType::RegularSeason, MatchupType::Playoff, MatchupType::Championship]
        );
        assert!(!filters.includes(MatchupType::Ignored));
    }

    #[test]
    fn segment_flags_map_to_matchup_types() {
        let owners = owners(&["a", "b"]);
        let year = three_week_year(2020, &owners);

        let post = FilterOptions { only_post_season: true, ..Default::default() };
        let filters = YearFilters::resolve(&year, &post).unwrap();
        assert!(filters.includes(MatchupType::Playoff) && filters.includes(MatchupType::Championship));
        assert!(!filters.includes(MatchupType::RegularSeason));

        let regular = FilterOptions { only_regular_season: true, ..Default::default() };
        let filters = YearFilters::resolve(&year, &regular).unwrap();
        assert_eq!(filters.include_matchup_types().len(), 1);
        assert!(filters.includes(MatchupType::RegularSeason));

        let championship = FilterOptions { only_championship: true, ..Default::default() };
        let filters = YearFilters::resolve(&year, &championship).unwrap();
        assert_eq!(filters.include_matchup_types().len(), 1);
        assert!(filters.includes(MatchupType::Championship));
    }

    #[test]
    fn mutually_exclusive_flags_fail() {
        let owners = owners(&["a", "b"]);
        let year = three_week_year(2020, &owners);
        let options = FilterOptions {
            only_post_season: true,
            only_championship: true,
            ..Default::default()
        };
        assert!(matches!(
            YearFilters::resolve(&year, &options),
            Err(AnalyticsError::InvalidFilter(_))
        ));
    }

    #[test]
    fn out_of_range_week_bounds_fail() {
        let owners = owners(&["a", "b"]);
        let year = three_week_year(2020, &owners);

        for (start, end) in [(Some(0), None), (None, Some(4)), (Some(3), Some(2)), (Some(-1), Some(2))] {
            let options = FilterOptions {
                week_number_start: start,
                week_number_end: end,
                ..Default::default()
            };
            assert!(
                matches!(YearFilters::resolve(&year, &options), Err(AnalyticsError::InvalidFilter(_))),
                "expected {start:?}..{end:?} to be rejected"
            );
        }

        let options = FilterOptions {
            week_number_start: Some(2),
            week_number_end: Some(2),
            ..Default::default()
        };
        let filters = YearFilters::resolve(&year, &options).unwrap();
        assert_eq!((filters.week_number_start(), filters.week_number_end()), (2, 2));
    }

    #[test]
    fn year_bounds_are_rejected_for_a_single_year() {
        let owners = owners(&["a", "b"]);
        let year = three_week_year(2020, &owners);

        for options in [
            FilterOptions { year_number_start: Some(2020), ..Default::default() },
            FilterOptions { year_number_end: Some(2020), ..Default::default() },
        ] {
            assert!(matches!(
                YearFilters::resolve(&year, &options),
                Err(AnalyticsError::InvalidFilter(_))
            ));
        }

        let parsed = FilterOptions::from_json(&json!({ "yearNumberStart": 2020 })).unwrap();
        assert!(YearFilters::resolve(&year, &parsed).is_err());
    }

    #[test]
    fn non_integer_and_unknown_options_fail() {
        let result = FilterOptions::from_json(&json!({ "weekNumberStart": 1.5 }));
        assert!(matches!(result, Err(AnalyticsError::InvalidFilter(_))));

        let result = FilterOptions::from_json(&json!({ "weekNumberBegin": 1 }));
        assert!(matches!(result, Err(AnalyticsError::InvalidFilter(_))));

        let options = FilterOptions::from_json(&json!({ "onlyRegularSeason": true, "weekNumberEnd": 2 })).unwrap();
        assert!(options.only_regular_season);
        assert_eq!(options.week_number_end, Some(2));
    }

    #[test]
    fn league_defaults_span_first_to_last_year() {
        let owners = owners(&["a", "b"]);
        let years = vec![
            three_week_year(2001, &owners),
            three_week_year(2000, &owners),
            three_week_year(2002, &owners),
        ];
        let league = league(owners, years);

        let filters = AllTimeFilters::resolve(&league, &FilterOptions::default()).unwrap();
        assert_eq!(filters.year_number_start(), 2000);
        assert_eq!(filters.year_number_end(), 2002);
        assert_eq!(filters.week_number_start(), 1);
        assert_eq!(filters.week_number_end(), 3);
        assert!(filters.contains_year(2001));
        assert!(!filters.contains_year(2003));
    }

    #[test]
    fn league_week_order_only_enforced_within_one_year() {
        let owners = owners(&["a", "b"]);
        let years = vec![three_week_year(2000, &owners), three_week_year(2001, &owners)];
        let league = league(owners, years);

        let across_years = FilterOptions {
            year_number_start: Some(2000),
            week_number_start: Some(3),
            year_number_end: Some(2001),
            week_number_end: Some(1),
            ..Default::default()
        };
        assert!(AllTimeFilters::resolve(&league, &across_years).is_ok());

        let same_year = FilterOptions {
            year_number_end: Some(2000),
            ..across_years
        };
        assert!(matches!(
            AllTimeFilters::resolve(&league, &same_year),
            Err(AnalyticsError::InvalidFilter(_))
        ));
    }

    #[test]
    fn league_bounds_must_name_existing_years_in_order() {
        let owners = owners(&["a", "b"]);
        let years = vec![three_week_year(2000, &owners), three_week_year(2001, &owners)];
        let league = league(owners, years);

        let cases = [
            FilterOptions { year_number_start: Some(1999), ..Default::default() },
            FilterOptions { year_number_end: Some(2002), ..Default::default() },
            FilterOptions { year_number_start: Some(2001), year_number_end: Some(2000), ..Default::default() },
            FilterOptions { week_number_end: Some(4), ..Default::default() },
            FilterOptions { week_number_start: Some(0), ..Default::default() },
        ];
        for options in cases {
            assert!(
                matches!(AllTimeFilters::resolve(&league, &options), Err(AnalyticsError::InvalidFilter(_))),
                "expected {options:?} to be rejected"
            );
        }
    }

    #[test]
    fn empty_league_fails() {
        let league = league(Vec::new(), Vec::new());
        assert!(matches!(
            AllTimeFilters::resolve(&league, &FilterOptions::default()),
            Err(AnalyticsError::InvalidFilter(_))
        ));
    }
}
