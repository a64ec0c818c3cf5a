//! Period arithmetic: normalising to a period start and stepping by periods.

use chrono::{Datelike, Days, Months, NaiveDateTime, NaiveTime};

use super::week::WeekRule;
use crate::granularity::Granularity;

pub fn start_of(at: NaiveDateTime, granularity: Granularity, locale: WeekRule) -> NaiveDateTime {
	let date = at.date();
	let start = match granularity {
		Granularity::Day => date,
		Granularity::Week => date - Days::new(locale.local_weekday(date) as u64),
		Granularity::Month => date - Days::new(u64::from(date.day0())),
		Granularity::Quarter => {
			let month_start = date - Days::new(u64::from(date.day0()));
			month_start - Months::new(date.month0() % 3)
		}
		Granularity::Year => date - Days::new(u64::from(date.ordinal0())),
	};
	start.and_time(NaiveTime::MIN)
}

pub fn add(at: NaiveDateTime, granularity: Granularity, count: i32) -> Option<NaiveDateTime> {
	let n = count.unsigned_abs();
	let forward = count >= 0;

	let by_days = |days: u64| {
		if forward { at.checked_add_days(Days::new(days)) } else { at.checked_sub_days(Days::new(days)) }
	};
	let by_months = |months: u32| {
		if forward { at.checked_add_months(Months::new(months)) } else { at.checked_sub_months(Months::new(months)) }
	};

	match granularity {
		Granularity::Day => by_days(u64::from(n)),
		Granularity::Week => by_days(u64::from(n) * 7),
		Granularity::Month => by_months(n),
		Granularity::Quarter => by_months(n.checked_mul(3)?),
		Granularity::Year => by_months(n.checked_mul(12)?),
	}
}
