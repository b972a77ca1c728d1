/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use goes_tiler::{BandSet, Location, Mode, SolarCalculator, SunPositionProvider, SunTimes, TimeContext, select_bands};

// run with "cargo test --test test_bands -- --nocapture"

fn utc (h: u32, m: u32)->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2024, 5, 17, h, m, 0).unwrap()
}

/// sun provider with fixed UTC hours, independent of location
struct FixedSun { sunrise_hour: u32, sunset_hour: u32 }

impl SunPositionProvider for FixedSun {
    fn sun_times (&self, _location: &Location, date: NaiveDate)->Option<SunTimes> {
        Some( SunTimes {
            sunrise: date.and_hms_opt( self.sunrise_hour, 0, 0)?.and_utc(),
            sunset: date.and_hms_opt( self.sunset_hour, 0, 0)?.and_utc(),
        })
    }
}

struct NoSun;

impl SunPositionProvider for NoSun {
    fn sun_times (&self, _location: &Location, _date: NaiveDate)->Option<SunTimes> { None }
}

#[test]
fn test_select_day_night() {
    let day = BandSet::natural_fire();
    let night = BandSet::lwir();
    let (sunrise, sunset) = (Some(utc(6,0)), Some(utc(18,0)));

    assert_eq!( select_bands( utc(12,0), sunrise, sunset, &day, &night), (Mode::Day, day.clone()));
    assert_eq!( select_bands( utc(2,0), sunrise, sunset, &day, &night), (Mode::Night, night.clone()));
    assert_eq!( select_bands( utc(23,0), sunrise, sunset, &day, &night), (Mode::Night, night.clone()));

    // boundaries are night
    assert_eq!( select_bands( utc(6,0), sunrise, sunset, &day, &night).0, Mode::Night);
    assert_eq!( select_bands( utc(18,0), sunrise, sunset, &day, &night).0, Mode::Night);
    assert_eq!( select_bands( utc(6,1), sunrise, sunset, &day, &night).0, Mode::Day);
    assert_eq!( select_bands( utc(17,59), sunrise, sunset, &day, &night).0, Mode::Day);
}

#[test]
fn test_select_degenerate() {
    let day = BandSet::true_color();
    let night = BandSet::lwir();

    assert_eq!( select_bands( utc(12,0), None, None, &day, &night).0, Mode::Night);
    assert_eq!( select_bands( utc(12,0), Some(utc(6,0)), None, &day, &night).0, Mode::Night);
    assert_eq!( select_bands( utc(12,0), Some(utc(12,0)), Some(utc(12,0)), &day, &night).0, Mode::Night);
    assert_eq!( select_bands( utc(12,0), Some(utc(18,0)), Some(utc(6,0)), &day, &night).0, Mode::Night);
}

#[test]
fn test_time_context() {
    let loc = Location::new( "Greenwich", "United Kingdom", chrono_tz::UTC, 51.48, 0.0);
    let day = BandSet::natural_fire();
    let night = BandSet::lwir();

    let ctx = TimeContext::new( utc(12,0), &loc, &FixedSun{ sunrise_hour: 6, sunset_hour: 18 });
    println!("{ctx:?}");
    assert_eq!( ctx.select( &day, &night), (Mode::Day, day.clone()));

    let ctx = TimeContext::new( utc(2,0), &loc, &FixedSun{ sunrise_hour: 6, sunset_hour: 18 });
    assert_eq!( ctx.select( &day, &night), (Mode::Night, night.clone()));

    let ctx = TimeContext::new( utc(12,0), &loc, &NoSun);
    assert!( ctx.sunrise.is_none());
    assert_eq!( ctx.select( &day, &night).0, Mode::Night);
}

#[test]
fn test_local_date() {
    // 03:00 UTC on May 18 is still May 17 in Seattle
    let loc = Location::default();
    let now = Utc.with_ymd_and_hms( 2024, 5, 18, 3, 0, 0).unwrap();
    let ctx = TimeContext::new( now, &loc, &FixedSun{ sunrise_hour: 6, sunset_hour: 18 });

    assert_eq!( ctx.now.date_naive(), NaiveDate::from_ymd_opt( 2024, 5, 17).unwrap());
    assert_eq!( ctx.sunrise.unwrap().with_timezone(&Utc), utc(6,0));
}

#[test]
fn test_solar_calculator() {
    let loc = Location::default(); // Seattle
    let date = NaiveDate::from_ymd_opt( 2024, 6, 20).unwrap();
    let sun = SolarCalculator.sun_times( &loc, date).expect("no sun times for Seattle");
    println!("Seattle {date}: sunrise {} sunset {}", sun.sunrise, sun.sunset);

    let daylight = sun.sunset - sun.sunrise;
    assert!( daylight > TimeDelta::hours(15) && daylight < TimeDelta::hours(17));

    // local solar noon in Seattle is around 20:10 UTC
    let noon = date.and_hms_opt( 20, 10, 0).unwrap().and_utc();
    assert!( sun.sunrise < noon && noon < sun.sunset);

    let date = NaiveDate::from_ymd_opt( 2024, 12, 21).unwrap();
    let sun = SolarCalculator.sun_times( &loc, date).unwrap();
    let daylight = sun.sunset - sun.sunrise;
    assert!( daylight > TimeDelta::hours(8) && daylight < TimeDelta::hours(9));
}

#[test]
fn test_band_set_parsing() {
    let bs: BandSet = "C06 C03 C02".parse().unwrap();
    assert_eq!( bs, BandSet::natural_fire());
    assert_eq!( bs.channels(), &["C06", "C03", "C02"]);
    assert!( bs.is_composite());

    let bs: BandSet = "C02,C03,C01".parse().unwrap();
    assert_eq!( bs, BandSet::true_color());
    assert_eq!( bs.to_string(), "C02 C03 C01");

    assert_eq!( "lwir".parse::<BandSet>().unwrap(), BandSet::lwir());
    assert!( BandSet::lwir().is_single_band());

    assert!( "".parse::<BandSet>().is_err());
    assert!( "C0/2".parse::<BandSet>().is_err());
}

#[test]
fn test_mode() {
    assert_eq!( Mode::Day.output_range(), (0,255));
    assert_eq!( Mode::Night.output_range(), (255,0));
    assert!( Mode::Day.excludes_transparent_tiles());
    assert!( !Mode::Night.excludes_transparent_tiles());
}
