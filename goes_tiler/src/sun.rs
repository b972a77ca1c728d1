/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
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

//! observer location and the local solar events we use to tell day from night

use std::fmt;
use serde::{Deserialize,Serialize};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

use goes_common::datetime::from_epoch_secs;
use crate::bands::{BandSet,Mode,select_bands};

/// the observer location. Note this does not need to be inside of the cutline region, it only
/// determines the day/night regime of a run
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Location {
    #[serde(alias="city")]
    name: String,
    #[serde(alias="country")]
    region: String,
    #[serde(alias="olson_tz")]
    timezone: Tz,
    lat: f64,
    lng: f64,
}

impl Location {
    pub fn new (name: impl ToString, region: impl ToString, timezone: Tz, lat: f64, lng: f64)->Self {
        Location { name: name.to_string(), region: region.to_string(), timezone, lat, lng }
    }

    pub fn name (&self)->&str { &self.name }
    pub fn region (&self)->&str { &self.region }
    pub fn timezone (&self)->Tz { self.timezone }
    pub fn lat (&self)->f64 { self.lat }
    pub fn lng (&self)->f64 { self.lng }

    pub fn is_valid (&self)->bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat.abs() <= 90.0 && self.lng.abs() <= 180.0
    }
}

impl Default for Location {
    fn default()->Self {
        Location::new( "Seattle", "United States", chrono_tz::US::Pacific, 47.65, -122.28)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}, lat: {:.02}, lng: {:.02})", self.name, self.region, self.timezone, self.lat, self.lng)
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// something that can compute sunrise and sunset for a location on a given (local) date.
/// Returns `None` if there is no sunrise/sunset on that date (polar day or night)
pub trait SunPositionProvider {
    fn sun_times (&self, location: &Location, date: NaiveDate)->Option<SunTimes>;
}

/// [`SunPositionProvider`] backed by the `sunrise` crate
#[derive(Debug,Clone,Copy,Default)]
pub struct SolarCalculator;

impl SunPositionProvider for SolarCalculator {
    #[allow(deprecated)]
    fn sun_times (&self, location: &Location, date: NaiveDate)->Option<SunTimes> {
        let (rise, set) = sunrise::sunrise_sunset( location.lat, location.lng, date.year(), date.month(), date.day());
        let sunrise = from_epoch_secs(rise)?;
        let sunset = from_epoch_secs(set)?;

        // without a solar event the computation does not fail but returns values that are way off
        let noon = date.and_hms_opt(12, 0, 0)?.and_utc() - TimeDelta::seconds( (location.lng * 240.0) as i64);
        let max_offset = TimeDelta::hours(14);
        if sunrise < sunset && (sunrise - noon).abs() < max_offset && (sunset - noon).abs() < max_offset {
            Some( SunTimes{ sunrise, sunset } )
        } else {
            None
        }
    }
}

/// the current instant of a run together with the solar events at the configured location
#[derive(Debug,Clone)]
pub struct TimeContext {
    pub now: DateTime<Tz>,
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
}

impl TimeContext {
    /// the solar events are computed for the local date of `now` at `location`
    pub fn new (now: DateTime<Utc>, location: &Location, provider: &dyn SunPositionProvider)->Self {
        let tz = location.timezone();
        let now = now.with_timezone( &tz);
        let sun = provider.sun_times( location, now.date_naive());

        TimeContext {
            now,
            sunrise: sun.map(|s| s.sunrise.with_timezone(&tz)),
            sunset: sun.map(|s| s.sunset.with_timezone(&tz)),
        }
    }

    pub fn select (&self, day_bands: &BandSet, night_bands: &BandSet)->(Mode,BandSet) {
        select_bands( self.now.with_timezone(&Utc),
                      self.sunrise.map(|d| d.with_timezone(&Utc)),
                      self.sunset.map(|d| d.with_timezone(&Utc)),
                      day_bands, night_bands)
    }
}
