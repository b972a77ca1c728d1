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

//! ABI channel combinations and the day/night selection between them

use std::{fmt, str::FromStr};
use serde::{Deserialize,Serialize};
use chrono::{DateTime,Utc};

use crate::errors::{GoesTilerError,Result};

// band combinations in R-G-B order if multi-band
pub const NATURAL_FIRE: &str = "C06 C03 C02";
pub const TRUE_COLOR: &str = "C02 C03 C01";
pub const LWIR: &str = "C16";

/// an ordered sequence of ABI channel ids (e.g. "C02"). For multi-band sets the order is R,G,B
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
#[serde(try_from="String", into="String")]
pub struct BandSet(Vec<String>);

impl BandSet {
    pub fn new<I,S> (channels: I)->Result<Self> where I: IntoIterator<Item=S>, S: ToString {
        let channels: Vec<String> = channels.into_iter().map(|c| c.to_string()).collect();
        if channels.is_empty() {
            return Err( GoesTilerError::ConfigError("empty band set".to_string()))
        }
        for c in &channels {
            if c.is_empty() || !c.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                return Err( GoesTilerError::ConfigError(format!("invalid channel id '{c}'")))
            }
        }
        Ok( BandSet(channels) )
    }

    pub fn channels (&self)->&[String] { &self.0 }

    pub fn len (&self)->usize { self.0.len() }

    pub fn is_single_band (&self)->bool { self.0.len() == 1 }

    /// true if this set gets composited into an RGB image
    pub fn is_composite (&self)->bool { self.0.len() > 1 }

    pub fn iter (&self)->impl Iterator<Item=&String> { self.0.iter() }

    pub fn natural_fire ()->Self { band_set(NATURAL_FIRE) }
    pub fn true_color ()->Self { band_set(TRUE_COLOR) }
    pub fn lwir ()->Self { band_set(LWIR) }
}

fn band_set (spec: &str)->BandSet {
    BandSet( spec.split_whitespace().map(|c| c.to_string()).collect())
}

impl FromStr for BandSet {
    type Err = GoesTilerError;

    /// parse from either a preset name ("natural_fire", "true_color", "lwir") or whitespace/comma
    /// separated channel ids ("C06 C03 C02")
    fn from_str (s: &str)->Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "natural_fire" => Ok( BandSet::natural_fire()),
            "true_color" => Ok( BandSet::true_color()),
            "lwir" => Ok( BandSet::lwir()),
            _ => BandSet::new( s.split(|c: char| c.is_whitespace() || c == ',').filter(|c| !c.is_empty()))
        }
    }
}

impl TryFrom<String> for BandSet {
    type Error = GoesTilerError;
    fn try_from (s: String)->Result<Self> { s.parse() }
}

impl From<BandSet> for String {
    fn from (bs: BandSet)->String { bs.to_string() }
}

impl fmt::Display for BandSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// the time-of-day regime of a run. This is the single place where direction dependent
/// processing is decided (band set, tone mapping, tile transparency)
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum Mode {
    Day,
    Night
}

impl Mode {
    /// the byte range [lo,hi] of the stretch maps to. Night images are inverted (cold cloud tops bright)
    pub fn output_range (&self)->(u8,u8) {
        match self {
            Mode::Day => (0, 255),
            Mode::Night => (255, 0)
        }
    }

    /// day composites have transparent no-data borders we don't want to tile
    pub fn excludes_transparent_tiles (&self)->bool {
        *self == Mode::Day
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Day => write!(f, "day"),
            Mode::Night => write!(f, "night")
        }
    }
}

/// pick the day band set if `now` is strictly between sunrise and sunset, the night band set otherwise.
/// Missing or degenerate (sunrise >= sunset) solar events count as night since night bands are
/// the ones least likely to saturate
pub fn select_bands (now: DateTime<Utc>, sunrise: Option<DateTime<Utc>>, sunset: Option<DateTime<Utc>>,
                     day_bands: &BandSet, night_bands: &BandSet) -> (Mode, BandSet) {
    match (sunrise, sunset) {
        (Some(sunrise), Some(sunset)) if sunrise < now && now < sunset => (Mode::Day, day_bands.clone()),
        _ => (Mode::Night, night_bands.clone())
    }
}
