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

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use goes_tiler::{hour_prefix, parse_filename};
use goes_tiler::goesr::parse_goesr_dtg;

// run with "cargo test --test test_goesr -- --nocapture"

#[test]
fn test_parse_filename() {
    let key = "ABI-L1b-RadC/2024/138/05/OR_ABI-L1b-RadC-M6C02_G16_s20241380556172_e20241380558545_c20241380559122.nc";
    let fi = parse_filename( key).unwrap();
    println!("{fi:#?}");

    assert_eq!( fi.sys_env, "OR");
    assert_eq!( fi.instrument, "ABI");
    assert_eq!( fi.level, "L1b");
    assert_eq!( fi.product, "RadC");
    assert_eq!( fi.scan_mode, 6);
    assert_eq!( fi.channel.as_deref(), Some("C02"));
    assert_eq!( fi.sat_id, 16);
    assert_eq!( fi.start_time, Utc.with_ymd_and_hms( 2024, 5, 17, 5, 56, 17).unwrap() + chrono::TimeDelta::milliseconds(200));
    assert!( fi.start_time < fi.end_time && fi.end_time < fi.create_time);

    let fi = parse_filename( "OR_ABI-L2-FDCC-M6_G16_s20241380556172_e20241380558545_c20241380559122.nc").unwrap();
    assert_eq!( fi.channel, None);
    assert_eq!( fi.product, "FDCC");

    assert!( parse_filename( "ABI-L1b-RadC/2024/138/05/README.txt").is_none());
    assert!( parse_goesr_dtg( "20243670000000").is_none()); // no day 367
}

#[test]
fn test_hour_prefix() {
    let dt = Utc.with_ymd_and_hms( 2024, 2, 3, 7, 45, 0).unwrap();
    assert_eq!( hour_prefix( "L1b-RadC", &dt), "ABI-L1b-RadC/2024/034/07");

    // the hour is taken in the time zone of the datetime
    let la = dt.with_timezone( &Tz::America__Los_Angeles);
    assert_eq!( hour_prefix( "L1b-RadC", &la), "ABI-L1b-RadC/2024/033/23");
}
