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

use goes_tiler::{ObjectKey, GoesTilerError, resolve};
use goes_tiler::resolver::latest_match;

// run with "cargo test --test test_resolver -- --nocapture"

const HOUR: &str = "ABI-L1b-RadC/2024/138/19";

fn key (channel: &str, minute: u32)->ObjectKey {
    ObjectKey::new( format!("{HOUR}/OR_ABI-L1b-RadC-M6{channel}_G16_s2024138{minute:02}00172_e2024138{minute:02}02545_c2024138{minute:02}03012.nc"))
}

fn candidates ()->Vec<ObjectKey> {
    // deliberately not in key order
    vec![
        key("C02", 11), key("C06", 1), key("C03", 6), key("C02", 1),
        key("C01", 16), key("C06", 11), key("C02", 6), key("C03", 1),
    ]
}

#[test]
fn test_latest_per_channel() {
    let cands = candidates();
    let resolved = resolve( &["C06", "C03", "C02"], &cands).unwrap();
    for rf in &resolved { println!("{} -> {}", rf.channel, rf.key) }

    assert_eq!( resolved.len(), 3);
    assert_eq!( resolved[0].channel, "C06");
    assert_eq!( resolved[0].key, key("C06", 11));
    assert_eq!( resolved[1].channel, "C03");
    assert_eq!( resolved[1].key, key("C03", 6));
    assert_eq!( resolved[2].channel, "C02");
    assert_eq!( resolved[2].key, key("C02", 11));
}

#[test]
fn test_greatest_matching_key() {
    let cands: Vec<ObjectKey> = ["a/C16_x1", "a/C16_x3", "a/C16_x2", "a/C13_x9"].iter().map(|s| ObjectKey::from(*s)).collect();
    assert_eq!( latest_match( "C16", &cands), Some(&ObjectKey::from("a/C16_x3")));
    assert_eq!( latest_match( "C07", &cands), None);

    let resolved = resolve( &["C16"], &cands).unwrap();
    assert_eq!( resolved[0].key.as_str(), "a/C16_x3");
    assert_eq!( resolved[0].key.file_name(), "C16_x3");
}

#[test]
fn test_missing_channel() {
    let cands = candidates();
    match resolve( &["C06", "C16", "C02"], &cands) {
        Err(GoesTilerError::ResolutionError{channels}) => {
            println!("unresolved: {channels:?}");
            assert_eq!( channels, vec!["C16".to_string()]);
        }
        other => panic!("expected ResolutionError, got {other:?}")
    }

    let err = resolve( &["C16"], &[]).unwrap_err();
    assert!( err.to_string().contains("C16"));
}
