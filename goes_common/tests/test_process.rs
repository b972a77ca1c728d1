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

use goes_common::process::{Invocation, execute};

// run with "cargo test --test test_process -- --nocapture"

#[test]
fn test_invocation_args() {
    let inv = Invocation::new("gdal_translate")
        .arg("-scale").args( [5.0, 160.0]).args(["0", "255"])
        .path_arg("temp/C02.tif");

    println!("{inv}");
    assert_eq!( inv.args, vec!["-scale", "5", "160", "0", "255", "temp/C02.tif"]);
    assert!( inv.has_arg("-scale"));
    assert_eq!( inv.to_string(), "gdal_translate -scale 5 160 0 255 temp/C02.tif");
}

#[tokio::test]
async fn test_execute() {
    // arguments are not interpreted by a shell
    let out = execute( &Invocation::new("echo").arg("a b; rm -rf x")).await.unwrap();
    assert!( out.success);
    assert_eq!( out.stdout.trim(), "a b; rm -rf x");

    let out = execute( &Invocation::new("false")).await.unwrap();
    assert!( !out.success);
    assert_eq!( out.code, Some(1));

    assert!( execute( &Invocation::new("no_such_program_for_sure")).await.is_err());
}
