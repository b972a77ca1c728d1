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

use goes_common::fs::{matching_files_in_dir, remove_matching_files, remove_if_exists, ensure_writable_dir, temp_file_for, persist_temp_file};
use regex::Regex;
use std::fs::{self,File};
use std::io::Write;
use std::path::Path;

// run with "cargo test --test test_fs -- --nocapture"

fn touch (dir: &Path, name: &str) {
    File::create( dir.join(name)).unwrap();
}

#[test]
fn test_matching_files() {
    let re = Regex::new( r".*\.rs").unwrap();
    let dir = Path::new("src");
    let res = matching_files_in_dir( &dir, &re);

    assert!(res.is_ok());

    if let Ok(files) = res {
        assert!( !files.is_empty());
        for f in files {
            println!("{f:?}");
        }
    } else {
        panic!("no matching files in src/ ?")
    }
}

#[test]
fn test_remove_matching_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    touch( dir, "C02.tif");
    touch( dir, "_us_C02.tif");
    touch( dir, "C02.tif.aux.xml");
    touch( dir, "keep.geojson");

    let re = Regex::new( r".*\.(tif|xml)$").unwrap();
    let res = remove_matching_files( &dir, &re).unwrap();
    println!("removed: {:?}", res.removed);

    assert_eq!( res.removed.len(), 3);
    assert!( res.failed.is_empty());
    assert!( dir.join("keep.geojson").is_file());
    assert!( !dir.join("C02.tif").exists());
}

#[test]
fn test_remove_in_missing_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("not_there");

    let re = Regex::new( r".*").unwrap();
    let res = remove_matching_files( &dir, &re).unwrap();
    assert!( res.is_empty());

    assert!( !remove_if_exists( dir.join("x.nc")).unwrap());
    ensure_writable_dir( &dir).unwrap();
    assert!( dir.is_dir());
}

#[test]
fn test_incomplete_temp_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("C02.nc");
    {
        let mut file = temp_file_for( &path).unwrap();
        file.write_all( b"CDF partial").unwrap();
        assert_eq!( file.path().parent(), Some(tmp.path()));
    } // dropped, e.g. on a download error

    assert!( !path.exists());
    assert_eq!( fs::read_dir( tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_persisted_temp_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("C02.nc");
    fs::write( &path, b"old").unwrap();

    let mut file = temp_file_for( &path).unwrap();
    file.write_all( b"CDF complete").unwrap();
    assert_eq!( fs::read( &path).unwrap(), b"old"); // not visible before persisted

    persist_temp_file( file, &path).unwrap();
    assert_eq!( fs::read( &path).unwrap(), b"CDF complete");
    assert_eq!( fs::read_dir( tmp.path()).unwrap().count(), 1);
}
