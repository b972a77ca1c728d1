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

use std::fs;
use std::io::{self, ErrorKind::*};
use std::path::{Path,PathBuf};
use regex::Regex;
use tempfile::NamedTempFile;

use crate::macros::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

/// check if dir pathname exists and is writable, try to create dir otherwise
pub fn ensure_writable_dir (path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        let md = fs::metadata(&path)?;
        if md.permissions().readonly() {
            Err(io_error!(PermissionDenied, "dir {:?} not writable", &path))
        } else {
            Ok(())
        }

    } else {
        fs::create_dir_all(path)
    }
}

pub fn path_to_lossy_string (path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().as_ref().to_string()
}

/// return all regular files within `dir` whose filename matches the provided regex (non-recursive).
/// A non-existing dir yields an empty list
pub fn matching_files_in_dir<P: AsRef<Path>> (dir: &P, fname_regex: &Regex) -> Result<Vec<PathBuf>> {
    let dir: &Path = dir.as_ref();
    let mut list: Vec<PathBuf> = Vec::new();

    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            if let Ok(entry) = entry {
                let path = entry.path();
                if path.is_file() {
                    if let Some(fname) = entry.file_name().to_str() {
                        if fname_regex.is_match( fname) {
                            list.push(path)
                        }
                    }
                }
            }
        }
    }
    list.sort();

    Ok(list)
}

/// outcome of a [`remove_matching_files`] sweep. Individual failures do not stop the sweep
#[derive(Debug,Default)]
pub struct RemovedFiles {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf,io::Error)>,
}

impl RemovedFiles {
    pub fn is_empty (&self)->bool { self.removed.is_empty() && self.failed.is_empty() }
}

/// remove all regular files in `dir` that match `fname_regex`. This only fails if `dir` exists but can't be read
pub fn remove_matching_files<P: AsRef<Path>> (dir: &P, fname_regex: &Regex) -> Result<RemovedFiles> {
    let mut result = RemovedFiles::default();

    for path in matching_files_in_dir( dir, fname_regex)? {
        match fs::remove_file(&path) {
            Ok(()) => result.removed.push(path),
            Err(e) => result.failed.push( (path,e) )
        }
    }
    Ok(result)
}

/// remove file if it exists. Returns `Ok(false)` if there was nothing to remove
pub fn remove_if_exists (path: impl AsRef<Path>) -> Result<bool> {
    match fs::remove_file( path.as_ref()) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == NotFound => Ok(false),
        Err(e) => Err(e)
    }
}

/// open a temp file next to `path` to write content that should only become visible as `path` once
/// it is complete. The temp file is deleted if it is dropped without [`persist_temp_file`]
pub fn temp_file_for (path: impl AsRef<Path>) -> Result<NamedTempFile> {
    let dir = match path.as_ref().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new(".")
    };
    NamedTempFile::new_in( dir)
}

/// rename a completed temp file to `path`, replacing any previous file
pub fn persist_temp_file (file: NamedTempFile, path: impl AsRef<Path>) -> Result<()> {
    file.persist( path.as_ref()).map(|_| ()).map_err(|e| e.error)
}
