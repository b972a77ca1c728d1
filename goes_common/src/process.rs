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

//! execution of external programs from explicit argument lists (no shell involved)

use std::{fmt, io, path::Path};
use tokio::process::Command;
use tracing::debug;

use crate::fs::path_to_lossy_string;

/// a program name together with its explicit argument list. Arguments are passed as-is to the
/// child process, i.e. there is no shell quoting or word splitting
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new (program: impl ToString)->Self {
        Invocation { program: program.to_string(), args: Vec::new() }
    }

    pub fn arg (mut self, arg: impl ToString)->Self {
        self.args.push( arg.to_string());
        self
    }

    pub fn path_arg (mut self, path: impl AsRef<Path>)->Self {
        self.args.push( path_to_lossy_string(path));
        self
    }

    pub fn args<I,S> (mut self, args: I)->Self where I: IntoIterator<Item=S>, S: ToString {
        for a in args { self.args.push( a.to_string()) }
        self
    }

    pub fn has_arg (&self, arg: &str)->bool {
        self.args.iter().any(|a| a == arg)
    }

    pub fn to_command (&self)->Command {
        let mut cmd = Command::new( &self.program);
        cmd.args( &self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for a in &self.args { write!(f, " {a}")?; }
        Ok(())
    }
}

/// what we keep from a completed child process
#[derive(Debug,Clone,Default)]
pub struct ExecOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn ok (stdout: impl ToString)->Self {
        ExecOutput { success: true, code: Some(0), stdout: stdout.to_string(), stderr: String::new() }
    }

    pub fn failed (code: i32, stderr: impl ToString)->Self {
        ExecOutput { success: false, code: Some(code), stdout: String::new(), stderr: stderr.to_string() }
    }

    pub fn status_string (&self)->String {
        match self.code {
            Some(c) => format!("exit code {c}"),
            None => "terminated by signal".to_string()
        }
    }
}

/// run the invocation to completion and collect its output. This only returns an `Err` if the
/// process could not be spawned or waited for - non-zero exit codes are reported through [`ExecOutput`]
pub async fn execute (invocation: &Invocation) -> io::Result<ExecOutput> {
    debug!("executing {invocation}");

    let output = invocation.to_command().output().await?;
    let res = ExecOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy( &output.stdout).to_string(),
        stderr: String::from_utf8_lossy( &output.stderr).to_string(),
    };
    debug!("{} completed with {}", invocation.program, res.status_string());

    Ok(res)
}
