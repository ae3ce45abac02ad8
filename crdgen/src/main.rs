// Copyright 2023 The LogConf Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use kube::CustomResourceExt;
use logconf_crds::BcsLogConfig;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the names of the custom resource definition.
    #[arg(short, long)]
    list: bool,
    /// Names of the custom resource definition, separated by comma.
    #[arg(short, long)]
    names: Option<String>,
    /// Which output path to write to, If not specified, will print to stdout.
    #[arg(short, long)]
    output: Option<String>,
}

type Definition = (&'static str, serde_yaml::Value);

fn mappings() -> Result<BTreeMap<&'static str, Definition>> {
    Ok(BTreeMap::from([("bcslogconfig", ("bcslogconfig.yaml", to_value(&BcsLogConfig::crd())?))]))
}

fn to_value<T: Serialize>(data: &T) -> Result<serde_yaml::Value> {
    serde_yaml::to_value(data).context("failed to serialize the custom resource definition")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mappings = mappings()?;

    // Print the names of the custom resource definition sorted by name.
    if args.list {
        for name in mappings.keys() {
            println!("{}", name);
        }
        return Ok(());
    }

    let names = select(&mappings, args.names.as_deref())?;

    let dir = match &args.output {
        Some(output) => {
            let path = Path::new(output);
            if !path.exists() {
                bail!("The given output path is not exists");
            }
            Some(path)
        }
        None => None,
    };

    for name in names {
        let (filename, data) = &mappings[name];
        match dir {
            Some(dir) => write(&dir.join(filename), &render(data)?)?,
            None => println!("{}\n---\n", render(data)?),
        }
    }

    Ok(())
}

/// Parse the inputted names, if not specified, use all names.
fn select<'a>(mappings: &'a BTreeMap<&'static str, Definition>, names: Option<&'a str>) -> Result<Vec<&'a str>> {
    let Some(names) = names else {
        return Ok(mappings.keys().copied().collect());
    };

    let names: Vec<&str> = names.split(',').map(str::trim).collect();
    for name in &names {
        if !mappings.contains_key(name) {
            bail!("The given name is not valid: {}", name);
        }
    }

    Ok(names)
}

fn render(data: &serde_yaml::Value) -> Result<String> {
    serde_yaml::to_string(data).context("failed to render the custom resource definition")
}

fn write(path: &Path, data: &str) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Couldn't write to file: {}", path.display()))
}
