// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("THINGS_DB", "Path to the vendor database; overrides the config file."),
        ("THINGS_CONFIG", "Path to the config file; overrides the default location."),
        ("THINGS_LOG", "Log filter directives (e.g. `debug`, `things_core=trace`)."),
    ];

    for (name, doc) in &vars {
        writeln!(f, "/// {doc}")?;
        writeln!(f, "pub const {name}: &str = \"{name}\";")?;
    }

    Ok(())
}
