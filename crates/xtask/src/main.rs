use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

/// Workspace crates each crate may depend on. Anything not listed is a layering violation.
const ALLOWED: &[(&str, &[&str])] = &[
    ("quillpost-domain", &[]),
    ("quillpost-shared", &[]),
    ("quillpost-client", &["quillpost-domain", "quillpost-shared"]),
    ("xtask", &[]),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = violations(&metadata);

    if violations.is_empty() {
        println!("arch-check: {} crates OK", metadata.packages.len());
        return Ok(());
    }
    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layering violation(s)", violations.len())
}

fn violations(metadata: &Metadata) -> Vec<String> {
    let allowed: HashMap<&str, &[&str]> = ALLOWED.iter().copied().collect();
    let workspace: Vec<&str> = metadata.packages.iter().map(|p| p.name.as_str()).collect();

    let mut found = Vec::new();
    for package in &metadata.packages {
        let Some(permitted) = allowed.get(package.name.as_str()) else {
            found.push(format!("{} is not a known workspace crate", package.name));
            continue;
        };
        // Dev-dependencies may reach across layers for test fixtures.
        let internal = package.dependencies.iter().filter(|dep| {
            workspace.contains(&dep.name.as_str()) && dep.kind.as_deref() != Some("dev")
        });
        for dep in internal {
            if !permitted.contains(&dep.name.as_str()) {
                found.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }
    found
}
