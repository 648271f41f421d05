//! XTask - build automation for Taqwim
//!
//! # Usage
//! ```sh
//! cargo xtask dist-web        # Build WASM package for the web client
//! cargo xtask dev-web         # WASM + a local converter test page
//! cargo xtask check           # fmt, clippy and tests across the workspace
//! cargo xtask publish-crates  # Publish crates to crates.io
//! ```

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let dry_run = args.iter().any(|a| a == "--dry-run" || a == "-n");

    match args[1].as_str() {
        "dist-web" => dist_web()?,
        "dev-web" => dev_web()?,
        "check" => check()?,
        "build-all" => build_all()?,
        "sync-versions" => sync_versions()?,
        "publish-npm" => publish_npm(dry_run)?,
        "publish-crates" => publish_crates(dry_run)?,
        "-h" | "--help" | "help" => print_usage(),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    println!(r#"
Taqwim XTask - Build Automation

USAGE:
    cargo xtask <COMMAND> [OPTIONS]

BUILD COMMANDS:
    dist-web       Build WASM package for the web client
                   Output: dist/web/, pkg/

    dev-web        Build WASM and write a local converter test page
                   Output: dist/dev/

    check          cargo fmt --check, clippy and the workspace tests

    build-all      Sync versions, build the CLI (release) and the WASM package

    sync-versions  Sync version from Cargo.toml to pkg/package.json

PUBLISH COMMANDS:
    publish-crates  Publish all crates to crates.io
    publish-npm     Publish the WASM package to NPM

OPTIONS:
    --dry-run, -n   Validate without actually publishing
"#);
}

// =============================================================================
// Helper Functions
// =============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let root = PathBuf::from(manifest_dir)
        .parent()
        .context("Failed to find project root")?
        .to_path_buf();
    Ok(root)
}

fn run_cmd(cmd: &str, args: &[&str]) -> Result<()> {
    run_cmd_in_dir(&project_root()?, cmd, args)
}

fn run_cmd_in_dir(dir: &Path, cmd: &str, args: &[&str]) -> Result<()> {
    println!("  -> [{}] {} {}", dir.display(), cmd, args.join(" "));

    let status = Command::new(cmd)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to start: {} {}", cmd, args.join(" ")))?;

    if !status.success() {
        bail!("Command '{}' failed with exit code: {:?}", cmd, status.code());
    }
    Ok(())
}

fn command_exists(cmd: &str) -> bool {
    let finder = if cfg!(windows) { "where" } else { "which" };
    Command::new(finder)
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Reads `version` from the `[workspace.package]` table.
fn read_cargo_version() -> Result<String> {
    let content = fs::read_to_string(project_root()?.join("Cargo.toml"))?;
    parse_workspace_version(&content).context("Could not find version in Cargo.toml")
}

fn parse_workspace_version(manifest: &str) -> Option<String> {
    let mut in_package = false;
    for line in manifest.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_package = line == "[workspace.package]";
            continue;
        }
        if in_package && line.starts_with("version") && line.contains('=') {
            return line.split('"').nth(1).map(str::to_string);
        }
    }
    None
}

fn set_json_version(content: &str, version: &str) -> String {
    content
        .lines()
        .map(|line| {
            if line.trim().starts_with("\"version\"") {
                let indent = &line[..line.len() - line.trim_start().len()];
                let comma = if line.trim_end().ends_with(',') { "," } else { "" };
                format!("{indent}\"version\": \"{version}\"{comma}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Task: sync-versions
// =============================================================================

fn sync_versions() -> Result<()> {
    let root = project_root()?;
    let version = read_cargo_version()?;

    println!("Syncing version {} to package manifests...", version);

    let pkg_json = root.join("pkg").join("package.json");
    if pkg_json.exists() {
        let content = fs::read_to_string(&pkg_json)?;
        fs::write(&pkg_json, set_json_version(&content, &version))?;
        println!("  Updated pkg/package.json");
    }

    Ok(())
}

// =============================================================================
// Task: dist-web
// =============================================================================

fn dist_web() -> Result<()> {
    println!("\nBuilding WASM package...\n");

    let root = project_root()?;
    let wasm_dir = root.join("bindings").join("taqwim_wasm");
    let dist_web = root.join("dist").join("web");
    let pkg_dir = root.join("pkg");

    if !command_exists("wasm-pack") {
        println!("  wasm-pack not found. Installing...");
        run_cmd("cargo", &["install", "wasm-pack"])?;
    }

    // ES module for the browser client -> dist/web
    run_cmd_in_dir(&wasm_dir, "wasm-pack", &[
        "build",
        "--target", "web",
        "--out-dir", dist_web.to_string_lossy().as_ref(),
        "--out-name", "taqwim",
    ])?;

    // Bundler target -> pkg (for NPM)
    run_cmd_in_dir(&wasm_dir, "wasm-pack", &[
        "build",
        "--target", "bundler",
        "--out-dir", pkg_dir.to_string_lossy().as_ref(),
        "--out-name", "taqwim",
    ])?;

    let pkg_json = pkg_dir.join("package.json");
    if pkg_json.exists() {
        let content = fs::read_to_string(&pkg_json)?;
        let patched = content.replace("\"name\": \"taqwim-wasm\"", "\"name\": \"@taqwim/hijri\"");
        fs::write(&pkg_json, patched)?;
        println!("  Patched package.json: name = @taqwim/hijri");
    }

    println!("\nWASM build complete!");
    println!("   Web: dist/web/");
    println!("   NPM: pkg/");
    Ok(())
}

// =============================================================================
// Task: dev-web
// =============================================================================

const DEV_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Taqwim - WASM Test</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
        input, button { padding: 0.5rem; font-size: 1rem; margin-right: 0.5rem; }
        #result { margin-top: 1rem; padding: 1rem; background: #f5f5f5; white-space: pre-wrap; }
    </style>
</head>
<body>
    <h1>Taqwim - Hijri Converter</h1>
    <div>
        <input type="date" id="dateInput">
        <input type="number" id="adjustment" value="0" min="-30" max="30">
        <button id="convert">Convert</button>
    </div>
    <div id="result">Pick a date and click Convert</div>

    <script type="module">
        import init, { TaqwimCalendar } from './taqwim.js';
        await init();

        const input = document.getElementById('dateInput');
        const d = new Date();
        input.value = `${d.getFullYear()}-${String(d.getMonth() + 1).padStart(2, '0')}-${String(d.getDate()).padStart(2, '0')}`;

        document.getElementById('convert').onclick = () => {
            const out = document.getElementById('result');
            try {
                const cal = new TaqwimCalendar(Number(document.getElementById('adjustment').value));
                const h = cal.toHijri(input.value);
                const events = cal.majorEvents(input.value);
                out.textContent = `${h.hDay} ${h.hMonthName} ${h.hYear} AH\nEvents: ${events.join(', ') || 'None'}`;
            } catch (e) {
                out.textContent = `Error: ${e}`;
            }
        };
    </script>
</body>
</html>"#;

fn dev_web() -> Result<()> {
    let root = project_root()?;
    let dist_dev = root.join("dist").join("dev");

    dist_web()?;
    ensure_dir(&dist_dev)?;

    for entry in fs::read_dir(root.join("dist").join("web"))? {
        let entry = entry?;
        let src = entry.path();
        if src.is_file() {
            fs::copy(&src, dist_dev.join(entry.file_name()))?;
        }
    }

    fs::write(dist_dev.join("index.html"), DEV_PAGE)?;

    println!("\nDevelopment page ready in dist/dev/");
    println!("   python -m http.server 8080 -d dist/dev");
    Ok(())
}

// =============================================================================
// Task: check
// =============================================================================

fn check() -> Result<()> {
    run_cmd("cargo", &["fmt", "--all", "--check"])?;
    run_cmd("cargo", &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
    run_cmd("cargo", &["test", "--workspace"])?;
    Ok(())
}

// =============================================================================
// Task: build-all
// =============================================================================

fn build_all() -> Result<()> {
    sync_versions()?;
    run_cmd("cargo", &["build", "--release", "-p", "taqwim-cli"])?;
    dist_web()?;

    println!("\nAll builds complete!");
    println!(" - CLI: target/release/taqwim");
    println!(" - WASM/Web: dist/web/");
    println!(" - NPM: pkg/");
    Ok(())
}

// =============================================================================
// Task: publish-npm
// =============================================================================

fn publish_npm(dry_run: bool) -> Result<()> {
    let pkg_dir = project_root()?.join("pkg");
    if !pkg_dir.join("package.json").exists() {
        bail!("pkg/package.json missing, run `cargo xtask dist-web` first");
    }

    let mut args = vec!["publish", "--access", "public"];
    if dry_run {
        args.push("--dry-run");
    }
    run_cmd_in_dir(&pkg_dir, "npm", &args)
}

// =============================================================================
// Task: publish-crates
// =============================================================================

/// Workspace crates in dependency order (leaves first, facade last)
const WORKSPACE_CRATES: &[(&str, &str)] = &[
    ("taqwim-types", "taqwim-types"),       // No internal deps
    ("taqwim-calendar", "taqwim-calendar"), // Depends on taqwim-types
    ("taqwim-events", "taqwim-events"),     // Depends on taqwim-types, taqwim-calendar
    ("taqwim-core", "taqwim_core"),         // Depends on all above
    ("taqwim", "taqwim"),                   // Facade
    ("taqwim-cli", "taqwim-cli"),
];

fn publish_crates(dry_run: bool) -> Result<()> {
    let root = project_root()?;

    for (crate_name, dir) in WORKSPACE_CRATES {
        println!("  Publishing {}...", crate_name);

        let mut args = vec!["publish"];
        if dry_run {
            args.push("--dry-run");
        }

        let output = Command::new("cargo")
            .args(&args)
            .current_dir(root.join("crates").join(dir))
            .output()
            .with_context(|| format!("Failed to run cargo publish for {}", crate_name))?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            println!("  {} published!", crate_name);
        } else if stderr.contains("already exists") {
            println!("  {} already published, skipping...", crate_name);
            continue;
        } else {
            eprintln!("{}", String::from_utf8_lossy(&output.stdout));
            eprintln!("{}", stderr);
            bail!("Failed to publish {}", crate_name);
        }

        if !dry_run {
            println!("  Waiting 30s for crates.io index update...");
            std::thread::sleep(std::time::Duration::from_secs(30));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workspace_version() {
        let manifest = "[workspace]\nmembers = []\n\n[workspace.package]\nversion = \"0.3.0\"\nedition = \"2024\"\n";
        assert_eq!(parse_workspace_version(manifest).as_deref(), Some("0.3.0"));
        assert_eq!(parse_workspace_version("[package]\nversion = \"1.0.0\"\n"), None);
    }

    #[test]
    fn test_set_json_version() {
        let json = "{\n  \"name\": \"x\",\n  \"version\": \"0.1.0\",\n  \"files\": []\n}";
        let updated = set_json_version(json, "0.3.0");
        assert!(updated.contains("  \"version\": \"0.3.0\","));
        assert!(updated.contains("\"name\": \"x\""));
    }
}
