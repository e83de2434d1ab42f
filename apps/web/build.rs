use std::process::Command;

fn main() {
    // config.rs reads these at compile time; rebuild when they change.
    println!("cargo:rerun-if-env-changed=PREFABRICA_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=PREFABRICA_API_HOST");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let sha = head_sha().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=PREFABRICA_WEB_GIT_SHA={sha}");
}

fn head_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    let trimmed = sha.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
