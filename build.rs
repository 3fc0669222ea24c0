use std::process::Command;

/// Run `git rev-parse` with the given args, falling back to "unknown"
/// outside a git checkout.
fn git_hash(args: &[&str]) -> String {
    Command::new("git")
        .arg("rev-parse")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Capture git commit hashes at build time (short for display, full for reference)
    println!("cargo:rustc-env=GIT_HASH={}", git_hash(&["--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_hash(&["HEAD"]));

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
