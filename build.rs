use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const COMMIT_VAR: &str = "SPEAKEASY_HELPERS_COMMIT";
const DATE_VAR: &str = "SPEAKEASY_HELPERS_BUILD_DATE";

fn main() {
    println!("cargo:rerun-if-env-changed={COMMIT_VAR}");
    println!("cargo:rerun-if-env-changed={DATE_VAR}");

    let commit = non_empty_env(COMMIT_VAR).or_else(git_commit).unwrap_or_else(|| "none".into());
    let date = non_empty_env(DATE_VAR).unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env={COMMIT_VAR}={commit}");
    println!("cargo:rustc-env={DATE_VAR}={date}");
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Short SHA of `HEAD`, read straight from the git directory.
fn git_commit() -> Option<String> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let git_dir = find_git_dir(&manifest_dir)?;

    let head_path = git_dir.join("HEAD");
    println!("cargo:rerun-if-changed={}", head_path.display());

    let head = fs::read_to_string(&head_path).ok()?;
    let head = head.trim();
    let sha = match head.strip_prefix("ref:") {
        Some(ref_path) => resolve_ref(&git_dir, ref_path.trim())?,
        None => head.to_string(),
    };

    let sha = sha.trim();
    if sha.is_empty() {
        return None;
    }
    Some(sha.chars().take(7).collect())
}

fn find_git_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let dot_git = current.join(".git");
        if dot_git.is_dir() {
            return Some(dot_git);
        }
        if dot_git.is_file() {
            // worktrees and submodules point at the real directory
            let text = fs::read_to_string(&dot_git).ok()?;
            let line = text.lines().next().unwrap_or("").trim();
            return line.strip_prefix("gitdir:").map(|path| current.join(path.trim()));
        }
        current = current.parent()?;
    }
}

fn resolve_ref(git_dir: &Path, ref_path: &str) -> Option<String> {
    let loose = git_dir.join(ref_path);
    if loose.exists() {
        println!("cargo:rerun-if-changed={}", loose.display());
        if let Ok(text) = fs::read_to_string(&loose) {
            return Some(text.trim().to_string());
        }
    }

    let packed = git_dir.join("packed-refs");
    println!("cargo:rerun-if-changed={}", packed.display());
    let text = fs::read_to_string(&packed).ok()?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('^'))
        .filter_map(|line| line.split_once(' '))
        .find(|(_, name)| *name == ref_path)
        .map(|(sha, _)| sha.to_string())
}
