//! `check` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::CheckArgs;
use host_adapter::load_paragraphs;

/// Check result for JSON output
#[derive(Serialize)]
struct CheckResult {
    compatible: bool,
    left: String,
    right: String,
    left_paragraphs: usize,
    right_paragraphs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_mismatch: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the `check` command
pub fn run_check(args: &CheckArgs) -> Result<()> {
    info!(
        left = %args.left.display(),
        right = %args.right.display(),
        "Checking document compatibility"
    );

    let result = check_fixtures(args);

    if args.json {
        let json =
            serde_json::to_string_pretty(&result).context("Failed to serialize check result")?;
        println!("{}", json);
    } else {
        print_check_result(&result);
    }

    if result.error.is_some() {
        anyhow::bail!("Compatibility check failed")
    }
    if result.compatible {
        Ok(())
    } else {
        anyhow::bail!("Documents are not compatible")
    }
}

fn check_fixtures(args: &CheckArgs) -> CheckResult {
    let left_path = args.left.display().to_string();
    let right_path = args.right.display().to_string();

    let left = match load_paragraphs(&args.left) {
        Ok(paragraphs) => paragraphs,
        Err(e) => {
            return CheckResult {
                compatible: false,
                left: left_path,
                right: right_path,
                left_paragraphs: 0,
                right_paragraphs: 0,
                first_mismatch: None,
                error: Some(format!("Failed to load {}: {}", args.left.display(), e)),
            }
        }
    };
    let right = match load_paragraphs(&args.right) {
        Ok(paragraphs) => paragraphs,
        Err(e) => {
            return CheckResult {
                compatible: false,
                left: left_path,
                right: right_path,
                left_paragraphs: left.len(),
                right_paragraphs: 0,
                first_mismatch: None,
                error: Some(format!("Failed to load {}: {}", args.right.display(), e)),
            }
        }
    };

    let result = sync_engine::check(&left, &right);

    CheckResult {
        compatible: result.compatible,
        left: left_path,
        right: right_path,
        left_paragraphs: left.len(),
        right_paragraphs: right.len(),
        first_mismatch: result.first_mismatch,
        error: None,
    }
}

fn print_check_result(result: &CheckResult) {
    if let Some(ref error) = result.error {
        println!("✗ Check failed");
        println!("\n  Error: {}", error);
        return;
    }

    if result.compatible {
        println!("✓ Documents are compatible");
        println!("\n  Left:  {} ({} paragraphs)", result.left, result.left_paragraphs);
        println!("  Right: {} ({} paragraphs)", result.right, result.right_paragraphs);
    } else {
        println!("✗ Documents are not compatible");
        println!("\n  Left:  {} ({} paragraphs)", result.left, result.left_paragraphs);
        println!("  Right: {} ({} paragraphs)", result.right, result.right_paragraphs);
        if let Some(index) = result.first_mismatch {
            println!("  Paragraph styles diverge at paragraph {}", index);
        }
    }
}
