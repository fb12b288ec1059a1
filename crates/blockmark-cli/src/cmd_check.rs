use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use blockmark_config::Config;
use blockmark_engine::{parse, roundtrip};

use crate::CheckArgs;

/// Problems found in one file.
#[derive(Debug)]
struct Report {
    /// 1-based line where the text first differs from its canonical form.
    first_difference: Option<usize>,
    unstable: bool,
    violations: Vec<String>,
}

impl Report {
    fn is_clean(&self) -> bool {
        self.first_difference.is_none() && !self.unstable && self.violations.is_empty()
    }
}

pub fn run(args: &CheckArgs, config: &Config) -> Result<()> {
    let files: Vec<PathBuf> = if args.files.is_empty() {
        config.document_files()?
    } else {
        args.files.clone()
    };

    if files.is_empty() {
        log::warn!("no files to check");
        return Ok(());
    }

    let mut failed = 0;
    for path in &files {
        let report = check_file(path)?;
        if report.is_clean() {
            println!("✓ {}", path.display());
            continue;
        }

        failed += 1;
        println!("✗ {}", path.display());
        if let Some(line) = report.first_difference {
            println!("    not canonical from line {line}");
        }
        if report.unstable {
            println!("    canonical form is not stable");
        }
        for violation in &report.violations {
            println!("    {violation}");
        }
    }

    println!();
    println!("{} file(s) checked, {failed} with problems", files.len());

    if failed > 0 {
        bail!("{failed} file(s) failed the check");
    }
    Ok(())
}

fn check_file(path: &Path) -> Result<Report> {
    let text = blockmark_engine::io::read_text(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(check_text(&text))
}

fn check_text(text: &str) -> Report {
    let rt = roundtrip::check(text);
    let violations = roundtrip::invariants(&parse(text))
        .iter()
        .map(ToString::to_string)
        .collect();

    Report {
        first_difference: (!rt.is_canonical).then(|| first_difference(text, &rt.canonical)),
        unstable: !rt.is_stable,
        violations,
    }
}

fn first_difference(text: &str, canonical: &str) -> usize {
    let mut ours = text.split('\n');
    let mut theirs = canonical.split('\n');
    let mut line = 1;
    loop {
        match (ours.next(), theirs.next()) {
            (Some(a), Some(b)) if a == b => line += 1,
            _ => return line,
        }
    }
}
