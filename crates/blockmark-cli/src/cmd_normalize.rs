use anyhow::{Context, Result};
use blockmark_engine::roundtrip;

use crate::NormalizeArgs;

pub fn run(args: &NormalizeArgs) -> Result<()> {
    let text = crate::read_input(&args.input)?;
    let rt = roundtrip::check(&text);
    if !rt.is_stable {
        log::warn!(
            "{}: canonical form changes again when re-parsed",
            args.input.display()
        );
    }

    if !args.write || crate::is_stdin(&args.input) {
        print!("{}", rt.canonical);
        return Ok(());
    }

    if rt.is_canonical {
        log::info!("{} is already canonical", args.input.display());
        return Ok(());
    }

    blockmark_engine::io::write_text(&args.input, &rt.canonical)
        .with_context(|| format!("cannot write {}", args.input.display()))?;
    println!("normalized {}", args.input.display());
    Ok(())
}
