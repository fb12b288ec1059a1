use anyhow::{Context, Result};
use blockmark_engine::roundtrip;
use blockmark_engine::{Document, io};

use crate::SerializeArgs;

pub fn run(args: &SerializeArgs) -> Result<()> {
    let doc = if crate::is_stdin(&args.input) {
        Document::from_json(&crate::read_input(&args.input)?)
            .context("stdin is not a block document")?
    } else {
        io::read_json(&args.input)
            .with_context(|| format!("cannot load {}", args.input.display()))?
    };

    for violation in roundtrip::invariants(&doc) {
        log::warn!("{}: {violation}", args.input.display());
    }

    match &args.output {
        Some(path) => io::write_document(path, &doc)
            .with_context(|| format!("cannot write {}", path.display())),
        None => {
            println!("{}", doc.serialize());
            Ok(())
        }
    }
}
