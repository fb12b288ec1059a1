use anyhow::{Context, Result};
use blockmark_config::Config;
use blockmark_engine::io;

use crate::ParseArgs;

pub fn run(args: &ParseArgs, config: &Config) -> Result<()> {
    let text = crate::read_input(&args.input)?;
    let doc = blockmark_engine::parse(&text);
    log::info!("parsed {} block(s) from {}", doc.len(), args.input.display());

    let pretty = config.pretty_json && !args.compact;
    match &args.output {
        Some(path) => io::write_json(path, &doc, pretty)
            .with_context(|| format!("cannot write {}", path.display())),
        None => {
            let json = doc.to_json(pretty).context("cannot encode document as JSON")?;
            println!("{json}");
            Ok(())
        }
    }
}
