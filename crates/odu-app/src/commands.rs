use std::io::{Read, Write};

use anyhow::Context;
use odu_core::language::LanguageProcessor;
use odu_lang_kannada::KannadaProcessor;
use serde::Serialize;

use crate::cli::{Command, OverridesCommand, TextArgs};
use crate::render;

/// Output options shared by the one-shot commands
pub struct OutputOptions {
    pub json: bool,
    pub show_pronunciation: bool,
}

pub fn read_text(args: &TextArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Run a one-shot command against `processor`
pub fn run_command(
    command: &Command,
    processor: &KannadaProcessor,
    options: &OutputOptions,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Lookup { words, .. } => {
            let results: Vec<_> = words
                .iter()
                .map(|word| processor.lookup_recording(word))
                .collect();

            if options.json {
                return print_json(out, &results);
            }
            for result in &results {
                let pronunciation = options
                    .show_pronunciation
                    .then(|| processor.pronounce(&result.word));
                writeln!(out, "{}", render::lookup_line(result, pronunciation.as_deref()))?;
            }
        }
        Command::Tokens(args) => {
            let tokens = processor.tokenize(&read_text(args)?);

            if options.json {
                return print_json(out, &tokens);
            }
            for token in &tokens {
                let kind = if token.is_word { "word" } else { "gap" };
                writeln!(out, "{}\t{:?}", kind, token.text)?;
            }
        }
        Command::Sentences(args) => {
            let blocks = processor.blocks(&read_text(args)?);

            if options.json {
                return print_json(out, &blocks);
            }
            for block in &blocks {
                writeln!(out, "{}", block.text)?;
            }
        }
        Command::Gloss(args) => {
            let gloss = processor.gloss_text(&read_text(args)?);

            if options.json {
                return print_json(out, &gloss);
            }
            for line in render::gloss_lines(&gloss) {
                writeln!(out, "{}", line)?;
            }
        }
        Command::Pronounce(args) => {
            let text = read_text(args)?;
            let transliteration = processor.transliterate(&text);
            let pronunciation = processor.pronounce(&text);

            if options.json {
                return print_json(
                    out,
                    &serde_json::json!({
                        "text": text,
                        "transliteration": transliteration,
                        "pronunciation": pronunciation,
                    }),
                );
            }
            writeln!(out, "{}", transliteration.trim())?;
            writeln!(out, "{}", pronunciation)?;
        }
        Command::Overrides { action } => run_overrides(action, processor, options, out)?,
        Command::Config { .. } | Command::Read => {
            anyhow::bail!("{:?} is not a one-shot dictionary command", command)
        }
    }

    Ok(())
}

fn run_overrides(
    action: &OverridesCommand,
    processor: &KannadaProcessor,
    options: &OutputOptions,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let overrides = processor.overrides();

    match action {
        OverridesCommand::Init => {
            let Some(path) = overrides.overrides_path() else {
                anyhow::bail!("No overrides path configured");
            };
            processor.ensure_overrides_file();
            writeln!(out, "{}", path.display())?;
        }
        OverridesCommand::Set { word, meaning } => {
            processor.set_override(word, meaning);
            let key = processor.normalize(word);
            match overrides.lookup(&key) {
                Some(meaning) => writeln!(out, "{}\t{}", key, meaning)?,
                None => writeln!(out, "Removed override for {}", key)?,
            }
        }
        OverridesCommand::List => {
            let entries = overrides.entries();

            if options.json {
                let map: serde_json::Map<String, serde_json::Value> = entries
                    .into_iter()
                    .map(|(key, meaning)| (key, serde_json::Value::String(meaning)))
                    .collect();
                return print_json(out, &map);
            }
            for (key, meaning) in entries {
                writeln!(out, "{}\t{}", key, meaning)?;
            }
        }
    }

    Ok(())
}
