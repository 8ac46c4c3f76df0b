use anyhow::{Context, Result, bail};
use attributed_text_config::{Config, load_registry};
use attributed_text_engine::{
    ChipEditor, ChipLabel, ContentNode, ModelRegistry, RichDocument, project,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{env, fs, process};

const USAGE: &str = "\
Usage: attributed-text-cli render <text-file> [registry.toml]
       attributed-text-cli backspace <text-file> <caret> [registry.toml]
       attributed-text-cli tap <text-file> <position> [registry.toml]";

enum Command {
    Render,
    Backspace { caret: usize },
    Tap { position: usize },
}

struct Invocation {
    command: Command,
    text_path: PathBuf,
    registry_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    let (command, rest) = match args {
        [_, cmd, rest @ ..] if cmd == "render" => (Command::Render, rest),
        [_, cmd, file, caret, rest @ ..] if cmd == "backspace" => {
            let caret = caret.parse().with_context(|| format!("invalid caret '{caret}'"))?;
            return Ok(invocation(Command::Backspace { caret }, file, rest));
        }
        [_, cmd, file, position, rest @ ..] if cmd == "tap" => {
            let position = position
                .parse()
                .with_context(|| format!("invalid position '{position}'"))?;
            return Ok(invocation(Command::Tap { position }, file, rest));
        }
        _ => bail!("unrecognised arguments"),
    };
    match rest {
        [file, extra @ ..] => Ok(invocation(command, file, extra)),
        [] => bail!("missing text file"),
    }
}

fn invocation(command: Command, file: &str, extra: &[String]) -> Invocation {
    Invocation {
        command,
        text_path: PathBuf::from(file),
        registry_path: extra.first().map(PathBuf::from),
    }
}

fn resolve_registry(explicit: Option<&Path>, config: &Config) -> Result<ModelRegistry> {
    match explicit.or(config.registry_path.as_deref()) {
        Some(path) => Ok(load_registry(path)?),
        None => {
            log::warn!("No model registry given; every token stays literal");
            Ok(ModelRegistry::new())
        }
    }
}

fn print_document(doc: &RichDocument) {
    println!("rendered:  {:?}", doc.rendered_text());
    println!("canonical: {:?}", project(doc));
    println!("length:    {}", doc.len());
    for (span, node) in doc.spans() {
        match node {
            ContentNode::Plain(run) => {
                println!("  {:>4}..{:<4} text  {:?}", span.start, span.end, run.text)
            }
            ContentNode::Chip(chip) => println!(
                "  {:>4}..{:<4} chip  {:?} <- {:?}",
                span.start,
                span.end,
                chip.rendered_text(),
                chip.canonical_content()
            ),
        }
    }
}

fn run(invocation: Invocation) -> Result<()> {
    let config = Config::load()?.unwrap_or_default();
    let registry = resolve_registry(invocation.registry_path.as_deref(), &config)?;
    let text = fs::read_to_string(&invocation.text_path)
        .with_context(|| format!("reading {}", invocation.text_path.display()))?;
    log::info!(
        "Loaded {} bytes and {} model(s)",
        text.len(),
        registry.len()
    );

    match invocation.command {
        Command::Render => {
            let doc = RichDocument::load(&text, &config.scanner()?, &registry, &config.styles);
            print_document(&doc);
        }
        Command::Backspace { caret } => {
            let mut editor = ChipEditor::new(config.editor_settings()?, registry);
            editor.set_text(&text);
            let snapped = editor.move_caret(caret)?;
            if snapped != caret {
                println!("caret {caret} snapped to {snapped}");
            }
            let outcome = editor.delete_backward()?;
            println!(
                "removed {}..{} (whole chip: {}), caret now {}",
                outcome.removed.start, outcome.removed.end, outcome.unit_deleted, outcome.caret
            );
            print_document(editor.document());
        }
        Command::Tap { position } => {
            let mut label = ChipLabel::new(config.label_settings()?, registry);
            label.set_text(&text);
            match label.tap(position, Instant::now()) {
                Some(model) => println!(
                    "tapped {:?} ({:?})",
                    model.display_text(),
                    model.canonical_token
                ),
                None => println!("no chip at {position}"),
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(invocation) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
