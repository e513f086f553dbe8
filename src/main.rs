// SPDX-License-Identifier: MIT
//
// randpub — placeholder content from the command line.
//
// This binary wires the two libraries to a small argument parser:
//
//   rp-color → random colors, readable colors, color pairs
//   rp-text  → pseudo-language words, titles, sentences, paragraphs
//
// Usage:
//
//   randpub [--seed N] [--set DIRECTIVES]... COMMAND [ARG]
//
//   color                  one random color
//   contrasting [RRGGBB]   a color readable on RRGGBB (default white)
//   pair                   background and readable foreground
//   word [LETTERS]
//   title [WORDS]
//   sentence [WORDS]
//   paragraph [SENTENCES]
//   options                text options after every --set is applied
//
// Query directives given to --set (`ms?`, `all`, a bare numeric name)
// print their answers before the command output.
//
// A seed (from --seed or RANDPUB_SEED) makes output reproducible.
// Logging goes through env_logger; set RUST_LOG=debug to watch the
// contrast search.

use std::env;
use std::process;

use anyhow::{Context, Result, bail};
use log::debug;

use rp_color::{Color, ColorRandomizer};
use rp_text::{StringRandomizer, TextGenerator, TextOptions};

// ─── Command line ───────────────────────────────────────────────────────────

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Color,
    Contrasting(Option<Color>),
    Pair,
    Word(Option<usize>),
    Title(Option<usize>),
    Sentence(Option<usize>),
    Paragraph(Option<usize>),
    Options,
    Help,
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    seed: Option<u64>,
    settings: Vec<String>,
    command: Command,
}

const USAGE: &str = "usage: randpub [--seed N] [--set DIRECTIVES]... \
                     <color|contrasting|pair|word|title|sentence|paragraph|options> [ARG]";

fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut seed = None;
    let mut settings = Vec::new();
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                seed = Some(parse_seed(value)?);
            }
            "--set" => {
                let value = iter.next().context("--set needs a value")?;
                settings.push(value.clone());
            }
            "-h" | "--help" => {
                return Ok(Invocation {
                    seed,
                    settings,
                    command: Command::Help,
                });
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let (name, rest) = positional.split_first().context(USAGE)?;
    let arg = match rest {
        [] => None,
        [one] => Some(*one),
        _ => bail!("too many arguments\n{USAGE}"),
    };

    let count = |value: Option<&str>| -> Result<Option<usize>> {
        value
            .map(|v| v.parse::<usize>().with_context(|| format!("not a count: {v}")))
            .transpose()
    };

    let command = match *name {
        "color" => Command::Color,
        "contrasting" => Command::Contrasting(arg.map(str::parse).transpose()?),
        "pair" => Command::Pair,
        "word" => Command::Word(count(arg)?),
        "title" => Command::Title(count(arg)?),
        "sentence" => Command::Sentence(count(arg)?),
        "paragraph" => Command::Paragraph(count(arg)?),
        "options" => Command::Options,
        other => bail!("unknown command: {other}\n{USAGE}"),
    };

    if arg.is_some()
        && matches!(command, Command::Color | Command::Pair | Command::Options)
    {
        bail!("{name} takes no argument");
    }

    Ok(Invocation {
        seed,
        settings,
        command,
    })
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .parse()
        .with_context(|| format!("invalid seed: {value}"))
}

// ─── Execution ──────────────────────────────────────────────────────────────

fn run(invocation: &Invocation) -> Result<String> {
    if invocation.command == Command::Help {
        return Ok(USAGE.to_string());
    }

    let mut options = TextOptions::default();
    let mut lines = Vec::new();
    for directives in &invocation.settings {
        let shown = options
            .apply_str(directives)
            .with_context(|| format!("--set {directives}"))?;
        debug!("--set {directives}: {} line(s) shown", shown.len());
        lines.extend(shown.into_iter().filter(|line| !line.is_empty()));
    }

    let (mut colors, texter) = match invocation.seed {
        Some(seed) => (ColorRandomizer::seeded(seed), StringRandomizer::seeded(seed)),
        None => (ColorRandomizer::new(), StringRandomizer::new()),
    };
    let mut texter = texter.with_options(options);
    let text: &mut dyn TextGenerator = &mut texter;

    let output = match &invocation.command {
        Command::Color => colors.random_color().to_string(),
        Command::Contrasting(bg) => {
            let bg = bg.unwrap_or(colors.background);
            colors.contrasting_random_color_on(bg).to_string()
        }
        Command::Pair => {
            let (bg, fg) = colors.random_color_pair();
            format!("{bg} {fg}")
        }
        Command::Word(letters) => text.random_word(*letters),
        Command::Title(words) => text.random_title(*words),
        Command::Sentence(words) => text.random_sentence(*words),
        Command::Paragraph(sentences) => text.random_paragraph(*sentences),
        Command::Options => texter
            .options
            .apply(&rp_text::SetDirective::ShowAll)?
            .unwrap_or_default(),
        Command::Help => USAGE.to_string(),
    };
    lines.push(output);
    Ok(lines.join("\n"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|mut invocation| {
        if invocation.seed.is_none() {
            if let Ok(value) = env::var("RANDPUB_SEED") {
                invocation.seed = Some(parse_seed(&value).context("RANDPUB_SEED")?);
            }
        }
        run(&invocation)
    });

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("randpub: {e:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    fn run_line(line: &str) -> Result<String> {
        run(&parse_args(&args(line))?)
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_flags_and_command() {
        let inv = parse_args(&args("--seed 9 --set ml=4 --set noci word 6")).unwrap();
        assert_eq!(
            inv,
            Invocation {
                seed: Some(9),
                settings: vec!["ml=4".into(), "noci".into()],
                command: Command::Word(Some(6)),
            }
        );
    }

    #[test]
    fn parse_contrasting_background() {
        let inv = parse_args(&args("contrasting 000080")).unwrap();
        assert_eq!(inv.command, Command::Contrasting(Some(Color::new(0, 0, 0x80))));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args("bogus")).is_err());
        assert!(parse_args(&args("word many")).is_err());
        assert!(parse_args(&args("contrasting blue")).is_err());
        assert!(parse_args(&args("pair 3")).is_err());
        assert!(parse_args(&args("--seed")).is_err());
        assert!(parse_args(&args("--seed x color")).is_err());
        assert!(parse_args(&args("sentence 1 2")).is_err());
    }

    // ── Running ───────────────────────────────────────────────────────────

    #[test]
    fn seeded_runs_are_reproducible() {
        for line in ["--seed 3 pair", "--seed 3 paragraph 2", "--seed 3 title"] {
            assert_eq!(run_line(line).unwrap(), run_line(line).unwrap(), "{line}");
        }
    }

    #[test]
    fn contrasting_on_black_is_bright() {
        let out = run_line("--seed 5 contrasting 000000").unwrap();
        let color: Color = out.parse().unwrap();
        assert!(color.is_brightness_contrasting(Color::BLACK), "{out}");
    }

    #[test]
    fn pair_prints_two_css_colors() {
        let out = run_line("--seed 1 pair").unwrap();
        let parts: Vec<&str> = out.split(' ').collect();
        assert_eq!(parts.len(), 2);
        for part in parts {
            assert!(part.starts_with('#') && part.parse::<Color>().is_ok(), "{part}");
        }
    }

    #[test]
    fn settings_reach_the_text_generator() {
        let out = run_line("--seed 2 --set pu=0 --set cap=0 --set noci sentence 5").unwrap();
        assert_eq!(out.split(' ').count(), 5);
        assert!(out.bytes().all(|b| b.is_ascii_lowercase() || b == b' '), "{out}");
    }

    #[test]
    fn options_lists_applied_settings() {
        assert_eq!(
            run_line("--set mw=3 --set pu=0.5 options").unwrap(),
            "maxletters=10 maxwords=3 maxsentences=10 capinitial \
             capitalization=0.2 punctuation=0.5"
        );
    }

    #[test]
    fn help_is_a_successful_command() {
        assert_eq!(parse_args(&args("--seed 1 --help")).unwrap().command, Command::Help);
        assert_eq!(run_line("-h").unwrap(), USAGE);
    }

    #[test]
    fn set_queries_are_printed_before_output() {
        let out = run_line("--seed 1 --set ms? word 3").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2, "{out}");
        assert_eq!(lines[0], "maxsentences=10");
        assert!(lines[1].bytes().all(|b| b.is_ascii_lowercase()), "{out}");

        let out = run_line("--set mw=4 --set mw word 3").unwrap();
        assert!(out.starts_with("maxwords=4\n"), "{out}");
    }

    #[test]
    fn plain_assignments_print_nothing_extra() {
        let out = run_line("--seed 1 --set mw=4 word 3").unwrap();
        assert_eq!(out.lines().count(), 1, "{out}");
    }

    #[test]
    fn bad_setting_is_reported() {
        let err = run_line("--set pu=2 word").unwrap_err();
        assert!(format!("{err:#}").contains("invalid value for pu"), "{err:#}");
    }
}
