use std::fmt;
use std::io::{BufRead, Write};

use quiz_core::Clock;
use quiz_core::model::ScoreTier;
use services::{
    DEFAULT_QUESTIONS_PER_SESSION, JsonFileSource, QuestionPrompt, QuestionSource, SessionService,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <file>] [--count <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions questions.json");
    eprintln!("  --count {DEFAULT_QUESTIONS_PER_SESSION}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_COUNT");
}

struct Args {
    questions_path: String,
    count: usize,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions_path = std::env::var("QUIZ_QUESTIONS")
            .ok()
            .unwrap_or_else(|| "questions.json".into());
        let mut count = std::env::var("QUIZ_COUNT")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(DEFAULT_QUESTIONS_PER_SESSION);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    questions_path = require_value(args, "--questions")?;
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    count = value
                        .parse()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or(ArgsError::InvalidCount { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions_path,
            count,
        })
    }
}

/// Read a 1-based option choice from stdin, re-prompting until it is valid.
///
/// Invalid input never reaches the session engine.
fn read_choice(
    input: &mut impl BufRead,
    output: &mut impl Write,
    option_count: usize,
) -> Result<usize, std::io::Error> {
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no answer given",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= option_count => return Ok(n),
            _ => writeln!(output, "Please enter a number between 1 and {option_count}.")?,
        }
    }
}

fn render_prompt(output: &mut impl Write, prompt: &QuestionPrompt) -> Result<(), std::io::Error> {
    writeln!(output)?;
    writeln!(output, "Question {} of {}", prompt.number, prompt.total)?;
    writeln!(output, "{}", prompt.prompt)?;
    for (i, option) in prompt.options.iter().enumerate() {
        writeln!(output, "  {}. {option}", i + 1)?;
    }
    Ok(())
}

fn tier_text(tier: ScoreTier) -> (&'static str, &'static str) {
    match tier {
        ScoreTier::Perfect => ("Perfect score!", "Your knowledge is flawless."),
        ScoreTier::Great => (
            "Great result!",
            "So close to perfect. Aim for it next time.",
        ),
        ScoreTier::Good => (
            "More than half correct!",
            "Keep going and work on the weak spots.",
        ),
        ScoreTier::Basic => ("Quiz complete.", "We look forward to your next attempt."),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Exactly one load precedes the session; load failures are fatal and the
    // distinct messages for unreadable, unparsable and empty data come from
    // the source error itself.
    let questions = JsonFileSource::new(&args.questions_path).load()?;

    let clock = Clock::default_clock();
    let mut rng = rand::rng();
    let mut session = SessionService::start(questions, args.count, &mut rng, clock.now())?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    while let Some(prompt) = session.current_prompt(&mut rng) {
        render_prompt(&mut output, &prompt)?;

        let choice = read_choice(&mut input, &mut output, prompt.options.len())?;
        let chosen = &prompt.options[choice - 1];
        let outcome = session.answer_current(chosen, clock.now())?;

        if outcome.is_correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "Incorrect. The answer is: {}", outcome.correct_answer)?;
        }
        if !outcome.explanation.is_empty() {
            writeln!(output, "{}", outcome.explanation)?;
        }
    }

    let summary = session.build_summary()?;
    let (title, message) = tier_text(summary.tier());

    writeln!(output)?;
    writeln!(output, "{title}")?;
    writeln!(
        output,
        "You scored {}% ({} of {} correct).",
        summary.percentage(),
        summary.correct(),
        summary.total()
    )?;
    writeln!(output, "{message}")?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
