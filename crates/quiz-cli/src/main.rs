mod shell;

use clap::{Parser, Subcommand};
use quiz_spec::{
    AnswerSet, Breakpoints, Layout, LearnMoreDeck, Navigation, OnboardingContent, QuizFlow,
    QuizSession, QuizSpec, Viewport, build_render_payload, render_json_ui, render_text,
};
use serde_json::json;
use shell::{Command as ShellCommand, QuizPresenter, RenderMode};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Text shell for the intake quiz",
    long_about = "Runs the intake quiz interactively or from a script, checks quiz datasets and computes responsive layout values"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Take the quiz interactively.
    Run {
        /// Quiz dataset JSON (defaults to the built-in hair-loss quiz).
        #[arg(long, value_name = "SPEC", env = "INTAKE_QUIZ_SPEC")]
        spec: Option<PathBuf>,
        /// Show status lines and input hints (text format only).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Also print the collected answers as JSON.
        #[arg(long)]
        answers_json: bool,
        /// Screen format: a text prompt or one JSON render payload per screen.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Play a comma-separated list of choices and print the final screen.
    Replay {
        #[arg(long, value_name = "SPEC", env = "INTAKE_QUIZ_SPEC")]
        spec: Option<PathBuf>,
        /// Option numbers to submit, `b` to go back (e.g. `0,1,b,1,0`).
        #[arg(long, value_name = "CHOICES")]
        choices: String,
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Load a quiz dataset and summarize it.
    Check {
        #[arg(long, value_name = "SPEC", env = "INTAKE_QUIZ_SPEC")]
        spec: Option<PathBuf>,
    },
    /// Print responsive layout values for a viewport.
    Layout {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        /// JSON file overriding breakpoint thresholds.
        #[arg(long, value_name = "FILE")]
        breakpoints: Option<PathBuf>,
    },
    /// Print the onboarding home screen copy.
    Onboarding {
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Page through the learn-more slides.
    LearnMore {
        /// Slide to start from.
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Print the JSON schema of quiz datasets.
    Schema,
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            spec,
            verbose,
            answers_json,
            format,
        } => run_interactive(spec, verbose, answers_json, format),
        Command::Replay {
            spec,
            choices,
            format,
        } => run_replay(spec, &choices, format),
        Command::Check { spec } => run_check(spec),
        Command::Layout {
            width,
            height,
            breakpoints,
        } => run_layout(width, height, breakpoints),
        Command::Onboarding { format } => run_onboarding(format),
        Command::LearnMore { start, format } => run_learn_more(start, format),
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&QuizSpec::json_schema())?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("INTAKE_QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_spec(path: Option<PathBuf>) -> CliResult<QuizSpec> {
    let spec = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading quiz spec");
            let contents = fs::read_to_string(&path)?;
            QuizSpec::from_json(&contents)?
        }
        None => QuizSpec::builtin()?,
    };
    Ok(spec)
}

fn run_interactive(
    spec_path: Option<PathBuf>,
    verbose: bool,
    answers_json: bool,
    format: RenderMode,
) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    let mut session = QuizSession::for_spec(&spec);
    let mut presenter = QuizPresenter::new(format, verbose, answers_json);
    let show_prompt = format == RenderMode::Text;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut flow = QuizFlow::new(&spec, &mut session);
    loop {
        let payload = build_render_payload(&spec, flow.session());
        presenter.show_screen(&payload)?;

        if flow.state().is_terminal() {
            presenter.show_outcome(&payload);
            presenter.show_answers(&AnswerSet::from_session(&spec, flow.session()));
            flow.on_go_home();
            break;
        }

        let Some(line) = prompt_line(&mut input, show_prompt)? else {
            return Err("input closed before the quiz finished".into());
        };

        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Exit) => return Err("quiz aborted by user".into()),
            Ok(ShellCommand::Back) => {
                if flow.on_back() == Navigation::Home {
                    eprintln!("Returning home.");
                    break;
                }
            }
            Ok(ShellCommand::Next) => {
                if flow.session().selected_option().is_none() {
                    presenter.show_input_error("choose an option first");
                    continue;
                }
                flow.on_next();
            }
            Ok(ShellCommand::Select(option)) => {
                if flow.on_select_option(option) {
                    flow.on_next();
                } else {
                    presenter.show_input_error(&format!("option {} is not available", option));
                }
            }
            Err(err) => presenter.show_input_error(&err),
        }
    }

    Ok(())
}

fn prompt_line(input: &mut impl BufRead, show_prompt: bool) -> CliResult<Option<String>> {
    if show_prompt {
        print!("> ");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_choices(raw: &str) -> Result<Vec<ShellCommand>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match ShellCommand::parse(segment)? {
            step @ (ShellCommand::Select(_) | ShellCommand::Back) => Ok(step),
            _ => Err(format!(
                "'{}' is not a choice; use option numbers or 'b'",
                segment
            )),
        })
        .collect()
}

fn run_replay(spec_path: Option<PathBuf>, choices: &str, format: RenderMode) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    let steps = parse_choices(choices)?;
    let mut session = QuizSession::for_spec(&spec);
    let mut flow = QuizFlow::new(&spec, &mut session);

    for step in steps {
        if flow.state().is_terminal() {
            warn!(?step, "quiz already finished; ignoring remaining choices");
            break;
        }
        match step {
            ShellCommand::Select(option) => {
                if !flow.on_select_option(option) {
                    warn!(option, state = ?flow.state(), "option not available; skipping");
                    continue;
                }
                flow.on_next();
            }
            ShellCommand::Back => {
                if flow.on_back() == Navigation::Home {
                    println!("Returned home.");
                    return Ok(());
                }
            }
            ShellCommand::Next | ShellCommand::Exit => {}
        }
    }

    let payload = build_render_payload(&spec, flow.session());
    match format {
        RenderMode::Text => {
            println!("{}", render_text(&payload));
            if flow.state().is_terminal() {
                let answers = flow
                    .session()
                    .answers()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                println!("Answers: {}", answers.join(", "));
            }
        }
        RenderMode::Json => {
            let answers = AnswerSet::from_session(&spec, flow.session());
            let output = json!({
                "ui": render_json_ui(&payload),
                "answers": answers,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn run_check(spec_path: Option<PathBuf>) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    println!("Quiz: {} ({}) v{}", spec.title, spec.id, spec.version);
    println!("Questions: {}", spec.total_questions());
    for (index, question) in spec.questions.iter().enumerate() {
        let rejections = question
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.is_rejection)
            .map(|(option_index, _)| option_index.to_string())
            .collect::<Vec<_>>();
        let mut line = format!(
            "  [{}] {} {} ({} options",
            index,
            question.kind.as_str(),
            question.prompt,
            question.options.len()
        );
        if !rejections.is_empty() {
            line.push_str(&format!(", rejects on {}", rejections.join("/")));
        }
        line.push(')');
        println!("{}", line);
    }
    Ok(())
}

fn run_layout(width: f64, height: f64, breakpoints_path: Option<PathBuf>) -> CliResult<()> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err("viewport dimensions must be finite and non-negative".into());
    }
    let breakpoints = match breakpoints_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Breakpoints::default(),
    };
    let layout = Layout::new(Viewport::new(width, height), &breakpoints);
    let output = json!({
        "width": width,
        "height": height,
        "portrait": layout.viewport().is_portrait(),
        "device_class": layout.device_class(),
        "is_mobile": layout.is_mobile(),
        "is_tablet": layout.is_tablet(),
        "is_desktop": layout.is_desktop(),
        "container_width": layout.container_width(),
        "hero": layout.hero_metrics(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_onboarding(format: RenderMode) -> CliResult<()> {
    let content = OnboardingContent::builtin()?;
    match format {
        RenderMode::Text => {
            println!("{}", content.heading1);
            println!("{}", content.heading2);
            println!("{}", content.subtitle);
            println!("[{}] [{}]", content.learn_more_text, content.button_text);
        }
        RenderMode::Json => println!("{}", serde_json::to_string_pretty(&content)?),
    }
    Ok(())
}

fn run_learn_more(start: usize, format: RenderMode) -> CliResult<()> {
    let deck = LearnMoreDeck::builtin()?;
    if deck.item(start).is_none() {
        return Err(format!(
            "slide {} does not exist; the deck has {} slides",
            start,
            deck.total_items()
        )
        .into());
    }

    let mut slides = Vec::new();
    let mut current = start;
    while let Some(item) = deck.item(current) {
        slides.push((current, item));
        let action = deck.next_action(current);
        if action.is_last {
            break;
        }
        current = action.next_index;
    }

    match format {
        RenderMode::Text => {
            for (index, item) in &slides {
                println!("{}/{} {}", index + 1, deck.total_items(), item.title);
                println!("  {}", item.header);
                println!("  {}", item.subtitle);
                println!("  image: {}", item.image);
            }
            println!("Back to home.");
        }
        RenderMode::Json => {
            let items = slides.iter().map(|(_, item)| item).collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }
    Ok(())
}
