//! CLI entrypoint for friendtype
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use friendtype_application::{
    NoProgress, QuizConfig, QuizProgressNotifier, RunQuizUseCase, ScoreAnswersInput,
    ScoreAnswersUseCase, ScriptedAnswers,
};
use friendtype_domain::{QuizResult, TieBreak};
use friendtype_infrastructure::{ConfigLoader, FileConfig, QuestionBankLoader};
use friendtype_presentation::{
    Cli, ConsoleFormatter, ConsoleProgress, OutputConfig, OutputFormatter, ShareConfig,
    SimpleProgress, TerminalAnswerSource,
};
use std::path::Path;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting friendtype");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    file_config.validate()?;

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(file_config.output.format)
            .unwrap_or_default(),
        color: file_config.output.color,
        show_progress: !cli.quiet,
    };
    if !output.color {
        colored::control::set_override(false);
    }
    let share = ShareConfig::new(
        file_config.share.prefix.clone(),
        file_config.share.suffix.clone(),
    );

    // === Dependency Injection ===
    let quiz_config = build_quiz_config(&cli, &file_config)?;

    if cli.list_questions {
        print!("{}", ConsoleFormatter::format_question_list(quiz_config.bank()));
        return Ok(());
    }
    if cli.list_types {
        print!(
            "{}",
            ConsoleFormatter::format_type_list(quiz_config.descriptions())
        );
        return Ok(());
    }

    let result = if let Some(spec) = &cli.answers {
        run_scripted(quiz_config, spec)?
    } else if !cli.answer_text.is_empty() {
        ScoreAnswersUseCase::new(quiz_config)
            .execute(ScoreAnswersInput::Texts(cli.answer_text.clone()))?
    } else {
        match run_interactive(quiz_config, &output)? {
            Some(result) => result,
            None => {
                println!("Bye!");
                return Ok(());
            }
        }
    };

    println!("{}", ConsoleFormatter.render(&result, output.format, &share));

    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn build_quiz_config(cli: &Cli, file_config: &FileConfig) -> Result<QuizConfig> {
    let tie_break: TieBreak = cli
        .tie_break
        .map(Into::into)
        .unwrap_or(file_config.scoring.tie_break);

    let config = match cli.bank.as_ref().or(file_config.quiz.bank.as_ref()) {
        Some(path) => {
            let loaded = QuestionBankLoader::load(path)?;
            QuizConfig::new(loaded.bank, loaded.descriptions)
        }
        None => QuizConfig::default(),
    };

    debug!("Tie-break policy: {}", tie_break);
    Ok(config.with_tie_break(tie_break))
}

fn run_scripted(config: QuizConfig, spec: &str) -> Result<QuizResult> {
    let mut source = ScriptedAnswers::parse(spec).map_err(|e| anyhow!(e))?;
    let total = config.bank().count();
    if source.len() > total {
        bail!("Got {} answers for {} questions", source.len(), total);
    }
    Ok(RunQuizUseCase::new(config).execute(&mut source)?)
}

/// Returns `None` when the user quits before the last question
fn run_interactive(config: QuizConfig, output: &OutputConfig) -> Result<Option<QuizResult>> {
    let mut source = TerminalAnswerSource::new().context("Failed to open terminal prompt")?;
    let progress: Box<dyn QuizProgressNotifier> = match (output.show_progress, output.color) {
        (false, _) => Box::new(NoProgress),
        (true, true) => Box::new(ConsoleProgress::new()),
        (true, false) => Box::new(SimpleProgress),
    };

    match RunQuizUseCase::new(config).execute_with_progress(&mut source, progress.as_ref()) {
        Ok(result) => Ok(Some(result)),
        Err(e) if e.is_cancelled() => Ok(None),
        Err(e) => Err(e.into()),
    }
}
