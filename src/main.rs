/*!
# Mindcaps - A Small Mood Journal

This file contains the main application flow, coordinating the various components
behind each subcommand.

## Usage

```text
mindcaps [--dir PATH] [--log-format text|json] [--log-level LEVEL] [-v] <COMMAND>

Commands:
  log        Save a mood entry and get feedback
  gratitude  Note something you are grateful for
  sleep      Log last night's sleep
  list       Show stored entries, newest last
  export     Write every entry to a JSON file
  analytics  Chart how often each value occurs
  summary    Streak, recent intensity and sleep trend
  breathe    Guided breathing: inhale, hold, exhale
  meditate   Meditation countdown
```

## Configuration

- `MINDCAPS_DIR`: The directory holding the store (defaults to "~/.mindcaps")
- `MINDCAPS_MOODS`: Comma-separated mood labels
- `RUST_LOG`: Log filter when `--log-level` is not given
*/

use chrono::Local;
use mindcaps::cli::render;
use mindcaps::cli::{prompt_export_destination, CliArgs, Commands, ListKind, LogArgs};
use mindcaps::config::Config;
use mindcaps::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use mindcaps::db::gratitudes::list_gratitudes;
use mindcaps::db::lock::StoreLock;
use mindcaps::db::moods::list_moods;
use mindcaps::db::sleep::list_sleep;
use mindcaps::db::Database;
use mindcaps::errors::AppResult;
use mindcaps::exercises::{start_breathing, start_meditation, BreathingConfig, ExerciseHandle};
use mindcaps::ops;
use std::io;
use std::process;
use std::time::Duration;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

/// The main entry point for the mindcaps application.
///
/// Errors are reported once on stderr and turn into exit code 1.
fn main() {
    let args = CliArgs::parse_args();
    init_tracing(&args);

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        command = command_name(&args.command)
    );
    let _guard = span.enter();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(args: &CliArgs) {
    let fallback = if args.verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(fallback));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if args.log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Log(_) => "log",
        Commands::Gratitude { .. } => "gratitude",
        Commands::Sleep { .. } => "sleep",
        Commands::List { .. } => "list",
        Commands::Export { .. } => "export",
        Commands::Analytics { .. } => "analytics",
        Commands::Summary => "summary",
        Commands::Breathe { .. } => "breathe",
        Commands::Meditate { .. } => "meditate",
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    // Exercises never touch the store.
    match args.command {
        Commands::Breathe { cycles, dwell } => {
            return run_breathing(BreathingConfig {
                cycles,
                dwell: Duration::from_secs(dwell),
            })
        }
        Commands::Meditate { minutes } => {
            return run_meditation(Duration::from_secs(minutes.saturating_mul(60)))
        }
        _ => {}
    }

    let config = Config::load(args.dir.as_deref())?;
    config.validate()?;
    config.ensure_data_dir()?;

    let _lock = StoreLock::acquire(&config.data_dir)?;
    let db = Database::open(&config.database_path())?;
    db.initialize_schema()?;
    debug!("Store ready");

    match args.command {
        Commands::Log(log) => cmd_log(&db, &config, log),
        Commands::Gratitude { text } => {
            let id = ops::add_gratitude(&db, &text)?;
            println!("Gratitude #{} saved.", id);
            Ok(())
        }
        Commands::Sleep { hours, quality } => {
            let id = ops::log_sleep(&db, hours, quality)?;
            println!("Sleep log #{} saved: {}h ({}).", id, hours, quality);
            Ok(())
        }
        Commands::List { kind, limit } => cmd_list(&db, kind, limit),
        Commands::Export { output } => cmd_export(&db, output),
        Commands::Analytics { by, chart } => {
            let counts = ops::distribution(&db, by)?;
            println!("{}", render::render_chart(&counts, chart));
            Ok(())
        }
        Commands::Summary => {
            let summary = ops::summary(&db, Local::now().date_naive())?;
            println!("{}", render::render_summary(&summary));
            Ok(())
        }
        Commands::Breathe { .. } | Commands::Meditate { .. } => Ok(()),
    }
}

fn cmd_log(db: &Database, config: &Config, log: LogArgs) -> AppResult<()> {
    let input = ops::MoodInput {
        mood: log.mood,
        intensity: log.intensity,
        note: log.note.unwrap_or_default(),
    };
    let outcome = ops::save_mood_entry(db, &config.moods, &input, &mut rand::thread_rng())?;
    println!("{}", outcome.feedback);
    Ok(())
}

fn cmd_list(db: &Database, kind: ListKind, limit: Option<usize>) -> AppResult<()> {
    let conn = db.get_conn()?;
    let text = match kind {
        ListKind::Moods => render::render_moods(render::most_recent(&list_moods(&conn)?, limit)),
        ListKind::Gratitude => {
            render::render_gratitudes(render::most_recent(&list_gratitudes(&conn)?, limit))
        }
        ListKind::Sleep => render::render_sleep(render::most_recent(&list_sleep(&conn)?, limit)),
    };
    println!("{}", text);
    Ok(())
}

fn cmd_export(db: &Database, output: Option<std::path::PathBuf>) -> AppResult<()> {
    let destination = match output {
        Some(path) => Some(path),
        None => {
            let suggested = ops::default_export_file_name(Local::now().date_naive());
            prompt_export_destination(&mut io::stdin().lock(), &mut io::stdout(), &suggested)?
        }
    };

    match ops::export_entries(db, destination.as_deref())? {
        Some(report) => println!("{}", render::render_export_report(&report)),
        None => println!("Export cancelled."),
    }
    Ok(())
}

fn exercise_runtime() -> AppResult<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// Stops the exercise on Ctrl-C. If the handler cannot be installed the
/// exercise simply runs to completion.
fn cancel_on_ctrl_c(handle: &ExerciseHandle) {
    handle.cancel_when(async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    });
}

fn report_stop(handle: &ExerciseHandle) {
    if handle.is_cancelled() {
        println!("Exercise stopped early.");
    }
}

fn run_breathing(config: BreathingConfig) -> AppResult<()> {
    info!("Starting breathing exercise: {} cycles", config.cycles);
    exercise_runtime()?.block_on(async {
        let (mut updates, handle) = start_breathing(config);
        cancel_on_ctrl_c(&handle);
        while let Some(update) = updates.recv().await {
            println!("{}", render::render_breathing(&update, config.cycles));
        }
        report_stop(&handle);
        handle.join().await
    })
}

fn run_meditation(total: Duration) -> AppResult<()> {
    info!("Starting meditation: {}s", total.as_secs());
    exercise_runtime()?.block_on(async {
        let (mut updates, handle) = start_meditation(total);
        cancel_on_ctrl_c(&handle);
        while let Some(update) = updates.recv().await {
            println!("{}", render::render_meditation(&update));
        }
        report_stop(&handle);
        handle.join().await
    })
}
