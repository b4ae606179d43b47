//! `beam` command: drive the Beam store from the terminal.
//!
//! Each invocation rehydrates the store from the snapshot slot, applies one
//! operation, and exits. The slot write mirrors the change, so successive
//! invocations see each other's persisted fields.

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use beam::config::{BeamSettings, LogFormat};
use beam::domain::catalogue::parse_level;
use beam::domain::ports::FixtureLoginService;
use beam::domain::{
    AppState, ColorScheme, CourseQuery, Dashboard, LoginCredentials, Outcome, SeedBundle,
    SortOrder, Store, Theme, sign_in, sign_out,
};
use beam::outbound::FileSnapshotRepository;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use seed_data::SeedCatalogue;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `beam` command arguments.
#[derive(Debug, Parser)]
#[command(name = "beam", about = "Inspect and drive the Beam learning store", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show preferences and the signed-in learner.
    Status,
    /// Sign in with email and password.
    Login {
        /// Account email.
        #[arg(long, default_value = "alex@example.com")]
        email: String,
        /// Account password.
        #[arg(long, default_value = "password")]
        password: String,
    },
    /// Sign out.
    Logout,
    /// Switch between light and dark.
    Theme {
        /// `light` or `dark`.
        theme: Theme,
    },
    /// Pick an accent colour.
    ColorScheme {
        /// `blue`, `purple`, `green`, or `orange`.
        scheme: ColorScheme,
    },
    /// Award experience to the signed-in learner.
    AwardXp {
        /// Points to add.
        amount: u64,
    },
    /// Enrol the signed-in learner in a course.
    Enroll {
        /// Course identifier.
        course_id: String,
    },
    /// Complete today's challenge.
    CompleteChallenge,
    /// List catalogue courses.
    Courses {
        /// Text matched against title, description, and instructor.
        #[arg(long, default_value = "")]
        search: String,
        /// Category label; `All` matches everything.
        #[arg(long)]
        category: Option<String>,
        /// Difficulty label; `All Levels` matches everything.
        #[arg(long)]
        level: Option<String>,
        /// Result ordering.
        #[arg(long, default_value = "popular")]
        sort: SortOrder,
    },
    /// Show the ranked learners.
    Leaderboard,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = BeamSettings::load_from_iter([OsString::from("beam")])
        .wrap_err("failed to load settings")?;
    init_tracing(settings.log_format()?);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(cli.command, &settings))
}

fn init_tracing(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn load_seed(settings: &BeamSettings) -> Result<SeedBundle> {
    let catalogue = match &settings.catalogue_path {
        Some(path) => SeedCatalogue::from_file(path)
            .wrap_err_with(|| format!("failed to load catalogue at {}", path.display()))?,
        None => SeedCatalogue::builtin().wrap_err("built-in catalogue is invalid")?,
    };
    SeedBundle::from_catalogue(&catalogue, settings.leaderboard_seed())
        .wrap_err("failed to build seed bundle")
}

async fn run(command: Command, settings: &BeamSettings) -> Result<()> {
    let state_dir = Utf8PathBuf::from_path_buf(settings.state_dir())
        .map_err(|path| eyre!("state directory is not UTF-8: {}", path.display()))?;
    let slot = FileSnapshotRepository::open(&state_dir, settings.slot_name())?;
    let mut store = Store::new(load_seed(settings)?, Arc::new(slot), Arc::new(DefaultClock));
    let mut out = io::stdout().lock();

    match command {
        Command::Status => write_status(&mut out, store.state())?,
        Command::Login { email, password } => {
            let credentials = LoginCredentials::try_from_parts(&email, &password)?;
            let mut service = FixtureLoginService::new(store.state().mock_user.clone());
            if let Some(latency) = settings.simulated_latency() {
                service = service.with_latency(latency);
            }
            let user = sign_in(&mut store, &service, &credentials)
                .await
                .map_err(|e| eyre!("sign-in failed [{}]: {e}", e.code()))?;
            writeln!(out, "signed in as {} <{}>", user.name, user.email)?;
        }
        Command::Logout => {
            sign_out(&mut store);
            writeln!(out, "signed out")?;
        }
        Command::Theme { theme } => report(&mut out, "theme", store.set_theme(theme))?,
        Command::ColorScheme { scheme } => {
            report(&mut out, "color-scheme", store.set_color_scheme(scheme))?;
        }
        Command::AwardXp { amount } => {
            let outcome = store.add_xp(amount);
            report(&mut out, "award-xp", outcome)?;
            write_unlock(&mut out, store.state())?;
        }
        Command::Enroll { course_id } => {
            report(&mut out, "enroll", store.enroll_in_course(&course_id))?;
        }
        Command::CompleteChallenge => {
            let outcome = store.complete_daily_challenge();
            report(&mut out, "complete-challenge", outcome)?;
            write_unlock(&mut out, store.state())?;
        }
        Command::Courses {
            search,
            category,
            level,
            sort,
        } => {
            let mut query = CourseQuery {
                search,
                difficulty: level.as_deref().map(parse_level).transpose()?.flatten(),
                sort,
                ..CourseQuery::default()
            };
            if let Some(label) = category.as_deref() {
                query = query.with_category(label);
            }
            for course in query.apply(&store.state().courses) {
                let price = if course.is_free() {
                    "free".to_owned()
                } else {
                    format!("${}", course.price)
                };
                writeln!(
                    out,
                    "{:>3}  {:<32} {:<14} {:<12} {:>6}  {:.1}★  {} students",
                    course.id,
                    course.title,
                    course.category,
                    course.level.label(),
                    price,
                    course.rating,
                    course.students_count,
                )?;
            }
        }
        Command::Leaderboard => {
            for entry in &store.state().leaderboard {
                writeln!(
                    out,
                    "{:>3}. {:<24} {:>7} XP  level {:<3} {} day streak",
                    entry.rank, entry.name, entry.xp, entry.level, entry.streak
                )?;
            }
        }
    }
    Ok(())
}

fn report(out: &mut impl Write, action: &str, outcome: Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Applied => writeln!(out, "{action}: applied"),
        Outcome::Skipped(reason) => writeln!(out, "{action}: skipped ({reason})"),
    }
}

fn write_unlock(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    match &state.new_achievement {
        Some(achievement) if state.show_achievement_modal => writeln!(
            out,
            "achievement unlocked: {} {}",
            achievement.icon, achievement.title
        ),
        _ => Ok(()),
    }
}

fn write_status(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    writeln!(out, "theme: {}", state.theme)?;
    writeln!(out, "color scheme: {}", state.color_scheme)?;
    let Some(user) = &state.user else {
        return writeln!(out, "signed out");
    };
    let summary = Dashboard::from_state(state).summary;
    writeln!(out, "signed in: {} <{}> ({})", user.name, user.email, user.role)?;
    writeln!(
        out,
        "level {}: {} XP, {}/1000 into the level ({}%), {} to go",
        summary.level,
        summary.xp,
        summary.xp_into_level,
        summary.progress_percent,
        summary.xp_to_next
    )?;
    writeln!(out, "streak: {} days", summary.streak)?;
    writeln!(
        out,
        "enrolled: {} ({})",
        summary.enrolled_count,
        user.enrolled_courses.join(", ")
    )
}
