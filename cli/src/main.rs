use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use gate::config::{HOME_PATH_ENV, LOADING_MESSAGE_ENV, LOGIN_PATH_ENV};
use gate::{AuthProvider, AuthState, GuardConfig, GuardMount, NavigationIntent, RenderDecision, RouteGuard, RouteTargets};
use serde::Serialize;
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

/// Snapshot with opaque JSON session and profile records.
type Snapshot = AuthState<Value, Value>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid route targets: {0}")]
    Config(#[from] gate::ConfigError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: invalid auth snapshot: {source}")]
    Snapshot {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gate-cli", about = "Evaluate and replay route guard decisions")]
struct Cli {
    #[arg(long, env = LOGIN_PATH_ENV, help = "Sign-in route [default: /auth]")]
    login: Option<String>,

    #[arg(long, env = HOME_PATH_ENV, help = "Signed-in landing route [default: /game]")]
    home: Option<String>,

    #[arg(long, env = LOADING_MESSAGE_ENV, help = "Loading placeholder text [default: Loading...]")]
    loading_message: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "-v for debug logs, -vv for trace")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide for a single auth snapshot.
    Evaluate(EvaluateArgs),
    /// Print the decision for every snapshot/route combination.
    Table(TableArgs),
    /// Feed JSON-lines snapshots through a mounted guard.
    Replay(ReplayArgs),
}

#[derive(Args, Debug, Clone)]
struct RouteArgs {
    #[arg(long, default_value_t = false, help = "Treat the route as anonymous-only (e.g. sign-in)")]
    anonymous_only: bool,

    #[arg(long, default_value = "/game", help = "Location the guard is mounted at")]
    location: String,

    #[arg(long, default_value_t = false)]
    json: bool,
}

impl RouteArgs {
    fn config(&self) -> GuardConfig {
        if self.anonymous_only { GuardConfig::anonymous_only() } else { GuardConfig::protected() }
    }
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[arg(long, default_value_t = false, help = "Provider has not resolved yet")]
    loading: bool,

    #[arg(long, help = "Session identifier; omit for no session")]
    user: Option<String>,

    #[arg(long, help = "Profile identifier; omit for no profile")]
    profile: Option<String>,

    #[command(flatten)]
    route: RouteArgs,
}

#[derive(Args, Debug)]
struct TableArgs {
    #[arg(long, default_value = "/game")]
    location: String,

    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,

    #[command(flatten)]
    route: RouteArgs,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let targets = route_targets(&cli)?;
    tracing::debug!(login = %targets.login, home = %targets.home, "route targets loaded");
    let guard = RouteGuard::new(targets);

    match cli.command {
        Command::Evaluate(args) => run_evaluate(&guard, &args),
        Command::Table(args) => run_table(&guard, &args),
        Command::Replay(args) => run_replay(guard, &args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

fn route_targets(cli: &Cli) -> Result<RouteTargets, CliError> {
    let targets = RouteTargets::from_lookup(|key| match key {
        LOGIN_PATH_ENV => cli.login.clone(),
        HOME_PATH_ENV => cli.home.clone(),
        LOADING_MESSAGE_ENV => cli.loading_message.clone(),
        _ => None,
    })?;
    Ok(targets)
}

fn run_evaluate(guard: &RouteGuard, args: &EvaluateArgs) -> Result<(), CliError> {
    let state = Snapshot {
        user: args.user.clone().map(|id| serde_json::json!({ "id": id })),
        profile: args.profile.clone().map(|id| serde_json::json!({ "id": id })),
        loading: args.loading,
    };
    let decision = guard.evaluate(&state, args.route.config(), &args.route.location);
    if args.route.json {
        print_json(&decision)
    } else {
        println!("{}", describe(&decision));
        Ok(())
    }
}

fn run_table(guard: &RouteGuard, args: &TableArgs) -> Result<(), CliError> {
    let rows = decision_table(guard, &args.location);
    if args.json {
        return print_json(&rows);
    }
    println!("{:<8} {:<5} {:<8} {:<13} decision", "loading", "user", "profile", "require_auth");
    for row in rows {
        println!(
            "{:<8} {:<5} {:<8} {:<13} {}",
            row.loading,
            row.user,
            row.profile,
            row.require_auth,
            describe(&row.decision)
        );
    }
    Ok(())
}

fn run_replay(guard: RouteGuard, args: &ReplayArgs) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input).map_err(|source| CliError::Io { path: args.input.clone(), source })?;
        Box::new(BufReader::new(file))
    };
    let snapshots = parse_snapshots(reader, &args.input)?;
    tracing::info!(count = snapshots.len(), location = %args.route.location, "replaying snapshots");

    let steps = replay(guard, args.route.config(), &args.route.location, snapshots);
    if args.route.json {
        return print_json(&steps);
    }
    for step in steps {
        match step.index {
            0 => println!("mount: {}", describe(&step.decision)),
            n => println!("step {n}: {}", describe(&step.decision)),
        }
        for intent in &step.navigations {
            println!("  navigate (replace={}) -> {}", intent.replace, intent.href());
        }
    }
    Ok(())
}

/// One line of `table` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TableRow {
    loading: bool,
    user: bool,
    profile: bool,
    require_auth: bool,
    decision: RenderDecision,
}

fn decision_table(guard: &RouteGuard, location: &str) -> Vec<TableRow> {
    let mut rows = Vec::with_capacity(16);
    for loading in [true, false] {
        for user in [false, true] {
            for profile in [false, true] {
                for require_auth in [true, false] {
                    let state = Snapshot {
                        user: user.then(|| serde_json::json!({ "id": "u1" })),
                        profile: profile.then(|| serde_json::json!({ "id": "u1" })),
                        loading,
                    };
                    let decision = guard.evaluate(&state, GuardConfig { require_auth }, location);
                    rows.push(TableRow { loading, user, profile, require_auth, decision });
                }
            }
        }
    }
    rows
}

/// Decision after mounting (index 0) or after the n-th snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ReplayStep {
    index: usize,
    decision: RenderDecision,
    navigations: Vec<NavigationIntent>,
}

/// Mount a guard on a provider that starts loading, then publish each snapshot.
fn replay(guard: RouteGuard, config: GuardConfig, location: &str, snapshots: Vec<Snapshot>) -> Vec<ReplayStep> {
    let provider = AuthProvider::new(Snapshot::loading());
    let log: Rc<RefCell<Vec<NavigationIntent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mount = GuardMount::mount(&provider, guard, config, location, move |intent: &NavigationIntent| {
        sink.borrow_mut().push(intent.clone());
    });

    let mut steps = vec![ReplayStep { index: 0, decision: mount.decision(), navigations: log.take() }];
    for (i, snapshot) in snapshots.into_iter().enumerate() {
        provider.set(snapshot);
        steps.push(ReplayStep { index: i + 1, decision: mount.decision(), navigations: log.take() });
    }
    mount.unmount();
    steps
}

/// Parse JSON-lines snapshots. Blank lines and `#` comments are skipped.
fn parse_snapshots<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<Snapshot>, CliError> {
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io { path: source_name.to_owned(), source })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let snapshot =
            serde_json::from_str::<Snapshot>(trimmed).map_err(|source| CliError::Snapshot { line: i + 1, source })?;
        out.push(snapshot);
    }
    Ok(out)
}

fn describe(decision: &RenderDecision) -> String {
    match decision {
        RenderDecision::ShowLoading { message } => format!("loading ({message})"),
        RenderDecision::RedirectToLogin(intent) | RenderDecision::RedirectToHome(intent) => {
            format!("{} -> {}", decision.label(), intent.href())
        }
        RenderDecision::RenderChildren => decision.label().to_owned(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
