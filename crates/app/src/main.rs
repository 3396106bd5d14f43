use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use checklist_core::model::ChecklistPage;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::logger::tracing::Level;
use services::{
    Clock, HttpSubmissionSink, LogSubmissionSink, PageConfig, SubmissionConfig, SubmissionSink,
};
use tracing::{info, warn};
use ui::routes::Route;
use ui::{App, UiApp, build_app_context};

const BUILTIN_PAGE: &str = include_str!("../assets/preventivo.json");

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSubmitUrl { raw: String },
    InvalidHome { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSubmitUrl { raw } => write!(f, "invalid --submit-url value: {raw}"),
            ArgsError::InvalidHome { raw } => {
                write!(f, "invalid --home value: {raw} (expected one of /, /checklist, /home)")
            }
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

struct DesktopApp {
    page: ChecklistPage,
    sink: Arc<dyn SubmissionSink>,
    page_config: PageConfig,
}

impl UiApp for DesktopApp {
    fn page(&self) -> ChecklistPage {
        self.page.clone()
    }

    fn submission_sink(&self) -> Arc<dyn SubmissionSink> {
        Arc::clone(&self.sink)
    }

    fn clock(&self) -> Clock {
        Clock::local()
    }

    fn page_config(&self) -> PageConfig {
        self.page_config.clone()
    }
}

#[derive(Debug, Default)]
struct Args {
    page: Option<PathBuf>,
    submit: Option<SubmissionConfig>,
    home: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--page <checklist.json>] [--submit-url <url>] [--home <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --page        built-in preventive maintenance checklist");
    eprintln!("  --submit-url  none (submissions are only logged)");
    eprintln!("  --home        /home");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CHECKLIST_PAGE, CHECKLIST_SUBMIT_URL, CHECKLIST_HOME, CHECKLIST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            page: std::env::var_os("CHECKLIST_PAGE").map(PathBuf::from),
            submit: SubmissionConfig::from_env(),
            home: std::env::var("CHECKLIST_HOME").ok(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--page" => {
                    parsed.page = Some(PathBuf::from(require_value(args, "--page")?));
                }
                "--submit-url" => {
                    let value = require_value(args, "--submit-url")?;
                    if !(value.starts_with("http://") || value.starts_with("https://")) {
                        return Err(ArgsError::InvalidSubmitUrl { raw: value });
                    }
                    parsed.submit = Some(SubmissionConfig { url: value });
                }
                "--home" => {
                    parsed.home = Some(require_value(args, "--home")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if let Some(home) = &parsed.home
            && (!home.starts_with('/') || home.parse::<Route>().is_err())
        {
            return Err(ArgsError::InvalidHome { raw: home.clone() });
        }

        Ok(parsed)
    }
}

fn log_level() -> Level {
    std::env::var("CHECKLIST_LOG")
        .ok()
        .and_then(|raw| raw.parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

fn load_page(path: Option<&PathBuf>) -> Result<ChecklistPage, Box<dyn std::error::Error>> {
    let page = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            ChecklistPage::from_json(&raw)?
        }
        None => ChecklistPage::from_json(BUILTIN_PAGE)?,
    };
    info!(kind = %page.kind, items = page.items.len(), "checklist loaded");
    Ok(page)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if let Err(err) = dioxus::logger::init(log_level()) {
        eprintln!("logger already initialised: {err}");
    }

    let page = load_page(parsed.page.as_ref())?;
    let sink: Arc<dyn SubmissionSink> = match parsed.submit {
        Some(config) => {
            info!(url = %config.url, "posting submissions over HTTP");
            Arc::new(HttpSubmissionSink::new(config))
        }
        None => {
            warn!("no submit url configured; submissions are only logged");
            Arc::new(LogSubmissionSink)
        }
    };
    let page_config = match parsed.home {
        Some(home) => PageConfig::default().with_home_location(home),
        None => PageConfig::default(),
    };

    let title = page.title.clone();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        page,
        sink,
        page_config,
    });
    let context = build_app_context(&app);

    // Some dev setups open tao windows always-on-top; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
