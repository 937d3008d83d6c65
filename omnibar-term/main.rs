//! Interactive terminal omnibar.
//!
//! Type to search the current workflow, Tab cycles workflows, Up/Down
//! moves the selection, Enter picks, Esc quits. The resolved destination
//! is printed once the close transition has played out.

use std::{
  io::{
    self,
    Write,
  },
  path::{
    Path,
    PathBuf,
  },
  sync::{
    Arc,
    Mutex,
  },
  time::{
    Duration,
    Instant,
  },
};

use anyhow::Result;
use clap::{
  ArgAction,
  Parser,
};
use crossterm::{
  cursor,
  event::{
    self,
    Event,
    KeyCode,
    KeyEvent,
    KeyEventKind,
    KeyModifiers,
  },
  execute,
  queue,
  style::Print,
  terminal::{
    self,
    ClearType,
  },
};
use omnibar::{
  Omnibar,
  OmnibarConfig,
  Phase,
  Router,
  ViewContent,
  Workflow,
};

mod catalog;

#[derive(Parser, Debug)]
#[command(name = "omnibar-term", about = "Terminal omnibar demo", version)]
struct Cli {
  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
  verbose: u8,

  /// Path to an omnibar.toml config file
  #[arg(long = "config", value_name = "FILE")]
  config: Option<PathBuf>,

  /// Write logs to this file (logging is off without it; stderr belongs
  /// to the UI)
  #[arg(long = "log-file", value_name = "FILE")]
  log_file: Option<PathBuf>,
}

/// Captures the navigation target so it can be printed after the
/// terminal is restored.
#[derive(Default)]
struct CaptureRouter {
  path: Mutex<Option<String>>,
}

impl CaptureRouter {
  fn take(&self) -> Option<String> {
    self.path.lock().unwrap().take()
  }
}

impl Router for CaptureRouter {
  fn navigate(&self, path: &str) {
    *self.path.lock().unwrap() = Some(path.to_string());
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose, cli.log_file.as_deref())?;

  let config = match &cli.config {
    Some(path) => OmnibarConfig::load(path)?,
    None => OmnibarConfig::default(),
  };

  // The debounce hooks need a runtime to land their worker tasks in.
  let runtime = tokio::runtime::Builder::new_multi_thread()
    .enable_time()
    .build()?;
  let _guard = runtime.enter();

  let router = Arc::new(CaptureRouter::default());
  let mut bar = Omnibar::new(
    &config,
    Box::new(catalog::DemoSource::new()),
    Arc::clone(&router) as Arc<dyn Router>,
  );

  run_ui(&mut bar)?;

  if let Some(path) = router.take() {
    println!("navigate → {path}");
  }
  Ok(())
}

fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
  let Some(path) = log_file else {
    return Ok(());
  };
  let level = match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {:<5} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        message
      ));
    })
    .level(level)
    .chain(fern::log_file(path)?)
    .apply()?;
  Ok(())
}

fn run_ui(bar: &mut Omnibar) -> Result<()> {
  let mut out = io::stdout();
  terminal::enable_raw_mode()?;
  execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

  let result = ui_loop(bar, &mut out);

  execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
  terminal::disable_raw_mode()?;
  result
}

fn ui_loop(bar: &mut Omnibar, out: &mut impl Write) -> Result<()> {
  loop {
    draw(bar, out)?;
    if event::poll(Duration::from_millis(33))? {
      if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press && handle_key(bar, key) {
          return Ok(());
        }
      }
    }
    bar.poll(Instant::now());
    if bar.phase() == Phase::Closed {
      return Ok(());
    }
  }
}

/// Returns true when the user asked to quit.
fn handle_key(bar: &mut Omnibar, key: KeyEvent) -> bool {
  match key.code {
    KeyCode::Esc => return true,
    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
    KeyCode::Tab => bar.switch_workflow(bar.workflow().next()),
    KeyCode::Up => bar.select_prev(),
    KeyCode::Down => bar.select_next(),
    KeyCode::Enter => {
      bar.submit();
    },
    KeyCode::Backspace => bar.backspace(),
    KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => bar.insert_char(ch),
    _ => {},
  }
  false
}

fn draw(bar: &Omnibar, out: &mut impl Write) -> Result<()> {
  queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;

  let tabs = Workflow::ALL
    .iter()
    .map(|workflow| {
      if *workflow == bar.workflow() {
        format!("[{workflow}]")
      } else {
        format!(" {workflow} ")
      }
    })
    .collect::<Vec<_>>()
    .join(" ");
  queue!(out, Print(&tabs), cursor::MoveToNextLine(1))?;
  queue!(
    out,
    Print(format!("> {}", bar.text())),
    cursor::MoveToNextLine(2)
  )?;

  let content = bar.content();
  let heading = match &content {
    ViewContent::Results(_) => "Results",
    ViewContent::Trending(_) => "Trending",
  };
  queue!(out, Print(heading), cursor::MoveToNextLine(1))?;

  let selected = bar.store().selected();
  for item in content.items() {
    let marker = if selected.as_ref() == Some(item) {
      ">"
    } else {
      " "
    };
    queue!(
      out,
      Print(format!("{marker} {}", item.label)),
      cursor::MoveToNextLine(1)
    )?;
  }

  if bar.phase() == Phase::Closing {
    queue!(out, cursor::MoveToNextLine(1), Print("closing..."))?;
  }
  out.flush()?;
  Ok(())
}
