use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use formflow::WizardConfig;
use formflow::app::App;
use formflow::app::command::parse_line;
use formflow::app::event::AppEvent;
use formflow::logging::init_logging;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "formflow", about = "Step through a multi-page form in the terminal")]
struct Args {
    /// YAML file with titles, prompts and step limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(long)]
    debug: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => WizardConfig::load(path)?,
        None => WizardConfig::default(),
    };
    init_logging(&config.log_level, args.debug).context("failed to install logger")?;

    let mut app = App::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", app.title().bold());
    println!("{}", ":next  :back  :reset  :quit".dark_grey());
    print_prompt(&app, &mut stdout)?;

    for line in stdin.lock().lines() {
        let events = app.handle(parse_line(&line?));
        for event in &events {
            render_event(&app, event)?;
        }
        if app.should_exit() {
            break;
        }
        if events
            .iter()
            .any(|event| matches!(event, AppEvent::StepSwitched(_)))
        {
            print_prompt(&app, &mut stdout)?;
        } else {
            print!("{} ", ">".dark_grey());
            stdout.flush()?;
        }
    }

    Ok(())
}

fn print_prompt(app: &App, stdout: &mut io::Stdout) -> io::Result<()> {
    let (index, total) = app.progress();
    println!();
    println!(
        "{} {}",
        format!("[{index}/{total}]").dark_grey(),
        app.current_kind().label().bold()
    );
    print!("{} {} ", app.prompt(), ">".dark_grey());
    stdout.flush()
}

fn render_event(app: &App, event: &AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::ContentChanged(kind) => println!("{}", format!("✓ {kind} saved").green()),
        AppEvent::Incomplete { reason, .. } => println!("{}", reason.as_str().red()),
        AppEvent::Ignored(kind) => println!("{}", format!("{kind} is read-only").yellow()),
        AppEvent::ReachedFinal => {
            for line in app.review_lines() {
                println!("  {line}");
            }
        }
        AppEvent::Completed => {
            if let Some(json) = app.submission_json()? {
                println!("{json}");
            }
        }
        AppEvent::StepSwitched(_) => {}
    }
    Ok(())
}
