use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app::{Presenter, View};
use crate::clipboard::{ClipboardSink, CopyButton};
use crate::wire::GeneratedCopy;

const LOADING_TEXT: &str = "AI is crafting your marketing copy...";
const IDLE_TEXT: &str = "Your generated marketing copy will appear here.";

/// Renders controller views to the terminal.
pub struct TerminalPresenter {
    json: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalPresenter {
    pub fn new(json: bool) -> Self {
        Self { json, spinner: None }
    }

    fn stop_spinner(&mut self) {
        if let Some(sp) = self.spinner.take() {
            sp.finish_and_clear();
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, view: View<'_>) {
        if !matches!(view, View::Loading) {
            self.stop_spinner();
        }
        match view {
            View::Loading => {
                let sp = ProgressBar::new_spinner();
                sp.set_style(
                    ProgressStyle::with_template("{spinner:.cyan} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                sp.set_message(LOADING_TEXT);
                sp.enable_steady_tick(Duration::from_millis(100));
                self.spinner = Some(sp);
            }
            View::Error(msg) => eprintln!("{}", error_banner(msg)),
            View::Results(items) if self.json => match serde_json::to_string_pretty(items) {
                Ok(s) => println!("{s}"),
                Err(e) => tracing::error!(error = %e, "failed to encode result"),
            },
            View::Results(items) => print_results(items),
            View::Idle => println!("{}", IDLE_TEXT.dimmed()),
        }
    }
}

pub fn error_banner(msg: &str) -> String {
    format!("{} {}", "✖ Error".red().bold(), msg.red())
}

pub fn render_card(index: usize, item: &GeneratedCopy, copy_label: &str) -> String {
    let rule = "─".repeat(56);
    format!(
        "{rule}\n{}. {}  [{}]\n{rule}\n{}\n",
        index + 1,
        item.title().bold().cyan(),
        copy_label.dimmed(),
        item.content,
        rule = rule.dimmed()
    )
}

pub fn print_results(items: &[GeneratedCopy]) {
    println!("\n{}\n", "Your AI-Generated Copy".bold());
    for (i, item) in items.iter().enumerate() {
        println!("{}", render_card(i, item, "Copy"));
    }
}

pub fn print_header() {
    println!("{}", "CopySpark".bold().magenta());
    println!("{}\n", "Marketing copy for your product, in one go.".dimmed());
}

/// Reads one line; `None` on EOF.
pub fn prompt_line(label: &str) -> Option<String> {
    print!("{}: ", label.bold());
    let _ = io::stdout().flush();
    let mut s = String::new();
    match io::stdin().read_line(&mut s) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(s.trim_end_matches(['\r', '\n']).to_string()),
    }
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

/// Parses a 1-based card number typed by the user.
pub fn parse_card_choice(input: &str, count: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

/// Lets the user copy cards until they press Enter on an empty line.
pub async fn copy_loop(
    items: &[GeneratedCopy],
    sink: &mut dyn ClipboardSink,
    feedback: Duration,
) -> Result<()> {
    let mut buttons = vec![CopyButton::new(feedback); items.len()];
    loop {
        let Some(line) = prompt_line(&format!("Copy which card? [1-{}, Enter to continue]", items.len())) else {
            return Ok(());
        };
        if line.trim().is_empty() {
            return Ok(());
        }
        let Some(i) = parse_card_choice(&line, items.len()) else {
            println!("{}", "Pick one of the card numbers shown.".yellow());
            continue;
        };

        let btn = &mut buttons[i];
        if !btn.press(sink, &items[i].content, Instant::now()) {
            continue;
        }

        let sp = ProgressBar::new_spinner();
        sp.set_message(format!("{}  {}", items[i].title(), btn.label(Instant::now()).green().bold()));
        sp.tick();
        tokio::time::sleep(btn.feedback()).await;
        sp.finish_and_clear();
        println!("{}  {}", items[i].title(), btn.label(Instant::now()).dimmed());
    }
}
