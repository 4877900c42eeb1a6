use clap::Parser;

mod app;
mod cli;
mod clipboard;
mod config;
mod errors;
mod generate;
mod log;
mod prompt;
mod provider;
mod ux;
mod wire;

use app::{App, Presenter, View};
use clipboard::SystemClipboard;
use generate::CopyClient;
use ux::TerminalPresenter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log::init(args.debug);

    let cfg = config::Config::resolve(&args)?;
    tracing::debug!(?cfg, "resolved config");

    let prov = provider::make_provider(cfg.model.clone(), cfg.api_base.clone());
    let client = CopyClient::new(prov, cfg.api_key_env.clone()).strict(cfg.strict);
    let mut presenter = TerminalPresenter::new(args.json);

    // ===== ONE SHOT =====
    if let Some((name, description)) = args.one_shot() {
        let mut app = App::new(name, description);
        app.submit(&client, &mut presenter).await;
        if app.error.is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // ===== INTERACTIVE =====
    ux::print_header();
    let mut app = App::default();
    presenter.render(app.view());

    loop {
        let Some(name) = ux::prompt_line("Product Name") else { break };
        let Some(description) = ux::prompt_line("Product Description") else { break };
        app.product_name = name;
        app.product_description = description;

        app.submit(&client, &mut presenter).await;

        if let View::Results(items) = app.view() {
            if !args.json && !items.is_empty() {
                ux::copy_loop(items, &mut SystemClipboard, cfg.copied_feedback()).await?;
            }
        }

        if !ux::confirm("Generate copy for another product?") {
            break;
        }
    }

    Ok(())
}
