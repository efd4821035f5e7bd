use clap::{Parser, Subcommand};
use std::path::PathBuf;

use numl_markup::{div, h, Element, MarkupError, Props, Tag};

#[derive(Parser)]
#[command(name = "numl")]
#[command(about = "NUML — declarative UI trees for a native rendering engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the demo tree's wire JSON to stdout
    Emit {
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Hand the demo tree to the rendering engine
    Render {
        /// Engine library path (overrides NUML_ENGINE_PATH)
        #[arg(long)]
        engine: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Emit { pretty } => cmd_emit(pretty),
        Command::Render { engine } => cmd_render(engine),
    }
}

/// The bundled demo: a centered card with a banner inside.
fn demo() -> Result<Element, MarkupError> {
    let banner = h(
        Tag::Component(div),
        Some(Props::new().bg(0xffaa22).size("auto")),
        vec!["Hello World".into()],
    )?;

    h(
        Tag::Component(div),
        Some(
            Props::new()
                .flex()
                .justify_center()
                .items_center()
                .shadow_lg()
                .border()
                .border_color(0x0000ff)
                .text_xl()
                .text_color(0xffffff)
                .bg(0x2e7d32)
                .size("600px"),
        ),
        vec![banner.into()],
    )
}

fn build_demo() -> Element {
    match demo() {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Markup error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_emit(pretty: bool) {
    let tree = build_demo();
    let json = if pretty {
        numl_engine::to_string_pretty(&tree)
    } else {
        numl_engine::to_string(&tree)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Encode error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_render(engine: Option<PathBuf>) {
    let tree = build_demo();
    let result = match engine {
        Some(path) => numl_engine::render_at(&path, &tree),
        None => numl_engine::render(&tree),
    };
    if let Err(e) = result {
        eprintln!("Engine error: {e}");
        std::process::exit(1);
    }
}
