use clap::Parser;
use wasm_bindgen::prelude::*;

mod chart;
mod game;
mod leaderboard;
mod settings;
mod store;
mod theme;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed for the AI opponent instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the leaderboard document endpoint
    #[arg(long)]
    store: Option<String>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    theme::Theme::init();

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    let props = game::GameProps {
        seed: args.seed,
        store: args.store,
    };
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
