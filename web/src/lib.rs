use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod input;
mod theme;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a color theme instead of following the browser
    #[arg(short, long, value_enum)]
    theme: Option<theme::Theme>,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--theme=dark`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
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

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("theme: {:?}", args.theme);

    theme::Theme::apply(args.theme);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root(root).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();
        assert_eq!(args.theme, None);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_sets_theme_and_verbosity() {
        let args = Args::from_location_hash("#-vv&--theme=dark").unwrap();
        assert_eq!(args.theme, Some(theme::Theme::Dark));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Args::from_location_hash("#--theme=sepia").is_err());
    }
}
