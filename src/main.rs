// Headless driver: runs a selector over a bootstrap file and stdin commands.
//
// Usage: player-tags <bootstrap.json> [config.json]
//
// Each stdin line is typed into the text field and confirmed with the submit
// key, except `-<id>` which dismisses that player's tag. The hidden field value
// is printed after every line.

use std::io::{self, BufRead};
use std::path::Path;

use log::info;
use player_tags_lib::errors::ErrorCategory;
use player_tags_lib::{
    form, init_logging, AppError, AppResult, MemoryView, PlayerId, SelectorConfig, TagSelector,
    WidgetBootstrap,
};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("{}", e.user_message());
        std::process::exit(exit_code(e.category()));
    }
}

fn exit_code(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::ConfigError => 2,
        ErrorCategory::UserError => 3,
        ErrorCategory::SystemError | ErrorCategory::FatalError => 1,
    }
}

fn run() -> AppResult<()> {
    let mut args = std::env::args().skip(1);
    let bootstrap_path = args
        .next()
        .ok_or_else(|| AppError::config("usage: player-tags <bootstrap.json> [config.json]"))?;
    let config = match args.next() {
        Some(path) => SelectorConfig::load(Path::new(&path))?,
        None => SelectorConfig::default(),
    };

    let bootstrap: WidgetBootstrap =
        serde_json::from_str(&std::fs::read_to_string(&bootstrap_path)?)?;
    info!(
        "Loaded {} players, {} preselected",
        bootstrap.players.len(),
        bootstrap.selected_players.len()
    );

    let mut selector = TagSelector::with_config(
        bootstrap.players,
        bootstrap.selected_players,
        MemoryView::new(),
        config,
    );
    info!("Suggestions: {}", selector.suggestions().join(", "));
    let submit_key = selector.config().submit_key.clone();
    println!("{}", selector.view().hidden_value);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let dismissed: Option<PlayerId> =
            line.strip_prefix('-').and_then(|id| id.trim().parse().ok());
        match dismissed {
            Some(id) => {
                selector.remove(id);
            }
            None => {
                selector.view_mut().type_text(line);
                selector.handle_key(&submit_key);
            }
        }
        println!("{}", selector.view().hidden_value);
    }

    let names = form::player_names(selector.selection(), selector.candidates());
    info!("Final selection: {}", names.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_by_category() {
        assert_eq!(exit_code(AppError::config("usage").category()), 2);
        assert_eq!(
            exit_code(AppError::validation("players_json", "duplicate player 1").category()),
            3
        );
        assert_eq!(exit_code(AppError::custom("boom").category()), 1);
    }
}
