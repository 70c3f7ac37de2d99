use game_shelf_core::types::{Accessory, Console, Game};
use game_shelf_core::{filter_accessories, filter_consoles, filter_games};

fn game(title: &str, console: &str, genre: &str) -> Game {
    Game {
        title: title.to_string(),
        console_name: Some(console.to_string()),
        genre_name: Some(genre.to_string()),
        ..Game::default()
    }
}

#[test]
fn empty_query_is_identity() {
    let games = vec![
        game("Zelda", "SNES", "Action"),
        game("Mario Kart", "SNES", "Racing"),
        game("mario party", "N64", "Party"),
    ];
    assert_eq!(filter_games(&games, ""), games);
}

#[test]
fn title_match_is_case_insensitive() {
    let games = vec![
        game("Zelda", "SNES", "Action"),
        game("Mario Kart", "SNES", "Racing"),
        game("mario party", "N64", "Party"),
    ];
    let filtered = filter_games(&games, "mario");
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].title, "Mario Kart");
    assert_eq!(filtered[1].title, "mario party");

    // Query case shouldn't matter either
    assert_eq!(filter_games(&games, "MARIO").len(), 2);
}

#[test]
fn games_match_console_and_genre_names() {
    let games = vec![
        game("Zelda", "SNES", "Action"),
        game("Gran Turismo", "PlayStation", "Racing"),
    ];
    assert_eq!(filter_games(&games, "playstation").len(), 1);
    assert_eq!(filter_games(&games, "racing").len(), 1);
    assert_eq!(filter_games(&games, "rpg").len(), 0);
}

#[test]
fn games_with_no_joined_names_do_not_match_on_them() {
    let games = vec![Game {
        title: "Tetris".to_string(),
        ..Game::default()
    }];
    assert_eq!(filter_games(&games, "snes").len(), 0);
    assert_eq!(filter_games(&games, "tetris").len(), 1);
}

#[test]
fn consoles_match_name_and_manufacturer() {
    let consoles = vec![
        Console {
            name: "Super Famicom".to_string(),
            manufacturer_name: Some("Nintendo".to_string()),
            ..Console::default()
        },
        Console {
            name: "Dreamcast".to_string(),
            manufacturer_name: Some("Sega".to_string()),
            ..Console::default()
        },
    ];
    assert_eq!(filter_consoles(&consoles, ""), consoles);
    assert_eq!(filter_consoles(&consoles, "nintendo").len(), 1);
    assert_eq!(filter_consoles(&consoles, "DREAM").len(), 1);
    assert_eq!(filter_consoles(&consoles, "atari").len(), 0);
}

#[test]
fn accessories_match_name_type_manufacturer_and_color() {
    let accessories = vec![
        Accessory {
            name: "DualShock".to_string(),
            color: Some("Midnight Blue".to_string()),
            type_name: Some("Controller".to_string()),
            manufacturer_name: Some("Sony".to_string()),
            ..Accessory::default()
        },
        Accessory {
            name: "Memory Card".to_string(),
            type_name: Some("Storage".to_string()),
            ..Accessory::default()
        },
    ];
    assert_eq!(filter_accessories(&accessories, ""), accessories);
    assert_eq!(filter_accessories(&accessories, "controller").len(), 1);
    assert_eq!(filter_accessories(&accessories, "blue").len(), 1);
    assert_eq!(filter_accessories(&accessories, "sony").len(), 1);
    assert_eq!(filter_accessories(&accessories, "storage").len(), 1);
    assert_eq!(filter_accessories(&accessories, "nintendo").len(), 0);
}
