use game_shelf_core::types::{Accessory, Console, Game};
use game_shelf_db::{DEVELOPERS, GENRES, MANUFACTURERS, Store};

fn add_game(store: &mut Store, title: &str) -> i64 {
    store
        .save_game(&Game {
            title: title.to_string(),
            owned: true,
            ..Game::default()
        })
        .unwrap()
}

#[test]
fn games_are_ordered_by_title() {
    let mut store = Store::open_memory().unwrap();
    add_game(&mut store, "Zelda");
    add_game(&mut store, "Chrono Trigger");
    add_game(&mut store, "Mario Kart");

    let titles: Vec<String> = store
        .games()
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, ["Chrono Trigger", "Mario Kart", "Zelda"]);
}

#[test]
fn game_list_carries_joined_display_names() {
    let mut store = Store::open_memory().unwrap();
    let console_id = store
        .save_console(&Console {
            name: "PlayStation".to_string(),
            ..Console::default()
        })
        .unwrap();
    let genre_id = store.add_lookup(GENRES, "RPG").unwrap();
    store
        .save_game(&Game {
            title: "Suikoden".to_string(),
            console_id: Some(console_id),
            genre_id: Some(genre_id),
            ..Game::default()
        })
        .unwrap();

    let games = store.games().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].console_name.as_deref(), Some("PlayStation"));
    assert_eq!(games[0].genre_name.as_deref(), Some("RPG"));
    // List rows leave the heavy per-game data unloaded.
    assert!(games[0].developers.is_empty());
}

#[test]
fn game_by_id_carries_rating_labels() {
    let mut store = Store::open_memory().unwrap();
    let rating = store.add_rating_system("JP", "CERO A", None).unwrap();
    let id = store
        .save_game(&Game {
            title: "Rhythm Tengoku".to_string(),
            jp_rating_id: Some(rating),
            ..Game::default()
        })
        .unwrap();

    let game = store.game(id).unwrap();
    assert_eq!(game.jp_rating.as_deref(), Some("CERO A - JP"));
    assert_eq!(game.us_rating, None);
}

#[test]
fn consoles_are_ordered_by_name() {
    let store = Store::open_memory().unwrap();
    for name in ["Saturn", "Dreamcast", "Mega Drive"] {
        store
            .save_console(&Console {
                name: name.to_string(),
                ..Console::default()
            })
            .unwrap();
    }

    let names: Vec<String> = store
        .consoles()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Dreamcast", "Mega Drive", "Saturn"]);
}

#[test]
fn accessories_are_ordered_by_name() {
    let mut store = Store::open_memory().unwrap();
    for name in ["Rumble Pak", "Controller Pak", "Transfer Pak"] {
        store
            .save_accessory(&Accessory {
                name: name.to_string(),
                quantity: 1,
                ..Accessory::default()
            })
            .unwrap();
    }

    let names: Vec<String> = store
        .accessories()
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, ["Controller Pak", "Rumble Pak", "Transfer Pak"]);
}

#[test]
fn lookup_entries_are_ordered_by_name() {
    let store = Store::open_memory().unwrap();
    store.add_lookup(DEVELOPERS, "Treasure").unwrap();
    store.add_lookup(DEVELOPERS, "Atlus").unwrap();
    store.add_lookup(DEVELOPERS, "Konami").unwrap();

    let names: Vec<String> = store
        .lookup_entries(DEVELOPERS)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["Atlus", "Konami", "Treasure"]);
}

#[test]
fn rating_systems_are_ordered_by_region_then_code() {
    let store = Store::open_memory().unwrap();
    store.add_rating_system("US", "T", None).unwrap();
    store.add_rating_system("JP", "CERO B", None).unwrap();
    store.add_rating_system("US", "E", None).unwrap();

    let labels: Vec<String> = store
        .rating_systems()
        .unwrap()
        .iter()
        .map(|r| r.label())
        .collect();
    assert_eq!(labels, ["CERO B - JP", "E - US", "T - US"]);
}

#[test]
fn stats_count_totals_and_owned() {
    let mut store = Store::open_memory().unwrap();
    store
        .save_game(&Game {
            title: "Owned".to_string(),
            owned: true,
            ..Game::default()
        })
        .unwrap();
    store
        .save_game(&Game {
            title: "Wishlist".to_string(),
            owned: false,
            ..Game::default()
        })
        .unwrap();
    store
        .save_console(&Console {
            name: "Game Boy".to_string(),
            owned: true,
            ..Console::default()
        })
        .unwrap();
    store
        .save_accessory(&Accessory {
            name: "Link Cable".to_string(),
            quantity: 1,
            owned: false,
            ..Accessory::default()
        })
        .unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.games, 2);
    assert_eq!(stats.games_owned, 1);
    assert_eq!(stats.consoles, 1);
    assert_eq!(stats.consoles_owned, 1);
    assert_eq!(stats.accessories, 1);
    assert_eq!(stats.accessories_owned, 0);
}

#[test]
fn manufacturers_join_both_consoles_and_accessories() {
    let mut store = Store::open_memory().unwrap();
    let mfr = store.add_lookup(MANUFACTURERS, "Sega").unwrap();
    store
        .save_console(&Console {
            name: "Game Gear".to_string(),
            manufacturer_id: Some(mfr),
            ..Console::default()
        })
        .unwrap();
    store
        .save_accessory(&Accessory {
            name: "TV Tuner".to_string(),
            quantity: 1,
            manufacturer_id: Some(mfr),
            ..Accessory::default()
        })
        .unwrap();

    assert_eq!(
        store.consoles().unwrap()[0].manufacturer_name.as_deref(),
        Some("Sega")
    );
    assert_eq!(
        store.accessories().unwrap()[0].manufacturer_name.as_deref(),
        Some("Sega")
    );
}
