use game_shelf_core::types::{Accessory, Console, Game, LookupEntry};
use game_shelf_db::{CONSOLE_TYPES, DEVELOPERS, GENRES, MANUFACTURERS, Store};

fn entry(id: i64, name: &str) -> LookupEntry {
    LookupEntry {
        id,
        name: name.to_string(),
    }
}

fn seeded_console(store: &Store) -> i64 {
    store
        .save_console(&Console {
            name: "Super Nintendo".to_string(),
            owned: true,
            ..Console::default()
        })
        .unwrap()
}

#[test]
fn save_game_inserts_and_returns_positive_id() {
    let mut store = Store::open_memory().unwrap();
    let console_id = seeded_console(&store);
    let genre_id = store.add_lookup(GENRES, "Platformer").unwrap();

    let id = store
        .save_game(&Game {
            title: "Super Mario World".to_string(),
            console_id: Some(console_id),
            genre_id: Some(genre_id),
            us_release_date: Some("1991-08-13".to_string()),
            units_sold: Some(20_610_000),
            owned: true,
            box_owned: true,
            condition: Some(4),
            purchase_price: Some(39.99),
            notes: Some("CIB".to_string()),
            ..Game::default()
        })
        .unwrap();
    assert!(id > 0);

    let game = store.game(id).unwrap();
    assert_eq!(game.id, id);
    assert_eq!(game.title, "Super Mario World");
    assert_eq!(game.console_id, Some(console_id));
    assert_eq!(game.console_name.as_deref(), Some("Super Nintendo"));
    assert_eq!(game.genre_name.as_deref(), Some("Platformer"));
    assert_eq!(game.us_release_date.as_deref(), Some("1991-08-13"));
    assert_eq!(game.units_sold, Some(20_610_000));
    assert!(game.owned);
    assert!(game.box_owned);
    assert_eq!(game.condition, Some(4));
    assert_eq!(game.purchase_price, Some(39.99));
    assert_eq!(game.notes.as_deref(), Some("CIB"));
}

#[test]
fn save_game_writes_many_to_many_links() {
    let mut store = Store::open_memory().unwrap();
    let dev_a = store.add_lookup(DEVELOPERS, "Nintendo EAD").unwrap();
    let dev_b = store.add_lookup(DEVELOPERS, "HAL Laboratory").unwrap();

    let id = store
        .save_game(&Game {
            title: "Smash Bros.".to_string(),
            developers: vec![entry(dev_a, "Nintendo EAD"), entry(dev_b, "HAL Laboratory")],
            ..Game::default()
        })
        .unwrap();

    let game = store.game(id).unwrap();
    let names: Vec<&str> = game.developers.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["HAL Laboratory", "Nintendo EAD"]);
}

#[test]
fn save_game_with_existing_id_updates_in_place() {
    let mut store = Store::open_memory().unwrap();
    let id = store
        .save_game(&Game {
            title: "Zelda".to_string(),
            ..Game::default()
        })
        .unwrap();

    let mut game = store.game(id).unwrap();
    game.title = "The Legend of Zelda".to_string();
    game.condition = Some(2);
    let saved_id = store.save_game(&game).unwrap();
    assert_eq!(saved_id, id);

    let updated = store.game(id).unwrap();
    assert_eq!(updated.title, "The Legend of Zelda");
    assert_eq!(updated.condition, Some(2));

    let count: i32 = {
        let fetched = store.games().unwrap();
        fetched.len() as i32
    };
    assert_eq!(count, 1);
}

#[test]
fn edit_replaces_many_to_many_links() {
    let mut store = Store::open_memory().unwrap();
    let dev_a = store.add_lookup(DEVELOPERS, "Rare").unwrap();
    let dev_b = store.add_lookup(DEVELOPERS, "Retro Studios").unwrap();

    let id = store
        .save_game(&Game {
            title: "Donkey Kong Country".to_string(),
            developers: vec![entry(dev_a, "Rare")],
            ..Game::default()
        })
        .unwrap();

    let mut game = store.game(id).unwrap();
    game.developers = vec![entry(dev_b, "Retro Studios")];
    store.save_game(&game).unwrap();

    let updated = store.game(id).unwrap();
    assert_eq!(updated.developers.len(), 1);
    assert_eq!(updated.developers[0].id, dev_b);
}

#[test]
fn save_game_with_unknown_id_is_not_found() {
    let mut store = Store::open_memory().unwrap();
    let err = store
        .save_game(&Game {
            id: 999,
            title: "Phantom".to_string(),
            ..Game::default()
        })
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn failed_link_rewrite_rolls_back_whole_save() {
    let mut store = Store::open_memory().unwrap();
    let dev = store.add_lookup(DEVELOPERS, "Capcom").unwrap();

    let id = store
        .save_game(&Game {
            title: "Mega Man".to_string(),
            developers: vec![entry(dev, "Capcom")],
            ..Game::default()
        })
        .unwrap();

    // Reference a developer id that doesn't exist: the foreign key check
    // fails the join insert, which must roll back the title update too.
    let mut game = store.game(id).unwrap();
    game.title = "Mega Man 2".to_string();
    game.developers = vec![entry(9999, "Nobody")];
    assert!(store.save_game(&game).is_err());

    let unchanged = store.game(id).unwrap();
    assert_eq!(unchanged.title, "Mega Man");
    assert_eq!(unchanged.developers.len(), 1);
    assert_eq!(unchanged.developers[0].id, dev);
}

#[test]
fn delete_game_removes_row_and_join_rows() {
    let mut store = Store::open_memory().unwrap();
    let dev = store.add_lookup(DEVELOPERS, "Square").unwrap();
    let id = store
        .save_game(&Game {
            title: "Final Fantasy".to_string(),
            developers: vec![entry(dev, "Square")],
            ..Game::default()
        })
        .unwrap();

    store.delete_game(id).unwrap();

    let err = store.game(id).unwrap_err();
    assert!(err.is_not_found());

    // No orphaned join rows: re-inserting a game must start with no links.
    let new_id = store
        .save_game(&Game {
            title: "Final Fantasy II".to_string(),
            ..Game::default()
        })
        .unwrap();
    assert!(store.game(new_id).unwrap().developers.is_empty());
}

#[test]
fn delete_missing_game_is_not_found() {
    let mut store = Store::open_memory().unwrap();
    assert!(store.delete_game(42).unwrap_err().is_not_found());
}

#[test]
fn console_save_update_delete() {
    let mut store = Store::open_memory().unwrap();
    let type_id = store.add_lookup(CONSOLE_TYPES, "Home console").unwrap();
    let mfr_id = store.add_lookup(MANUFACTURERS, "Nintendo").unwrap();

    let id = store
        .save_console(&Console {
            name: "Nintendo 64".to_string(),
            type_id: Some(type_id),
            manufacturer_id: Some(mfr_id),
            generation: Some(5),
            jp_release_date: Some("1996-06-23".to_string()),
            price_usd: Some(199),
            controllers: Some(4),
            cpu: Some("NEC VR4300".to_string()),
            units_sold: Some(32_930_000),
            owned: true,
            condition: Some(5),
            ..Console::default()
        })
        .unwrap();
    assert!(id > 0);

    let console = store.console(id).unwrap();
    assert_eq!(console.name, "Nintendo 64");
    assert_eq!(console.type_name.as_deref(), Some("Home console"));
    assert_eq!(console.manufacturer_name.as_deref(), Some("Nintendo"));
    assert_eq!(console.generation, Some(5));
    assert_eq!(console.controllers, Some(4));

    let mut console = console;
    console.successor = Some("GameCube".to_string());
    assert_eq!(store.save_console(&console).unwrap(), id);
    assert_eq!(
        store.console(id).unwrap().successor.as_deref(),
        Some("GameCube")
    );

    store.delete_console(id).unwrap();
    assert!(store.console(id).unwrap_err().is_not_found());
}

#[test]
fn delete_console_referenced_by_game_fails() {
    let mut store = Store::open_memory().unwrap();
    let console_id = seeded_console(&store);
    store
        .save_game(&Game {
            title: "F-Zero".to_string(),
            console_id: Some(console_id),
            ..Game::default()
        })
        .unwrap();

    let err = store.delete_console(console_id).unwrap_err();
    assert!(!err.is_not_found());
    // The console must survive the failed delete.
    assert!(store.console(console_id).is_ok());
}

#[test]
fn accessory_save_update_delete_with_console_links() {
    let mut store = Store::open_memory().unwrap();
    let console_id = seeded_console(&store);

    let id = store
        .save_accessory(&Accessory {
            name: "Super Scope".to_string(),
            color: Some("Grey".to_string()),
            quantity: 1,
            owned: true,
            condition: Some(3),
            consoles: vec![entry(console_id, "Super Nintendo")],
            ..Accessory::default()
        })
        .unwrap();
    assert!(id > 0);

    let accessory = store.accessory(id).unwrap();
    assert_eq!(accessory.name, "Super Scope");
    assert_eq!(accessory.color.as_deref(), Some("Grey"));
    assert_eq!(accessory.consoles.len(), 1);
    assert_eq!(accessory.consoles[0].name, "Super Nintendo");

    let mut accessory = accessory;
    accessory.quantity = 2;
    accessory.consoles.clear();
    assert_eq!(store.save_accessory(&accessory).unwrap(), id);

    let updated = store.accessory(id).unwrap();
    assert_eq!(updated.quantity, 2);
    assert!(updated.consoles.is_empty());

    store.delete_accessory(id).unwrap();
    assert!(store.accessory(id).unwrap_err().is_not_found());
}

#[test]
fn add_lookup_returns_new_id() {
    let store = Store::open_memory().unwrap();
    let first = store.add_lookup(GENRES, "RPG").unwrap();
    let second = store.add_lookup(GENRES, "Shmup").unwrap();
    assert!(first > 0);
    assert!(second > first);
}

#[test]
fn add_rating_system_round_trips() {
    let store = Store::open_memory().unwrap();
    let id = store
        .add_rating_system("US", "E", Some("Everyone"))
        .unwrap();
    assert!(id > 0);

    let ratings = store.rating_systems().unwrap();
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].region, "US");
    assert_eq!(ratings[0].code, "E");
    assert_eq!(ratings[0].description.as_deref(), Some("Everyone"));
    assert_eq!(ratings[0].label(), "E - US");
}
