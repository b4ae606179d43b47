//! Behavioural tests for the seed-data crate.
//!
//! These scenarios cover catalogue parsing, validation, and deterministic
//! leaderboard generation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use seed_data::{
    CatalogueError, LeaderboardEntrySeed, LeaderboardSeedDefinition, SeedCatalogue,
    generate_leaderboard,
};

const BUILTIN_JSON: &str = include_str!("../fixtures/catalogue.json");

#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    catalogue_result: Slot<Result<SeedCatalogue, CatalogueError>>,
    seed_def: Slot<LeaderboardSeedDefinition>,
    board: Slot<Vec<LeaderboardEntrySeed>>,
    second_board: Slot<Vec<LeaderboardEntrySeed>>,
}

impl World {
    fn catalogue(&self) -> SeedCatalogue {
        self.catalogue_result
            .get()
            .expect("catalogue should be set")
            .expect("catalogue should be valid")
    }

    fn catalogue_result(&self) -> Result<SeedCatalogue, CatalogueError> {
        self.catalogue_result
            .get()
            .expect("catalogue result should be set")
    }

    fn seed_def(&self) -> LeaderboardSeedDefinition {
        self.seed_def.get().expect("seed definition should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("the built-in catalogue JSON")]
fn the_builtin_catalogue_json(world: &World) {
    world.json_input.set(BUILTIN_JSON.to_owned());
}

#[given("the built-in catalogue")]
fn the_builtin_catalogue(world: &World) {
    world.catalogue_result.set(SeedCatalogue::builtin());
}

#[given("the leaderboard seed {name}")]
fn the_leaderboard_seed(world: &World, name: String) {
    let catalogue = world.catalogue();
    let seed_def = catalogue
        .find_leaderboard_seed(&name)
        .expect("seed exists");
    world.seed_def.set(seed_def.clone());
}

#[given("malformed JSON")]
fn malformed_json(world: &World) {
    world.json_input.set("{ not json".to_owned());
}

#[given("catalogue JSON without the level-up achievement")]
fn catalogue_json_without_level_up(world: &World) {
    let mut json: serde_json::Value =
        serde_json::from_str(BUILTIN_JSON).expect("fixture is JSON");
    json["achievements"] = serde_json::json!([
        {"id": "first-course", "title": "First Course", "description": "", "icon": "*"}
    ]);
    world.json_input.set(json.to_string());
}

#[when("the catalogue is parsed")]
fn the_catalogue_is_parsed(world: &World) {
    let json = world.json_input.get().expect("JSON input should be set");
    world.catalogue_result.set(SeedCatalogue::from_json(&json));
}

#[when("the leaderboard is generated")]
fn the_leaderboard_is_generated(world: &World) {
    let board = generate_leaderboard(&world.seed_def()).expect("generation succeeds");
    world.board.set(board);
}

#[when("the leaderboard is generated twice")]
fn the_leaderboard_is_generated_twice(world: &World) {
    let seed_def = world.seed_def();
    world
        .board
        .set(generate_leaderboard(&seed_def).expect("first generation"));
    world
        .second_board
        .set(generate_leaderboard(&seed_def).expect("second generation"));
}

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.catalogue_result();
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("the mock user is enrolled in known courses")]
fn the_mock_user_is_enrolled_in_known_courses(world: &World) {
    let catalogue = world.catalogue();
    for id in &catalogue.mock_user().enrolled_courses {
        assert!(catalogue.courses().iter().any(|c| &c.id == id));
    }
}

#[then("both boards are identical")]
fn both_boards_are_identical(world: &World) {
    let first = world.board.get().expect("first board");
    let second = world.second_board.get().expect("second board");
    assert_eq!(first, second);
}

#[then("ranks start at one and experience never increases down the board")]
fn ranks_start_at_one(world: &World) {
    let board = world.board.get().expect("board");
    assert_eq!(board.len(), world.seed_def().entry_count());
    assert_eq!(board.first().map(|e| e.rank), Some(1));
    assert!(board.windows(2).all(|w| match w {
        [a, b] => a.xp >= b.xp && a.rank < b.rank,
        _ => false,
    }));
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    match world.catalogue_result() {
        Err(CatalogueError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[then("parsing fails with a missing level-up error")]
fn parsing_fails_with_missing_level_up(world: &World) {
    match world.catalogue_result() {
        Err(CatalogueError::MissingLevelUpAchievement { .. }) => {}
        other => panic!("Expected MissingLevelUpAchievement, got: {other:?}"),
    }
}

#[scenario(path = "tests/features/seed_data.feature", name = "Built-in catalogue loads")]
fn builtin_catalogue_loads(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Leaderboard generation is deterministic"
)]
fn leaderboard_generation_is_deterministic(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Leaderboard is ranked by experience"
)]
fn leaderboard_is_ranked_by_experience(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Malformed JSON fails parsing"
)]
fn malformed_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Catalogue without the level-up achievement fails parsing"
)]
fn catalogue_without_level_up_fails_parsing(world: World) {
    let _ = world;
}
