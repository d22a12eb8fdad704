use day2::{min_cubes_power, possible_game_id, CubeLimits, Draw, Error, Game};

#[test]
fn game_record_parses_into_draws() {
    let game = Game::try_from(
        "Game 1: 10 green, 9 blue, 1 red; 1 red, 7 green; 11 green, 6 blue; 8 blue, 12 green",
    )
    .unwrap();

    assert_eq!(game.id(), 1);
    assert_eq!(
        game.draws(),
        [
            Draw::new(1, 10, 9),
            Draw::new(1, 7, 0),
            Draw::new(0, 11, 6),
            Draw::new(0, 12, 8),
        ]
    );
    assert!(game.is_possible(&CubeLimits::PUZZLE));
}

#[test]
fn same_color_in_one_draw_adds_up() {
    let game = Game::try_from("Game 4: 2 red, 3 blue, 5 red").unwrap();

    assert_eq!(game.draws(), [Draw::new(7, 0, 3)]);
}

#[test]
fn unknown_colors_are_ignored() {
    let game = Game::try_from("Game 5: 2 red, 9 yellow; 1 blue").unwrap();

    assert_eq!(game.draws(), [Draw::new(2, 0, 0), Draw::new(0, 0, 1)]);
}

#[test]
fn game_without_draws_is_possible() {
    let game = Game::try_from("Game 12:").unwrap();

    assert_eq!(game.id(), 12);
    assert!(game.draws().is_empty());
    assert!(game.is_possible(&CubeLimits::PUZZLE));
    assert_eq!(game.min_cubes().power(), 0);
}

#[test]
fn one_channel_over_limit_makes_draw_impossible() {
    let limits = CubeLimits::PUZZLE;

    assert!(Draw::new(12, 13, 14).fits(&limits));
    assert!(!Draw::new(13, 0, 0).fits(&limits));
    assert!(!Draw::new(0, 14, 0).fits(&limits));
    assert!(!Draw::new(0, 0, 15).fits(&limits));

    let game = Game::try_from("Game 3: 1 red; 13 red, 1 green; 2 blue").unwrap();
    assert!(!game.is_possible(&limits));
    assert_eq!(possible_game_id("Game 3: 1 red; 13 red, 1 green; 2 blue", &limits), 0);
}

#[test]
fn malformed_records_are_errors() {
    assert!(matches!(
        Game::try_from("Round 1: 3 red"),
        Err(Error::InvalidGameHeader(_))
    ));
    assert!(matches!(
        Game::try_from("Game x: 3 red"),
        Err(Error::InvalidGameHeader(_))
    ));
    assert!(matches!(
        Game::try_from("Game 1: red 3"),
        Err(Error::InvalidCubeText(_))
    ));
}

#[test]
fn transforms_are_total() {
    let limits = CubeLimits::PUZZLE;

    for line in ["", "not a game", "Game 1: many red"] {
        assert_eq!(possible_game_id(line, &limits), 0, "line({})", line);
        assert_eq!(min_cubes_power(line), 0, "line({})", line);
    }
}

#[test]
fn sample_games_under_puzzle_limits() {
    let limits = CubeLimits::PUZZLE;
    let lines = [
        ("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green", 1, 48),
        ("Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue", 2, 12),
        ("Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red", 0, 1560),
        ("Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red", 0, 630),
        ("Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green", 5, 36),
    ];

    for (line, id, power) in lines {
        assert_eq!(possible_game_id(line, &limits), id, "line({})", line);
        assert_eq!(min_cubes_power(line), power, "line({})", line);
    }
}

#[test]
fn min_cubes_takes_maximum_per_color() {
    let game = Game::try_from("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();

    assert_eq!(game.min_cubes(), Draw::new(4, 2, 6));
}

#[test]
fn power_of_largest_counts_does_not_overflow() {
    let line = "Game 1: 4294967295 red, 4294967295 green, 4294967295 blue";
    let max = u128::from(u32::MAX);

    assert_eq!(min_cubes_power(line), max * max * max);
    assert_eq!(Draw::new(u32::MAX, u32::MAX, u32::MAX).power(), max * max * max);
}
