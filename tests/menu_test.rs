//! Menu sessions driven through a scripted terminal.

use board_games::{ConsoleTerminal, MainChoice, Menu, Opponent, SessionEnd, Settings};
use board_games_core::{Outcome, PlayerId, ScriptedTerminal, Variant};

fn menu() -> Menu {
    Menu::new(Settings::default())
}

#[test]
fn test_full_session_returns_to_main_menu() {
    let mut term = ScriptedTerminal::new([
        // Connect four against a human: player 1 wins vertically.
        "1", "1", "3", "4", "3", "4", "3", "4", "3",
        // Back at the main menu: exit.
        "3",
    ]);
    menu().run(&mut term).expect("Menu runs");

    assert_eq!(term.remaining(), 0);
    let output = term.output();
    assert!(output.iter().any(|l| l == "Player 1 has won."));
    let menus = output
        .iter()
        .filter(|l| l.starts_with("Choose what game"))
        .count();
    assert_eq!(menus, 2);
}

#[test]
fn test_chuck_norris_goes_back_to_main_menu() {
    let mut term = ScriptedTerminal::new(["2", "4", "3"]);
    menu().run(&mut term).expect("Menu runs");

    assert_eq!(term.errors(), ["Chuck Norris hasn't been implemented yet."]);
    assert_eq!(term.remaining(), 0);
}

#[test]
fn test_end_of_input_mid_game_exits_cleanly() {
    let mut term = ScriptedTerminal::new(["2", "1", "1,1"]);
    menu().run(&mut term).expect("Closed input is not an error");
    assert!(term.output().iter().any(|l| l == "Player 1 played (1, 1)."));
}

#[test]
fn test_end_of_input_at_menus() {
    let mut term = ScriptedTerminal::default();
    menu().run(&mut term).expect("Menu runs");

    let mut term = ScriptedTerminal::new(["1"]);
    menu().run(&mut term).expect("Menu runs");
}

#[test]
fn test_run_once_with_smart_ai() {
    let mut term = ScriptedTerminal::new(["0,0", "0,1", "2,2", "1,2"]);
    let end = menu()
        .run_once(Variant::TicTacToe, Some(Opponent::SmartAi), &mut term)
        .expect("Session runs");

    // Smart AI takes the centre, blocks the left column, then wins on the
    // anti-diagonal.
    let Some(SessionEnd::Finished(finished)) = end else {
        panic!("Expected a finished game");
    };
    assert_eq!(finished.outcome(), &Outcome::Won(PlayerId::new(2)));
    assert!(term.output().iter().any(|l| l == "Smart AI 2 has won."));
}

#[test]
fn test_run_once_asks_for_opponent() {
    let mut term = ScriptedTerminal::new(["9", "1", "0,0"]);
    let end = menu()
        .run_once(Variant::TicTacToe, None, &mut term)
        .expect("Session runs");
    assert!(matches!(end, Some(SessionEnd::InputClosed)));

    let mut term = ScriptedTerminal::default();
    let end = menu()
        .run_once(Variant::TicTacToe, None, &mut term)
        .expect("Session runs");
    assert!(end.is_none());
}

#[test]
fn test_seeded_stupid_ai_is_repeatable() {
    let settings = Settings::default().with_seed(Some(42));
    let play = || {
        let mut term = ScriptedTerminal::new(["0", "0", "0", "0", "0", "0", "1", "1", "1", "1"]);
        let end = Menu::new(settings.clone())
            .run_once(Variant::ConnectFour, Some(Opponent::StupidAi), &mut term)
            .expect("Session runs");
        (format!("{end:?}"), term.output().to_vec())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_custom_glyphs_reach_the_board() {
    let settings: Settings = toml::from_str(
        r#"
[glyphs.tic_tac_toe]
players = ["A", "B"]
empty = "_"
"#,
    )
    .expect("Valid settings");
    let mut term = ScriptedTerminal::new(["1,1"]);
    Menu::new(settings)
        .run_once(Variant::TicTacToe, Some(Opponent::Human), &mut term)
        .expect("Session runs");

    let output = term.output();
    assert!(output.iter().any(|l| l == "Current player: Player 1 (A)"));
    assert!(output.iter().any(|l| l.contains("|_|A|_|")));
}

#[test]
fn test_console_terminal_session() {
    let input: &[u8] = b"2\r\n1\n0,0\n1,0\n0,1\n1,1\n0,2\n3\n";
    let mut console = ConsoleTerminal::new(input, Vec::new(), Vec::new());
    menu().run(&mut console).expect("Menu runs");

    let (_, output, errors) = console.into_parts();
    let output = String::from_utf8(output).expect("UTF-8 output");
    assert!(output.contains(" 3. Exit"));
    assert!(output.contains("Player 1 has won."));
    assert!(errors.is_empty());
}

#[test]
fn test_main_choice_order() {
    let mut term = ScriptedTerminal::new(["1", "2", "3"]);
    let menu = menu();
    let choices: Vec<_> = (0..3)
        .map(|_| menu.choose_game(&mut term).expect("Reads"))
        .collect();
    assert_eq!(
        choices,
        [
            Some(MainChoice::Play(Variant::ConnectFour)),
            Some(MainChoice::Play(Variant::TicTacToe)),
            Some(MainChoice::Exit),
        ]
    );
}
