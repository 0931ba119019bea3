use gobot::protocol::Host;
use gobot::{find_move, Stone};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn call(host: &mut Host, request: Value) -> Value {
    let response = host.handle_line(&request.to_string());
    serde_json::to_value(response).unwrap()
}

#[test]
fn start_as_black_returns_empty_board() {
    let mut host = Host::new();
    let resp = call(&mut host, json!({"op": "startGame", "size": 3, "humanColor": 1}));
    assert_eq!(resp, json!({"board": [0, 0, 0, 0, 0, 0, 0, 0, 0]}));
}

#[test]
fn full_turn_cycle_as_white() {
    let mut host = Host::new();

    let resp = call(&mut host, json!({"op": "startGame", "size": 3, "humanColor": 2}));
    assert_eq!(resp, json!({"board": [1, 0, 0, 0, 0, 0, 0, 0, 0]}));

    // Occupied point: rejected, nothing else reported
    let resp = call(&mut host, json!({"op": "resolveHumanMove", "x": 0, "y": 0, "humanColor": 2}));
    assert_eq!(resp, json!({"valid": false}));

    let resp = call(&mut host, json!({"op": "resolveHumanMove", "x": 1, "y": 1, "humanColor": 2}));
    assert_eq!(
        resp,
        json!({"valid": true, "board": [1, 0, 0, 0, 2, 0, 0, 0, 0], "botTurn": true})
    );

    let resp = call(&mut host, json!({"op": "resolveBotMove", "humanColor": 2}));
    assert_eq!(
        resp,
        json!({"board": [1, 1, 0, 0, 2, 0, 0, 0, 0], "gameOver": false})
    );
}

#[test]
fn requests_after_game_over_are_errors() {
    let mut host = Host::new();
    // 1x1: Black's only point is suicide, so the bot concedes at once
    let resp = call(&mut host, json!({"op": "startGame", "size": 1, "humanColor": 2}));
    assert_eq!(resp, json!({"board": [0], "winner": 2, "gameOver": true}));

    let resp = call(&mut host, json!({"op": "resolveBotMove", "humanColor": 2}));
    assert_eq!(resp, json!({"error": "game is over"}));
}

#[test]
fn immediate_game_over_on_start() {
    let mut host = Host::new();
    let resp = call(&mut host, json!({"op": "startGame", "size": 1, "humanColor": 1}));
    assert_eq!(resp, json!({"board": [0], "winner": 2, "gameOver": true}));
}

#[test]
fn malformed_calls_return_errors() {
    let mut host = Host::new();

    let resp = host.handle_line("not json");
    assert!(resp.error.is_some());

    let resp = call(&mut host, json!({"op": "startGame", "size": 0, "humanColor": 1}));
    assert_eq!(resp["error"], json!("board size 0 out of range (1..=255)"));

    let resp = call(&mut host, json!({"op": "startGame", "size": 5, "humanColor": 3}));
    assert_eq!(
        resp["error"],
        json!("invalid color code 3 (expected 1=Black or 2=White)")
    );

    let resp = call(&mut host, json!({"op": "resolveHumanMove", "x": 0, "humanColor": 1}));
    assert!(resp["error"].as_str().unwrap().contains("missing field"));

    let resp = call(&mut host, json!({"op": "dance"}));
    assert!(resp["error"].is_string());
    assert!(host.session().is_none());
}

#[test]
fn out_of_turn_bot_request_is_an_error() {
    let mut host = Host::new();
    call(&mut host, json!({"op": "startGame", "size": 5, "humanColor": 1}));

    let resp = call(&mut host, json!({"op": "resolveBotMove", "humanColor": 1}));
    assert_eq!(resp, json!({"error": "not the bot's turn"}));
    assert_eq!(host.session().unwrap().board().stone_count(), 0);
}

/// Play the human's first legal point each turn until one side runs out of
/// moves, returning the response that ended the game.
fn play_out(host: &mut Host, human: Stone) -> Value {
    let color = human.code();
    loop {
        let mut board = host.session().unwrap().board().clone();
        let pos = find_move(&mut board, human).expect("human has a move while the game is live");

        let resp = call(
            host,
            json!({"op": "resolveHumanMove", "x": pos.row, "y": pos.col, "humanColor": color}),
        );
        assert_eq!(resp["valid"], json!(true));
        if resp.get("gameOver").is_some() {
            assert!(resp.get("botTurn").is_none());
            return resp;
        }
        assert_eq!(resp["botTurn"], json!(true));

        let resp = call(host, json!({"op": "resolveBotMove", "humanColor": color}));
        if resp["gameOver"] == json!(true) {
            return resp;
        }
        assert_eq!(resp["gameOver"], json!(false));
        assert!(resp.get("winner").is_none());
    }
}

#[test]
fn bot_wins_on_its_move_as_white() {
    let mut host = Host::new();
    call(&mut host, json!({"op": "startGame", "size": 3, "humanColor": 2}));

    let resp = play_out(&mut host, Stone::White);
    assert_eq!(
        resp,
        json!({"board": [0, 1, 1, 1, 1, 1, 1, 1, 0], "gameOver": true, "winner": 1})
    );

    let resp = call(&mut host, json!({"op": "resolveHumanMove", "x": 0, "y": 0, "humanColor": 2}));
    assert_eq!(resp, json!({"error": "game is over"}));
}

#[test]
fn human_wins_on_their_move_as_black() {
    let mut host = Host::new();
    call(&mut host, json!({"op": "startGame", "size": 3, "humanColor": 1}));

    let resp = play_out(&mut host, Stone::Black);
    assert_eq!(
        resp,
        json!({"valid": true, "board": [0, 1, 1, 1, 1, 1, 1, 1, 0], "winner": 1, "gameOver": true})
    );

    let resp = call(&mut host, json!({"op": "resolveBotMove", "humanColor": 1}));
    assert_eq!(resp, json!({"error": "game is over"}));
}
