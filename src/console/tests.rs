use std::io::Cursor;
use std::sync::Arc;

use chrono::{Local, TimeZone};

use super::{Menu, format_message};
use crate::sender::Roster;
use crate::store::{Message, MessageStore};
use crate::utils::timestamp::Timestamp;

fn setup() -> (Arc<MessageStore>, Roster) {
    let store = Arc::new(MessageStore::new());
    let roster = Roster::new(&store, ["Alice", "Bob", "Charlie"]);
    (store, roster)
}

fn run_menu(store: &Arc<MessageStore>, roster: &Roster, input: &str) -> String {
    let mut output = Vec::new();
    Menu::new(Arc::clone(store), roster, Cursor::new(input), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_format_message() {
    let dt = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let msg = Message::new("Alice", "Bob", Timestamp::from(dt), "Hello Bob!");
    assert_eq!(
        format_message(&msg),
        "[2024-01-02 03:04:05] Alice -> Bob: Hello Bob!"
    );
}

#[test]
fn test_menu_exit() {
    let (store, roster) = setup();
    let out = run_menu(&store, &roster, "6\n");
    assert!(out.contains("--- Chat Menu ---"));
    assert!(out.contains("Exiting chat..."));
}

#[test]
fn test_menu_exits_on_end_of_input() {
    let (store, roster) = setup();
    let out = run_menu(&store, &roster, "");
    assert!(out.contains("Exiting chat..."));
}

#[test]
fn test_menu_send_message() {
    let (store, roster) = setup();
    let out = run_menu(&store, &roster, "1\nAlice\nBob\nLet's catch up soon.\n6\n");

    let all = store.all_messages();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].sender(), "Alice");
    assert_eq!(all[0].recipient(), "Bob");
    assert_eq!(all[0].content(), "Let's catch up soon.");
    assert!(out.contains(&format_message(&all[0])));
}

#[test]
fn test_menu_send_skips_blank_identity_lines() {
    let (store, roster) = setup();
    run_menu(&store, &roster, "1

Alice
   

Bob
hello
6
");

    let all = store.all_messages();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].sender(), "Alice");
    assert_eq!(all[0].recipient(), "Bob");
    assert_eq!(all[0].content(), "hello");
}

#[test]
fn test_menu_send_blank_recipient_until_eof_stores_nothing() {
    let (store, roster) = setup();
    let out = run_menu(&store, &roster, "1
Alice
   
");

    assert!(store.is_empty());
    assert!(out.contains("Exiting chat..."));
}

#[test]
fn test_menu_identity_uses_first_token() {
    let (store, roster) = setup();
    roster.find("Alice").unwrap().send("Bob", "Hello Bob!");
    roster.find("Charlie").unwrap().send("Dave", "unrelated");

    let out = run_menu(&store, &roster, "3
  Alice Bob  
6
");
    assert!(out.contains("--- Messages for User: Alice ---"));
    assert!(out.contains("Alice -> Bob: Hello Bob!"));
    assert!(!out.contains("unrelated"));

    run_menu(&store, &roster, "1
Bob extra
Alice trailing
hi there
6
");
    let last = store.all_messages().pop().unwrap();
    assert_eq!(last.sender(), "Bob");
    assert_eq!(last.recipient(), "Alice");
    assert_eq!(last.content(), "hi there");
}

#[test]
fn test_menu_send_to_unregistered_recipient() {
    let (store, roster) = setup();
    run_menu(&store, &roster, "1\nAlice\nZed\nhello?\n6\n");

    let all = store.all_messages();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].recipient(), "Zed");
}

#[test]
fn test_menu_unknown_sender() {
    let (store, roster) = setup();
    let out = run_menu(&store, &roster, "1\nMallory\nBob\nhi\n6\n");

    assert!(out.contains("Sender not found."));
    assert!(store.is_empty());
}

#[test]
fn test_menu_invalid_input() {
    let (store, roster) = setup();
    let out = run_menu(&store, &roster, "abc\n9\n6\n");

    assert!(out.contains("Invalid input. Please enter a number."));
    assert!(out.contains("Invalid choice. Try again."));
}

#[test]
fn test_menu_display_all() {
    let (store, roster) = setup();
    roster.find("Alice").unwrap().send("Bob", "Hello Bob!");
    roster.find("Bob").unwrap().send("Alice", "Hi Alice!");

    let out = run_menu(&store, &roster, "2\n6\n");
    assert!(out.contains("--- Message History ---"));
    let first = out.find("Alice -> Bob: Hello Bob!").unwrap();
    let second = out.find("Bob -> Alice: Hi Alice!").unwrap();
    assert!(first < second);
}

#[test]
fn test_menu_search_by_user() {
    let (store, roster) = setup();
    roster.find("Alice").unwrap().send("Bob", "Hello Bob!");
    roster.find("Charlie").unwrap().send("Alice", "Hey Alice");

    let out = run_menu(&store, &roster, "3\nBob\n6\n");
    assert!(out.contains("--- Messages for User: Bob ---"));
    assert!(out.contains("Alice -> Bob: Hello Bob!"));
    assert!(!out.contains("Hey Alice"));
}

#[test]
fn test_menu_search_keyword_keeps_spaces() {
    let (store, roster) = setup();
    roster.find("Alice").unwrap().send("Bob", "Join me for a game?");
    roster.find("Bob").unwrap().send("Alice", "a game night");

    let out = run_menu(&store, &roster, "4\nFOR A GAME\n6\n");
    assert!(out.contains("--- Messages containing keyword: \"FOR A GAME\" ---"));
    assert!(out.contains("Join me for a game?"));
    assert!(!out.contains("a game night"));
}

#[test]
fn test_menu_list_users() {
    let (store, roster) = setup();
    let out = run_menu(&store, &roster, "5\n6\n");
    assert!(out.contains("--- Available User IDs ---\nAlice\nBob\nCharlie\n"));
}
