use assert_cmd::Command;
use predicates::prelude::*;

fn row_line(row: usize, name: &str, favorite: bool) -> String {
    let star = if favorite { "[*]" } else { "[ ]" };
    format!("{row:>3}. {name:<24} {star}")
}

#[test]
fn toggling_favorites() {
    Command::cargo_bin("sectioned-rolodex")
        .unwrap()
        .write_stdin("4\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorite updated successfully!"))
        .stdout(predicate::str::contains(row_line(3, "Bill Gates", true)));
}

#[test]
fn toggling_twice_restores_flag() {
    Command::cargo_bin("sectioned-rolodex")
        .unwrap()
        .write_stdin("4\n1\n4\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorite updated successfully!").count(2))
        .stdout(predicate::str::contains(row_line(1, "Elon Musk", true)).count(1))
        .stdout(predicate::str::contains(row_line(1, "Elon Musk", false)).count(2));
}
