use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gtd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gtd").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("GTD_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

// ==============
// parse command
// ==============

#[test]
fn test_parse_add() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .args(["parse", "add", "buy", "milk"])
        .assert()
        .success()
        .stdout("add \"buy milk\"\n");
}

#[test]
fn test_parse_move_flag_form_json() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .args(["--output", "json", "parse", "move", "1", "2", "-f=next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\": \"move\""))
        .stdout(predicate::str::contains("\"folder\": \"next\""));
}

#[test]
fn test_parse_folder_shorthand() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .args(["parse", "next", "1", "2"])
        .assert()
        .success()
        .stdout("move 1 2 -> next\n");
}

#[test]
fn test_parse_incorrect_exits_with_two() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .args(["parse", "list", "archive"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("error:"))
        .stdout(predicate::str::contains("inbox,next,wait,proj,someday,some"));
}

#[test]
fn test_parse_separator_rejected() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .args(["parse", "add", "a|b"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("'|'"));
}

// ================
// other commands
// ================

#[test]
fn test_folders() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .arg("folders")
        .assert()
        .success()
        .stdout("inbox\nnext\nwait\nproj\nsomeday\nsome\n");
}

#[test]
fn test_init_config_then_json_default() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");

    gtd(&home)
        .args(["init-config", "--config"])
        .arg(&config)
        .assert()
        .success();
    assert!(config.exists());

    std::fs::write(&config, "general:\n  default_output: json\n").unwrap();
    gtd(&home)
        .env("GTD_CONFIG", &config)
        .args(["parse", "exit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\": \"exit\""));
}

#[test]
fn test_output_flag_overrides_config_default() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("json.yaml");
    std::fs::write(&config, "general:\n  default_output: json\n").unwrap();

    gtd(&home)
        .arg("--config")
        .arg(&config)
        .args(["--output", "pretty", "parse", "exit"])
        .assert()
        .success()
        .stdout("exit\n");
}

#[test]
fn test_color_always_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("color.yaml");
    std::fs::write(&config, "general:\n  color: always\n").unwrap();

    let mut cmd = Command::cargo_bin("gtd").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("GTD_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .args(["parse", "bogus"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\u{1b}["));

    // --no-color still wins over the config
    gtd(&home)
        .arg("--config")
        .arg(&config)
        .args(["parse", "bogus"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_init_config_default_location() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".gtd").join("config.yaml");

    gtd(&home)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(expected.exists());

    // A second run refuses to overwrite
    gtd(&home)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_missing_home_falls_back_to_working_directory() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir(home.path().join(".gtd")).unwrap();
    std::fs::write(
        home.path().join(".gtd").join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    gtd(&home)
        .env_remove("HOME")
        .current_dir(home.path())
        .args(["parse", "exit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\": \"exit\""))
        .stderr(predicate::str::contains("could not determine home directory"));
}

#[test]
fn test_bad_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.yaml");
    std::fs::write(&config, "general: [").unwrap();

    gtd(&home)
        .arg("--config")
        .arg(&config)
        .arg("folders")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load configuration"));
}

// =====
// shell
// =====

#[test]
fn test_shell_reads_until_exit() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .write_stdin("add write report\nbogus\ndone 2 1\nexit\nadd ignored\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("add \"write report\""))
        .stdout(predicate::str::contains("error: IncorrectCommand"))
        .stdout(predicate::str::contains("done 2 1"))
        .stdout(predicate::str::contains("ignored").not())
        .stdout(predicate::str::contains("3 executed, 1 rejected"));
}

#[test]
fn test_shell_stops_at_end_of_input() {
    let home = TempDir::new().unwrap();
    gtd(&home)
        .arg("shell")
        .write_stdin("list someday\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("list someday"))
        .stdout(predicate::str::contains("1 executed, 0 rejected"));
}
