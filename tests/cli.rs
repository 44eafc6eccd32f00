use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fstat"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // the child may exit on a config error before reading anything
    let _ = child.stdin.take().unwrap().write_all(stdin.as_ref());
    child.wait_with_output().unwrap()
}

fn assert_fails(args: &[&str], code: i32) {
    let out = run_with_stdin(args, "Cargo.toml\n");
    assert_eq!(out.status.code(), Some(code), "args: {args:?}");
    assert!(out.stdout.is_empty(), "args: {args:?}");
    assert!(!out.stderr.is_empty(), "args: {args:?}");
}

#[test]
fn test_conflicting_flags_exit_codes() {
    assert_fails(&["-s", "-S"], 2);
    assert_fails(&["-n", "-i"], 2);
    assert_fails(&["--csv", "--html"], 3);
    assert_fails(&["-t", "--csv"], 4);
    assert_fails(&["-t", "--json"], 4);
    assert_fails(&["--no-truncate", "--width", "30"], 5);
    assert_fails(&["-x", "("], 6);
    assert_fails(&["-r", "("], 7);
    assert_fails(&["--newer", "yesterday"], 8);
    assert_fails(&["--newer", "20200102", "--older", "20200101"], 9);
    assert_fails(&["--larger", "100", "--smaller", "10"], 10);
}

#[test]
fn test_unparsable_arguments_use_their_own_exit_code() {
    assert_fails(&["--larger", "abc"], 16);
    assert_fails(&["--width", "0"], 16);
    assert_fails(&["--no-such-flag"], 16);

    let help = run_with_stdin(&["--help"], "");
    assert!(help.status.success());
    assert!(!help.stdout.is_empty());
}

#[test]
fn test_undecodable_name_does_not_drop_valid_rows() {
    let out = run_with_stdin(&["--csv"], b"Cargo.toml\nbad\xff\xfename\n");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Cargo.toml"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not valid UTF-8"));
}

#[test]
fn test_empty_input_list() {
    let out = run_with_stdin(&[], "\n\n");
    assert_eq!(out.status.code(), Some(12));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_glob_without_matches() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.nothing", dir.path().display());
    let out = run_with_stdin(&["-g", &pattern], "");
    assert_eq!(out.status.code(), Some(13));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_no_surviving_entries() {
    let missing = "definitely/not/here.txt\n";

    let table = run_with_stdin(&["-q"], missing);
    assert!(table.status.success());
    assert!(table.stdout.is_empty());
    assert!(table.stderr.is_empty());

    let csv = run_with_stdin(&["-q", "--csv"], missing);
    assert!(csv.status.success());
    assert_eq!(
        String::from_utf8_lossy(&csv.stdout),
        "\"Mod Time\",\"Size\",\"Type\",\"Name\"\n"
    );

    let json = run_with_stdin(&["-q", "--json"], missing);
    assert_eq!(String::from_utf8_lossy(&json.stdout), "[]\n");

    let html = run_with_stdin(&["-q", "--html"], missing);
    assert!(String::from_utf8_lossy(&html.stdout).contains("<th>Name</th>"));
}

#[test]
fn test_stat_errors_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.txt");
    std::fs::write(&present, "hello").unwrap();
    let input = format!("{}\n{}/absent.txt\n", present.display(), dir.path().display());

    let out = run_with_stdin(&["--csv"], &input);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("present.txt"));
    assert!(stdout.contains("\"5\""));
    assert!(!stdout.contains("absent.txt"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.txt"));
}

#[test]
fn test_totals_table() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("list.txt");
    let mut lines = String::new();
    for (name, size) in [("a.bin", 10), ("b.bin", 20), ("c.bin", 30)] {
        let path = dir.path().join(name);
        std::fs::write(&path, vec![0u8; size]).unwrap();
        lines.push_str(&format!("{}\n", path.display()));
    }
    lines.push_str(&format!("{}\n", dir.path().display()));
    std::fs::write(&list, lines).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_fstat"))
        .args(["-t", "-s", "--no-truncate", list.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("total size"));
    assert!(stdout.contains("average files per directory"));
    let a = stdout.find("a.bin").unwrap();
    let c = stdout.find("c.bin").unwrap();
    assert!(a < c);
}
