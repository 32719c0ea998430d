use std::process::{Command, Output};

fn roto(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roto"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn prints_rotated_point() {
    let out = roto(&["-point", "1,2,3", "-angle", "0", "-axis", "y"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1 2 3\n");
}

#[test]
fn prints_info() {
    let out = roto(&["-info"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim_end(), roto::info());
}

#[test]
fn bad_arguments_exit_with_status_one() {
    let out = roto(&["-angle", "10"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no point given"));
}

#[test]
fn zero_axis_exits_with_status_one() {
    let out = roto(&["-point", "1,1,1", "-axis", "0,0,0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("zero magnitude"));
}
