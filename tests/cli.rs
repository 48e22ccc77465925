use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sha256-digest"))
}

#[test]
fn prints_prefixed_lowercase_hex() {
    let output = bin().arg("abc").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
    );
}

#[test]
fn empty_argument_is_valid() {
    let output = bin().arg("").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n"
    );
}

#[test]
fn missing_argument_is_a_usage_error() {
    let output = bin().env_remove("RUST_LOG").output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = bin()
        .env("RUST_LOG", "trace")
        .arg("hello world")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "0xb94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9\n"
    );
}

#[test]
fn flag_like_messages_are_hashed() {
    let cases = [
        (
            "-abc",
            "649d85fcc5d7e13d1217fc85fc746817f31c16fcf850002545dda492fd8caffc",
        ),
        (
            "--help",
            "0bdbc8fb00a40fb6f7bcaa79eeb92a5b6599b7588577bba6e853296fa5ea6af9",
        ),
        (
            "--version",
            "46dcd820f40e03f158584a12373b1a4cf12573d9caa962914261de85c0807695",
        ),
        (
            "-v",
            "81c36ccd44ef18baabad6e2d87038b72d606263bd6a3432b964a872023654fff",
        ),
        (
            "-",
            "3973e022e93220f9212c18d0d0c543ae7c309e46640da93a4a0314de999f5112",
        ),
    ];
    for (message, expected) in cases {
        let output = bin().env_remove("RUST_LOG").arg(message).output().unwrap();
        assert!(output.status.success(), "{message}: {:?}", output.status);
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            format!("0x{expected}\n"),
            "{message}"
        );
    }
}
