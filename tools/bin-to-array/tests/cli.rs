//! Runs the `bin-to-array` executable and checks its output streams and exit status.

use std::{fs, process::Command};

fn bin_to_array() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bin-to-array"));
    command.env_remove("BIN_TO_ARRAY_WRAP_STYLE");
    command
}

#[test]
fn wrap_style_from_environment() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("font.pfn");
    fs::write(&path, (0..16).collect::<Vec<u8>>()).unwrap();

    let output = bin_to_array()
        .env("BIN_TO_ARRAY_WRAP_STYLE", "legacy")
        .arg(&path)
        .arg("font_data")
        .output()
        .unwrap();

    let expected = concat!(
        "const unsigned char font_data[] = {\n",
        "0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, ",
        "0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, \n",
        "\n",
        "};\n",
        "const unsigned int font_data_len = 16;\n",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn default_wrap_style_is_compact() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("font.pfn");
    fs::write(&path, [0x00, 0xff]).unwrap();

    let output = bin_to_array().arg(&path).arg("font_data").output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "const unsigned char font_data[] = {\n0x00, 0xff,\n};\nconst unsigned int font_data_len = 2;\n"
    );
}

#[test]
fn missing_file_fails_without_stdout() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("missing.pfn");

    let output = bin_to_array().arg(&path).arg("font_data").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(&format!("file '{}' not found", path.display())));
}

#[test]
fn missing_arguments_fail_without_stdout() {
    let output = bin_to_array().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let output = bin_to_array().arg("font.pfn").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
