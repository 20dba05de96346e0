use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{create_dir, write};

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> Command {
        Command::cargo_bin("csv2parquet").unwrap()
    }

    #[test]
    fn test_zero_argument_run_converts_the_data_directory() {
        let temp = tempfile::tempdir().unwrap();
        create_dir(temp.path().join("data")).unwrap();
        write(
            temp.path().join("data").join("a.csv"),
            "id,name\n1,Alice\n2,Bob\n",
        )
        .unwrap();

        binary().current_dir(temp.path()).assert().success();

        assert!(temp.path().join("data").join("a.parquet").exists());
    }

    #[test]
    fn test_missing_data_directory_is_a_silent_noop() {
        let temp = tempfile::tempdir().unwrap();

        binary().current_dir(temp.path()).assert().success();
    }

    #[test]
    fn test_malformed_input_exits_nonzero() {
        let temp = tempfile::tempdir().unwrap();
        create_dir(temp.path().join("data")).unwrap();
        write(temp.path().join("data").join("bad.csv"), "x,y\n1\n2,3,4\n").unwrap();

        binary()
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read table"));
    }

    #[test]
    fn test_dry_run_writes_no_files() {
        let temp = tempfile::tempdir().unwrap();
        create_dir(temp.path().join("data")).unwrap();
        write(temp.path().join("data").join("a.csv"), "id\n1\n").unwrap();

        binary()
            .current_dir(temp.path())
            .arg("--dry")
            .assert()
            .success();

        assert!(!temp.path().join("data").join("a.parquet").exists());
    }

    #[test]
    fn test_directory_override() {
        let temp = tempfile::tempdir().unwrap();
        create_dir(temp.path().join("exports")).unwrap();
        write(temp.path().join("exports").join("a.csv"), "id\n1\n").unwrap();

        binary()
            .current_dir(temp.path())
            .args(["--directory", "exports"])
            .assert()
            .success();

        assert!(temp.path().join("exports").join("a.parquet").exists());
    }
}
