use csv_to_parquet::execute_based_on_settings;
use csv_to_parquet::settings::Settings;
use std::fs::write;
use std::path::PathBuf;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_drives_discovery() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path().join("notes.csv"), "id\n1\n").unwrap();
        write(temp.path().join("weird_csv"), "id\n1\n").unwrap();

        let settings_file = temp.path().join("csv2parquet.yaml");
        write(
            &settings_file,
            format!(
                "directory: {}\npattern: \"*.csv\"\n",
                temp.path().display()
            ),
        )
        .unwrap();

        let settings = Settings::load(&settings_file).unwrap();
        assert_eq!(settings.pattern, "*.csv");

        execute_based_on_settings(&settings, false).unwrap();

        assert!(temp.path().join("notes.parquet").exists());
        assert!(
            !temp.path().join("weird_parquet").exists(),
            "The narrower *.csv pattern should exclude dotless names"
        );
    }

    #[test]
    fn test_defaults_target_the_data_subdirectory() {
        let settings = Settings::default();
        assert_eq!(settings.directory, PathBuf::from("data"));
        assert_eq!(settings.pattern, "*csv");
    }
}
