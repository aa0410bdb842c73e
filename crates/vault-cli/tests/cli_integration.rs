use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn contentvault() -> Command {
    let mut cmd = Command::cargo_bin("contentvault").unwrap();
    cmd.env_remove("CONTENTVAULT_DEBUG_LOG")
        .env("CONTENTVAULT_CONFIG", "/nonexistent/contentvault/config.toml");
    cmd
}

fn parse_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Failed to parse JSON output"))
        .collect()
}

fn run_batch(args: &[&str], input: &str) -> Vec<Value> {
    let output = contentvault()
        .arg("batch")
        .args(args)
        .write_stdin(input.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    parse_lines(&output)
}

mod batch_tests {
    use super::*;

    #[test]
    fn test_lists_seed_folders() {
        let responses = run_batch(&[], "{\"op\":\"list_folders\"}\n");
        assert_eq!(responses.len(), 1);
        let folders = responses[0]["data"].as_array().unwrap();
        assert_eq!(folders.len(), 5);
        assert_eq!(folders[0]["name"], "Recipes");
        assert_eq!(folders[0]["item_count"], 2);
    }

    #[test]
    fn test_empty_flag_starts_without_samples() {
        let responses = run_batch(&["--empty"], "{\"op\":\"list_folders\"}\n");
        assert_eq!(responses[0]["data"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_created_folder_is_listed_with_zero_items() {
        let script = concat!(
            "{\"op\":\"create_folder\",\"name\":\"  Reading  \",\"icon\":\"bookmark-outline\"}\n",
            "{\"op\":\"list_folders\"}\n",
        );
        let responses = run_batch(&["--empty", "--latency-ms", "1"], script);
        assert_eq!(responses.len(), 2);
        let created = &responses[0]["data"];
        assert_eq!(created["name"], "Reading");
        assert_eq!(created["item_count"], 0);

        let folders = responses[1]["data"].as_array().unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0]["id"], created["id"]);
    }

    #[test]
    fn test_add_to_unknown_folder_reports_not_found() {
        let responses = run_batch(
            &["--empty"],
            "{\"op\":\"add_item\",\"folder_id\":\"missing\",\"title\":\"T\",\"url\":\"https://x\"}\n",
        );
        assert_eq!(responses[0]["success"], false);
        assert!(responses[0]["error"].as_str().unwrap().contains("missing"));
    }

    #[test]
    fn test_add_and_delete_in_seed_folder() {
        let script = concat!(
            "{\"op\":\"add_item\",\"folder_id\":\"2\",\"title\":\"Kyoto\",\"url\":\"https://kyoto\"}\n",
            "{\"op\":\"list_items\",\"folder_id\":\"2\"}\n",
            "{\"op\":\"delete_item\",\"folder_id\":\"2\",\"item_id\":\"nope\"}\n",
            "{\"op\":\"delete_folder\",\"folder_id\":\"1\"}\n",
            "{\"op\":\"list_items\",\"folder_id\":\"1\"}\n",
        );
        let responses = run_batch(&[], script);
        assert_eq!(responses.len(), 5);
        assert_eq!(responses[0]["data"]["title"], "Kyoto");
        assert_eq!(responses[0]["data"]["folder_id"], "2");
        assert_eq!(responses[1]["data"].as_array().unwrap().len(), 1);
        assert_eq!(responses[2]["data"]["deleted"], "nope");
        assert_eq!(responses[3]["data"]["deleted"], "1");
        assert_eq!(responses[4]["data"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_malformed_lines_do_not_stop_batch() {
        let responses = run_batch(
            &["--empty"],
            "{\"op\":\"explode\"}\n{\"op\":\"create_folder\",\"name\":\"\"}\n{\"op\":\"list_folders\"}\n",
        );
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["success"], false);
        assert!(responses[1]["error"].as_str().unwrap().contains("name"));
        assert_eq!(responses[2]["data"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_reads_requests_from_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("requests.jsonl");
        fs::write(&file, "{\"op\":\"list_items\",\"folder_id\":\"1\"}\n").unwrap();

        let output = contentvault()
            .args(["batch", "--input", file.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let responses = parse_lines(&output);
        let items = responses[0]["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], "101");
    }

    #[test]
    fn test_missing_input_file_fails() {
        let dir = tempdir().unwrap();
        contentvault()
            .args([
                "batch",
                "--input",
                dir.path().join("missing.jsonl").to_str().unwrap(),
            ])
            .assert()
            .failure();
    }
}

mod misc_tests {
    use super::*;

    #[test]
    fn test_icons_lists_picker() {
        let output = contentvault()
            .arg("icons")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = &parse_lines(&output)[0];
        assert_eq!(json["data"]["count"], 17);
        assert_eq!(json["data"]["items"][0]["name"], "folder-outline");
    }

    #[test]
    fn test_completions_bash() {
        contentvault()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("contentvault"));
    }

    #[test]
    fn test_config_disables_seed_data() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "seed_mock_data = false\n").unwrap();

        let output = contentvault()
            .args(["--config", config.to_str().unwrap(), "batch"])
            .write_stdin("{\"op\":\"list_folders\"}\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(parse_lines(&output)[0]["data"].as_array().unwrap().len(), 0);
    }
}
