use crate::cli::BatchArgs;
use crate::output;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Duration;
use vault_backend::{execute_request, LatencyProfile, SimulatedBackend, VaultBackend, VaultRequest};
use vault_core::AppConfig;
use vault_domain::VaultStore;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

pub async fn handle(config: &AppConfig, args: BatchArgs) -> anyhow::Result<()> {
    let store = if args.empty || !config.effective_seed_mock_data() {
        VaultStore::new()
    } else {
        VaultStore::seeded()
    };
    let latency = match args.latency_ms {
        Some(ms) => LatencyProfile::none().with_create(Duration::from_millis(ms)),
        None => LatencyProfile::none(),
    };
    let backend = SimulatedBackend::new(store, latency);

    let stdout = io::stdout();
    let summary = match args.input {
        Some(path) => {
            let file = File::open(&path)?;
            run(&backend, BufReader::new(file), stdout.lock()).await?
        }
        None => run(&backend, io::stdin().lock(), stdout.lock()).await?,
    };

    tracing::info!(
        "Batch finished: {} succeeded, {} failed",
        summary.succeeded,
        summary.failed
    );
    Ok(())
}

/// Executes each non-blank line as one request and writes one response line.
///
/// Bad lines produce an error response; processing continues with the next.
pub async fn run<R: BufRead, W: Write>(
    backend: &dyn VaultBackend,
    reader: R,
    mut writer: W,
) -> anyhow::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<VaultRequest>(&line) {
            Ok(request) => match execute_request(backend, request).await {
                Ok(data) => {
                    summary.succeeded += 1;
                    output::success_line(data)?
                }
                Err(e) => {
                    summary.failed += 1;
                    output::error_line(&e.to_string())?
                }
            },
            Err(e) => {
                tracing::warn!("Skipping malformed request on line {}: {}", line_no + 1, e);
                summary.failed += 1;
                output::error_line(&format!("Invalid request on line {}: {}", line_no + 1, e))?
            }
        };
        writeln!(writer, "{}", response)?;
    }

    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn lines(output: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(output)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_run_continues_past_bad_lines() {
        let backend = SimulatedBackend::new(VaultStore::new(), LatencyProfile::none());
        let input = concat!(
            r#"{"op":"create_folder","name":"Recipes","icon":"restaurant-outline"}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"op":"create_folder","name":"  "}"#,
            "\n",
            r#"{"op":"list_folders"}"#,
            "\n",
        );
        let mut out = Vec::new();

        let summary = run(&backend, input.as_bytes(), &mut out).await.unwrap();

        assert_eq!(summary, BatchSummary { succeeded: 2, failed: 2 });
        let responses = lines(&out);
        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["data"]["name"], "Recipes");
        assert!(responses[1]["error"].as_str().unwrap().contains("line 2"));
        assert_eq!(responses[2]["success"], false);
        assert_eq!(responses[3]["data"].as_array().unwrap().len(), 1);
    }
}
