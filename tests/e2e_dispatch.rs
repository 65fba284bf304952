
use std::io::Write;

use support_http::{closed_port, run_volley, spawn_echo_server_or_skip};

fn summary_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|line| line.starts_with("total="))
        .collect()
}

fn request_line_count(stdout: &str) -> usize {
    stdout.lines().filter(|line| line.starts_with('[')).count()
}

fn target_args(host: &str, port: u16) -> Vec<String> {
    vec![
        "--host".to_owned(),
        host.to_owned(),
        "--port".to_owned(),
        port.to_string(),
        "--path".to_owned(),
        "/hello/".to_owned(),
    ]
}

#[test]
fn fifty_successes_print_one_summary() -> Result<(), String> {
    let Some((addr, _server)) = spawn_echo_server_or_skip()? else {
        return Ok(());
    };

    let mut args = vec!["50".to_owned()];
    args.extend(target_args(&addr.ip().to_string(), addr.port()));
    let output = run_volley(args)?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if summary_lines(&stdout) != ["total=50, succeeded=50, failed=0"] {
        return Err(format!("unexpected summary in output:\n{}", stdout));
    }
    if request_line_count(&stdout) != 50 {
        return Err(format!("expected 50 request lines in output:\n{}", stdout));
    }
    let last = stdout
        .lines()
        .filter(|line| !line.is_empty())
        .next_back()
        .unwrap_or_default();
    if !last.starts_with("total=") {
        return Err(format!("summary was not the last line:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn unreachable_target_counts_failures_and_exits_zero() -> Result<(), String> {
    let Some(port) = closed_port()? else {
        return Ok(());
    };

    let mut args = vec!["20".to_owned()];
    args.extend(target_args("127.0.0.1", port));
    let output = run_volley(args)?;
    if !output.status.success() {
        return Err(format!(
            "expected exit 0 even with failures, stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if summary_lines(&stdout) != ["total=20, succeeded=0, failed=20"] {
        return Err(format!("unexpected summary in output:\n{}", stdout));
    }
    if request_line_count(&stdout) != 20 {
        return Err(format!("expected 20 request lines in output:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn missing_count_runs_one_request() -> Result<(), String> {
    let Some((addr, _server)) = spawn_echo_server_or_skip()? else {
        return Ok(());
    };

    let output = run_volley(target_args(&addr.ip().to_string(), addr.port()))?;
    if !output.status.success() {
        return Err("expected exit 0".to_owned());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if summary_lines(&stdout) != ["total=1, succeeded=1, failed=0"] {
        return Err(format!("unexpected summary in output:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn unparsable_count_runs_one_request() -> Result<(), String> {
    let Some((addr, _server)) = spawn_echo_server_or_skip()? else {
        return Ok(());
    };

    let mut args = vec!["lots".to_owned()];
    args.extend(target_args(&addr.ip().to_string(), addr.port()));
    let output = run_volley(args)?;
    if !output.status.success() {
        return Err("expected exit 0".to_owned());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if summary_lines(&stdout) != ["total=1, succeeded=1, failed=0"] {
        return Err(format!("unexpected summary in output:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn config_file_supplies_count_and_cli_wins() -> Result<(), String> {
    let Some((addr, _server)) = spawn_echo_server_or_skip()? else {
        return Ok(());
    };

    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("volley.toml");
    let mut file = std::fs::File::create(&config_path)
        .map_err(|err| format!("create config failed: {}", err))?;
    write!(
        file,
        "host = \"{}\"\nport = {}\npath = \"/hello/\"\ncount = 3\n",
        addr.ip(),
        addr.port()
    )
    .map_err(|err| format!("write config failed: {}", err))?;
    drop(file);
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = run_volley(["--config".to_owned(), config_arg.clone()])?;
    if !output.status.success() {
        return Err("expected exit 0".to_owned());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if summary_lines(&stdout) != ["total=3, succeeded=3, failed=0"] {
        return Err(format!("config count was not applied:\n{}", stdout));
    }

    let output = run_volley(["5".to_owned(), "--config".to_owned(), config_arg])?;
    if !output.status.success() {
        return Err("expected exit 0".to_owned());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if summary_lines(&stdout) != ["total=5, succeeded=5, failed=0"] {
        return Err(format!("CLI count did not win over config:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn malformed_config_file_fails_the_run() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("volley.toml");
    std::fs::write(&config_path, "count = \"many\"")
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_volley([
        "--config".to_owned(),
        config_path.to_string_lossy().into_owned(),
    ])?;
    if output.status.success() {
        return Err("expected a non-zero exit for a malformed config".to_owned());
    }
    Ok(())
}
