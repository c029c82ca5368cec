use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl CliResult {
    /// Number of times `needle` appears on stdout.
    pub fn count(&self, needle: &str) -> usize {
        self.stdout.matches(needle).count()
    }
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CliRunner {
    stdin: Vec<u8>,
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose stdin holds `input` and then reaches end of file.
    pub fn with_input(input: &str) -> Self {
        Self::with_bytes(input.as_bytes())
    }

    /// Like [`CliRunner::with_input`] for input that need not be UTF-8.
    pub fn with_bytes(input: &[u8]) -> Self {
        Self {
            stdin: input.to_vec(),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        let argv: Vec<String> = std::iter::once("twentyone".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let mut input = Cursor::new(self.stdin.clone());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = twentyone_cli::run(argv, &mut input, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
        }
    }

    /// Runs with extra environment variables, restoring them afterwards.
    ///
    /// Callers must serialise tests that use this.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        self.run(args)
    }

    /// Runs the compiled `twentyone` binary with stdin piped from the runner.
    pub fn run_binary(&self, args: &[&str]) -> CliResult {
        let mut child = Command::new(env!("CARGO_BIN_EXE_twentyone"))
            .args(args)
            .env_remove("TWENTYONE_CONFIG")
            .env_remove("TWENTYONE_SEED")
            .env_remove("TWENTYONE_CPU_DELAY_MS")
            .env_remove("TWENTYONE_AI")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn CLI binary");

        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(&self.stdin);
        }

        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
