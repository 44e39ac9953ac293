//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables that would leak the developer's own setup into a test.
const ISOLATED_VARS: &[&str] = &[
    "HUSH_KEY_FILE",
    "HUSH_PROVIDER",
    "HUSH_TIMEOUT",
    "HUSH_FILE",
    "HUSH_LOG",
];

impl Test {
    /// Create a hush command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - HUSH_CONFIG pointing at the temporary config file
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("hush").expect("failed to find hush binary");
        cmd.env("HOME", self.home.path());
        cmd.env("HUSH_CONFIG", self.config_path());
        cmd.env("NO_COLOR", "1");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `hush load`.
    pub fn load(&self) -> Output {
        self.load_with(&[])
    }

    /// Shortcut for `hush load <args>`.
    pub fn load_with(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("load")
            .args(args)
            .output()
            .expect("failed to run hush load")
    }

    /// Shortcut for `hush keys`.
    pub fn keys(&self) -> Output {
        self.cmd()
            .arg("keys")
            .output()
            .expect("failed to run hush keys")
    }

    /// Shortcut for `hush keys --json`.
    pub fn keys_json(&self) -> Output {
        self.cmd()
            .args(["keys", "--json"])
            .output()
            .expect("failed to run hush keys --json")
    }

    /// Shortcut for `hush run -- <command>`.
    pub fn run(&self, command: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("run").arg("--");
        for arg in command {
            cmd.arg(arg);
        }
        cmd.output().expect("failed to run hush run")
    }

    /// Evaluate `hush load` output in `sh` and print `$name` afterwards.
    pub fn eval_and_print(&self, name: &str) -> String {
        let output = self.load();
        super::assert_success(&output);

        let script = format!("{}\nprintf '%s' \"${}\"", super::stdout(&output), name);
        let evaluated = std::process::Command::new("sh")
            .arg("-c")
            .arg(script)
            .output()
            .expect("failed to run sh");
        super::assert_success(&evaluated);
        String::from_utf8(evaluated.stdout).expect("non-UTF-8 value")
    }
}
