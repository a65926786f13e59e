//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keysplit command running in the test directory.
    ///
    /// Colors and inherited logging configuration are disabled so output
    /// can be matched exactly.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keysplit").expect("failed to find keysplit binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("KEYSPLIT_LOG");
        cmd.env_remove("KEYSPLIT_CONFIG");
        cmd
    }

    /// `keysplit split` with the secret on stdin.
    pub fn split(&self, secret: &[u8], args: &[&str]) -> Output {
        self.cmd()
            .arg("split")
            .args(args)
            .write_stdin(secret.to_vec())
            .output()
            .expect("failed to run keysplit split")
    }

    /// `keysplit combine` with shares as arguments.
    pub fn combine(&self, shares: &[String], args: &[&str]) -> Output {
        self.cmd()
            .arg("combine")
            .args(args)
            .args(shares)
            .output()
            .expect("failed to run keysplit combine")
    }
}
