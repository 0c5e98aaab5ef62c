//! Shared test utilities for integration tests
//!
//! Provides a deployment fixture written into a fresh temporary directory, plus a helper
//! for running the built binary against it.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A representative deployment file: comments, a non-string field, two chains.
pub const FIXTURE: &str = r#"# Deployment addresses, one table per chain.
# Keep this file under version control.

[deployment.anvil]
name = "Anvil"
id = 31337
admin = "0x0000000000000000000000000000000000000000"
zkc = "0x5FbDB2315678afecb367f032d93F642f64180aa3" # local proxy
rpc-url = "http://localhost:8545"

[deployment.sepolia]
# Ethereum Sepolia testnet
name = "Sepolia"
id = 11155111
zkc = "0x1111111111111111111111111111111111111111"
vezkc = "0x2222222222222222222222222222222222222222"
"#;

/// Temporary working directory holding `deployment.toml`
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn with_fixture() -> Self {
        Self::with_contents(FIXTURE)
    }

    pub fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("deployment.toml"), contents).unwrap();
        Self { dir }
    }

    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn deployment_path(&self) -> PathBuf {
        self.dir.path().join("deployment.toml")
    }

    pub fn read(&self) -> String {
        fs::read_to_string(self.deployment_path()).unwrap()
    }

    /// Run the binary inside the workspace with colors and env overrides cleared.
    pub fn run(&self, args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_update-deployment");
        Command::new(bin)
            .current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("DEPLOYMENT_PATCH_FILE")
            .env_remove("DEPLOYMENT_PATCH_LOG")
            .env_remove("DEPLOYMENT_PATCH_LOGGING__LEVEL")
            .args(args)
            .output()
            .unwrap()
    }
}
