//! Build script for embedding the web UI.
//!
//! In release builds of the native binary this runs Trunk so that `dist/`
//! exists for rust-embed to pick up. Debug builds skip it; rust-embed reads
//! `dist/` from disk at runtime and `verdict serve` answers 500 until the
//! UI has been built.
//!
//! Set `VERDICT_SKIP_FRONTEND=1` to skip the Trunk step entirely.

fn main() {
    println!("cargo:rerun-if-env-changed=VERDICT_SKIP_FRONTEND");

    #[cfg(not(debug_assertions))]
    {
        use std::process::Command;

        // Trunk itself compiles the wasm bundle with only `frontend` on.
        let backend = std::env::var_os("CARGO_FEATURE_BACKEND").is_some();
        let frontend = std::env::var_os("CARGO_FEATURE_FRONTEND").is_some();
        let skipped = std::env::var_os("VERDICT_SKIP_FRONTEND").is_some();
        if !backend || frontend || skipped {
            return;
        }

        println!("cargo:rerun-if-changed=src/frontend");
        println!("cargo:rerun-if-changed=Trunk.toml");
        println!("cargo:rerun-if-changed=index.html");

        println!("cargo:warning=Building web UI with Trunk...");

        let status = match Command::new("trunk")
            .args(["build", "--release", "--dist", "dist"])
            .env("CARGO_TARGET_DIR", "target/trunk")
            .status()
        {
            Ok(status) => status,
            Err(e) => {
                println!(
                    "cargo:warning=trunk not available ({e}); `verdict serve` will ship without the web UI"
                );
                return;
            }
        };

        if !status.success() {
            panic!(
                "Trunk build failed with exit code: {:?}. \
                 Ensure the frontend builds with `trunk build --release`.",
                status.code()
            );
        }

        println!("cargo:warning=Web UI build completed");
    }
}
