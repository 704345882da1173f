// Generates the `compile_time` module from config/<profile>.toml at the
// workspace root. LUTHOR_BUILD_PROFILE picks the profile (default
// "development"), LUTHOR_CONFIG_DIR the directory (default "config").

use serde::Deserialize;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize)]
struct BuildConfig {
    file_processing: FileProcessing,
    lexical: Lexical,
    logging: Logging,
}

#[derive(Deserialize)]
struct FileProcessing {
    max_file_size: u64,
}

#[derive(Deserialize)]
struct Lexical {
    token_capacity_divisor: usize,
}

#[derive(Deserialize)]
struct Logging {
    max_log_message_length: usize,
}

impl BuildConfig {
    fn problems(&self, profile: &str) -> Vec<String> {
        let mut problems = Vec::new();
        let max_file_size = self.file_processing.max_file_size;

        if max_file_size == 0 || max_file_size > 1_000_000_000 {
            problems.push(format!("max_file_size {} outside 1..=1e9", max_file_size));
        }
        if profile == "production" && max_file_size > 50_000_000 {
            problems.push("max_file_size above 50MB in production".to_string());
        }
        if self.lexical.token_capacity_divisor == 0 {
            problems.push("token_capacity_divisor must be at least 1".to_string());
        }
        if self.logging.max_log_message_length < 64 {
            problems.push("max_log_message_length must be at least 64".to_string());
        }
        problems
    }

    fn render(&self, profile: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// Generated by build.rs from the {:?} profile", profile);
        let _ = writeln!(out, "pub mod compile_time {{");
        let _ = writeln!(out, "    pub const PROFILE: &str = {:?};", profile);
        let _ = writeln!(out, "    pub mod file_processing {{");
        let _ = writeln!(out, "        pub const MAX_FILE_SIZE: u64 = {};", self.file_processing.max_file_size);
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "    pub mod lexical {{");
        let _ = writeln!(out, "        pub const TOKEN_CAPACITY_DIVISOR: usize = {};", self.lexical.token_capacity_divisor);
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "    pub mod logging {{");
        let _ = writeln!(out, "        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};", self.logging.max_log_message_length);
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "}}");
        out
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed=LUTHOR_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=LUTHOR_CONFIG_DIR");

    let profile = env::var("LUTHOR_BUILD_PROFILE").unwrap_or_else(|_| "development".into());
    let config_dir = env::var("LUTHOR_CONFIG_DIR").unwrap_or_else(|_| "config".into());

    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR unset"));
    let config_path = manifest_dir
        .parent()
        .expect("luthor crate has no parent directory")
        .join(config_dir)
        .join(format!("{}.toml", profile));
    println!("cargo:rerun-if-changed={}", config_path.display());

    let text = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", config_path.display(), e));
    let config: BuildConfig = toml::from_str(&text)
        .unwrap_or_else(|e| panic!("invalid {}: {}", config_path.display(), e));

    let problems = config.problems(&profile);
    if !problems.is_empty() {
        panic!("{}:\n  {}", config_path.display(), problems.join("\n  "));
    }

    let out_path = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR unset")).join("constants.rs");
    fs::write(&out_path, config.render(&profile))
        .unwrap_or_else(|e| panic!("cannot write {}: {}", out_path.display(), e));
}
