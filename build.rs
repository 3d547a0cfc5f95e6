use std::env;
use std::fs;
use std::path::Path;

// Leídas por el cliente en tiempo de compilación con option_env!
const TRACKED_VARS: &[&str] = &["API_BASE_URL"];

fn main() {
    let env_file = Path::new(".env");

    match fs::read_to_string(env_file) {
        Ok(contents) => {
            println!("cargo:rerun-if-changed=.env");
            for (key, value) in contents.lines().filter_map(parse_env_line) {
                // El entorno del shell gana sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
        Err(_) => {
            println!("cargo:warning=Sin .env: el cockpit apuntará a http://localhost:8000");
        }
    }

    for var in TRACKED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// `KEY=VALUE`, `KEY="VALUE"`; ignora vacías y comentarios
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}
