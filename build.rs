use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        // the binary falls back to its compiled-in defaults
        return;
    }

    // OUT_DIR is target/<profile>/build/<crate>-<hash>/out; the binary sits in target/<profile>
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let profile_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("OUT_DIR should sit three levels below the profile directory");

    fs::copy(config_path, profile_dir.join("config.toml"))
        .expect("Failed to copy config.toml next to the binary");
}
