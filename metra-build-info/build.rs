use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=PROFILE");
    println!("cargo:rerun-if-env-changed=OPT_LEVEL");
    println!("cargo:rerun-if-env-changed=DEBUG");

    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
    let debug = env::var("DEBUG").map(|d| d != "false" && d != "0").unwrap_or(false);

    let build_type = match opt_level.as_str() {
        "0" => "Debug",
        "s" | "z" => "MinSizeRel",
        _ if debug => "RelWithDebInfo",
        _ => "Release",
    };

    println!("cargo:rustc-env=METRA_BUILD_TYPE={}", build_type);
}
