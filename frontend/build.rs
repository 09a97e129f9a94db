fn main() {
    // A `.env` next to Cargo.toml may set the endpoint instead of the shell.
    dotenv::dotenv().ok();

    if let Ok(url) = std::env::var("KISAN_MODEL_URL") {
        println!("cargo:rustc-env=KISAN_MODEL_URL={}", url);
    }

    println!("cargo:rerun-if-env-changed=KISAN_MODEL_URL");
    println!("cargo:rerun-if-changed=.env");
}
