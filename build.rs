/// Build identifier of the companion binaries shipped next to the launcher.
const DEFAULT_VERSION: &str = "fe69787a187edfbcf28dd6d030fbe61f7a3f32c0";

fn main() {
    println!("cargo:rerun-if-env-changed=INVOKE_BINARY_VERSION");

    // Distributors pin a different companion build by setting the variable at build time.
    let version = std::env::var("INVOKE_BINARY_VERSION")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    println!("cargo:rustc-env=INVOKE_BINARY_VERSION={}", version);
}
