use std::env;

/// Maps the compile target's instruction-set features onto the cfgs that
/// `src/simd/mod.rs` dispatches on. Nothing here inspects the build host's CPU:
/// only what the target was configured with (e.g. `-C target-feature=+avx2`)
/// counts.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_PORTABLE");

    for cfg in ["intrin_sse2", "intrin_ssse3", "intrin_avx2", "intrin_aes"] {
        println!("cargo:rustc-check-cfg=cfg({})", cfg);
    }

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let forced_portable = env::var_os("CARGO_FEATURE_PORTABLE").is_some();

    if arch != "x86_64" || forced_portable {
        return;
    }

    let has = |name: &str| features.split(',').any(|f| f == name);

    if has("sse2") {
        println!("cargo:rustc-cfg=intrin_sse2");
    }
    if has("ssse3") {
        println!("cargo:rustc-cfg=intrin_ssse3");
    }
    if has("avx2") {
        println!("cargo:rustc-cfg=intrin_avx2");
    }
    if has("aes") && has("sse2") {
        println!("cargo:rustc-cfg=intrin_aes");
    }
}
