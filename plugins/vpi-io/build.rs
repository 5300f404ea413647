fn main() {
    // The vpi_* symbols resolve against the simulator at load time. Linux
    // linkers accept undefined symbols in a cdylib; macOS has to be told to
    // defer them to the loader.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        println!("cargo:rustc-cdylib-link-arg=-undefined");
        println!("cargo:rustc-cdylib-link-arg=dynamic_lookup");
    }
}
