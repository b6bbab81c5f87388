//! Binary entrypoint for the Nexus application.
//!
//! In the browser it mounts the app. Natively it prints the document shell, which serves as the
//! `index.html` template for the wasm bundle.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    nexus_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("{}", nexus_site::DocumentShell::default().assemble());
}
