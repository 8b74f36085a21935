#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/huellero.ico must be present for Windows builds
    let mut res = WindowsResource::new();
    res.set_icon("res/huellero.ico")
        .set("FileDescription", "Huellero attendance CLI")
        .set("ProductName", "Huellero")
        .set("OriginalFilename", "huellero.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
