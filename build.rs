fn main() {
    #[cfg(windows)]
    {
        // Embed the launcher icon when one is shipped alongside the sources.
        let icon = std::path::Path::new("assets/meu-bebe.ico");
        if icon.exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/meu-bebe.ico");
            res.compile().unwrap();
        } else {
            println!("cargo:warning=no launcher icon found, building without one");
        }
    }
}
