//! `skald version` - version information.

pub fn execute() {
    println!("skald {}", env!("CARGO_PKG_VERSION"));
    if cfg!(feature = "render") {
        println!("render backend: svg (plotters)");
    } else {
        println!("render backend: none");
    }
}
