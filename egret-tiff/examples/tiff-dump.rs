use egret_tiff::{Options, Tiff};

fn main() {
    let path = std::env::args().nth(1).unwrap();

    let tiff = Tiff::open_with(&path, Options::new().use_sidecar(false)).unwrap();

    let root = tiff.root_directory().unwrap();
    let _ = tiff.exif_directory(&root);
    let _ = tiff.gps_directory(&root);
    let _ = tiff.sub_ifds(&root);

    println!("{}", tiff.debug_dump());
}
