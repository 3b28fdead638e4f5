use image::{ImageFormat, Rgba, RgbaImage};
use msdf_prep::{codec, pack};
use tempfile::tempdir;

#[test]
fn packed_atlas_round_trips_through_png() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255])).save(&a).unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 255])).save(&b).unwrap();

    let images = vec![codec::load_image(&a).unwrap(), codec::load_image(&b).unwrap()];
    let (layout, canvas) = pack::compose(&images).unwrap();
    assert_eq!((layout.width, layout.height), (8, 16));

    let out = dir.path().join("atlas.png");
    codec::write_png_rgba8(&canvas, &out).unwrap();

    let reread = image::open(&out).unwrap().to_rgba8();
    assert_eq!(reread.dimensions(), (8, 16));
    assert_eq!(reread.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(reread.get_pixel(4, 0).0, [0, 255, 0, 255]);
    assert_eq!(reread.get_pixel(0, 4).0, [0, 0, 0, 0]);
}

#[test]
fn format_is_sniffed_from_content_not_extension() {
    let dir = tempdir().unwrap();
    // PNG bytes under a lying extension
    let path = dir.path().join("actually_png.jpg");
    RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let loaded = codec::load_image(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (2, 2));
}

#[test]
fn manifest_sidecar_serializes_slot_per_source() {
    let layout = pack::plan_layout(&[(6, 6), (6, 6), (6, 4)]).unwrap();
    let names = vec!["a".into(), "b".into(), "c".into()];
    let manifest = pack::manifest(&layout, &names);
    let js = serde_json::to_string_pretty(&manifest).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&js).unwrap();

    assert_eq!(parsed["atlas_width"], 12);
    assert_eq!(parsed["atlas_height"], 24);
    assert_eq!(parsed["entries"].as_array().unwrap().len(), 3);
    // third source wraps below the first row
    assert_eq!(parsed["entries"][2]["px"]["x"], 0);
    assert_eq!(parsed["entries"][2]["px"]["y"], 4);
}
