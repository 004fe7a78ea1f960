use std::io::Cursor;

use super::*;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "cricket_card_assets_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn team_names_normalize_to_file_stems() {
    assert_eq!(normalize_team_name("Mumbai Indians"), "mumbai_indians");
    assert_eq!(
        normalize_team_name("Royal Challengers Bengaluru"),
        "royal_challengers_bengaluru"
    );
    assert_eq!(normalize_team_name("KKR"), "kkr");
}

#[test]
fn logo_path_uses_logo_dir() {
    let assets = AssetPaths::under("res");
    assert_eq!(
        logo_path(&assets, "Chennai Super Kings"),
        Path::new("res")
            .join("ipl_logos")
            .join("chennai_super_kings.png")
    );
}

#[test]
fn find_logo_only_when_present() {
    let root = temp_dir("find");
    let assets = AssetPaths::under(&root);
    std::fs::create_dir_all(&assets.logo_dir).unwrap();
    std::fs::write(
        assets.logo_dir.join("gujarat_titans.png"),
        png_bytes(2, 2, [1, 2, 3, 255]),
    )
    .unwrap();

    assert!(find_logo(&assets, "Gujarat Titans").is_some());
    assert!(find_logo(&assets, "Unknown XI").is_none());

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let prepared = decode_image(&png_bytes(1, 1, [100, 50, 200, 128])).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_asset_error() {
    assert!(matches!(
        decode_image(b"not an image"),
        Err(CardError::Asset(_))
    ));
}

#[test]
fn logo_is_resized_to_square() {
    let root = temp_dir("resize");
    let path = root.join("wide.png");
    std::fs::write(&path, png_bytes(40, 10, [0, 255, 0, 255])).unwrap();

    let logo = load_logo(&path).unwrap();
    assert_eq!(logo.width, LOGO_SIZE_PX);
    assert_eq!(logo.height, LOGO_SIZE_PX);
    assert_eq!(
        logo.rgba8_premul.len(),
        (LOGO_SIZE_PX * LOGO_SIZE_PX * 4) as usize
    );

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_background_and_font_are_asset_errors() {
    let root = temp_dir("missing");
    assert!(matches!(
        load_background(&root.join("nope.png")),
        Err(CardError::Asset(_))
    ));
    assert!(matches!(
        load_font(&root.join("nope.ttf")),
        Err(CardError::Asset(_))
    ));
    std::fs::remove_dir_all(&root).ok();
}
