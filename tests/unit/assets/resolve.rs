use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "counterstrip_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn first_matching_extension_wins() {
    let dir = temp_dir("resolve_priority");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("3.jpg"), b"j").unwrap();
    std::fs::write(dir.join("3.gif"), b"g").unwrap();

    let found = find_digit_file(&dir, "t", '3', &STATIC_EXTENSIONS).unwrap();
    assert_eq!(found.extension().unwrap(), "gif");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn uppercase_extension_is_found() {
    let dir = temp_dir("resolve_upper");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("5.JPEG"), b"j").unwrap();

    let found = find_digit_file(&dir, "t", '5', &STATIC_EXTENSIONS).unwrap();
    assert!(
        found
            .extension()
            .unwrap()
            .to_str()
            .unwrap()
            .eq_ignore_ascii_case("jpeg")
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_digit_reports_theme_and_digit() {
    let dir = temp_dir("resolve_missing");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("8.png"), b"p").unwrap();

    let err = find_digit_file(&dir, "clock", '9', &STATIC_EXTENSIONS).unwrap_err();
    match err {
        CounterError::AssetNotFound { theme, digit } => {
            assert_eq!(theme, "clock");
            assert_eq!(digit, '9');
        }
        other => panic!("unexpected error: {other}"),
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn mime_follows_extension() {
    assert_eq!(mime_for_path(Path::new("0.png")), "image/png");
    assert_eq!(mime_for_path(Path::new("0.JPG")), "image/jpeg");
    assert_eq!(mime_for_path(Path::new("0.jpeg")), "image/jpeg");
    assert_eq!(mime_for_path(Path::new("0.gif")), "image/gif");
    assert_eq!(mime_for_path(Path::new("0.webp")), "image/png");
    assert_eq!(mime_for_path(Path::new("0")), "image/png");
}

#[test]
fn data_uri_is_standard_base64() {
    assert_eq!(data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    assert_eq!(data_uri("image/gif", b""), "data:image/gif;base64,");
}
