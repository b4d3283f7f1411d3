use super::*;
use std::result::Result::Ok;
use std::env;
use uuid::Uuid;

fn scratch_uploads() -> LocalUploads {
    let root = env::temp_dir().join(format!("quiztools-{}", Uuid::new_v4()));
    let uploads = LocalUploads::new(root);
    uploads.create_root().unwrap();
    uploads
}

#[test]
fn opens_and_deletes_files() {
    let uploads = scratch_uploads();
    fs::write(uploads.get_root().join("questions.csv"), "title\n").unwrap();
    let handle = UploadHandle("questions.csv".to_owned());

    let mut content = String::new();
    uploads
        .open(&handle)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "title\n");

    uploads.delete(&handle).unwrap();
    assert!(!uploads.get_root().join("questions.csv").exists());
    assert!(uploads.delete(&handle).is_err());

    fs::remove_dir_all(uploads.get_root()).unwrap();
}

#[test]
fn rejects_names_outside_root() {
    let uploads = LocalUploads::new("/tmp/uploads");
    for name in &["", "..", "../secret.csv", "nested/file.csv", "/etc/passwd", "."] {
        let handle = UploadHandle(name.to_string());
        assert!(uploads.resolve(&handle).is_err(), "name {:?}", name);
    }
    let handle = UploadHandle("ok.csv".to_owned());
    assert_eq!(
        uploads.resolve(&handle).unwrap(),
        Path::new("/tmp/uploads/ok.csv")
    );
}

#[test]
fn missing_file_cannot_be_opened() {
    let uploads = scratch_uploads();
    let handle = UploadHandle("missing.csv".to_owned());
    assert!(uploads.open(&handle).is_err());
    fs::remove_dir_all(uploads.get_root()).unwrap();
}

#[test]
fn default_directory_lives_under_the_cache_dir() {
    if let Ok(dir) = get_default_upload_dir() {
        assert!(dir.ends_with(Path::new("quiztools").join("uploads")));
        let cache_dir = BaseDirs::new().unwrap().cache_dir().to_path_buf();
        assert!(dir.starts_with(cache_dir));
    }
}
