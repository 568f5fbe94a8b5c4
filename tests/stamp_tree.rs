use std::{fs, path::Path};

use chrono::{DateTime, Local, TimeZone};
use tempfile::tempdir;
use version_stamp_infra::{AtomicFileWriter, GitCli, Sha512Hasher, WalkSourceEnumerator};
use version_stamp_ports::{hashing::ContentHasher, host::HostEnvironment};
use version_stamp_usecase::{StampOutcome, StampRequest, StampVersion};

const SHA512_X: &str = "a4abd4448c49562d828115d13a1fccea927f52b4d5459297f8b43e42da89238b\
                        c13626e43dcb38ddb082488927ec904fb42057443983e88585179d50551afe62";
const SHA512_Y: &str = "121b4774a759924a2929c4a412fb6e31b9aaa746466840efcc4a76d69a94149e\
                        2364e3983d646feafaa1b511785e5c9e90aedc30da6a6bead5520ecc99c6626a";

struct FixedHost;

impl HostEnvironment for FixedHost {
    fn user(&self) -> String {
        "builder".to_string()
    }

    fn hostname(&self) -> String {
        "ci-host".to_string()
    }

    fn now(&self) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 9, 15, 0).unwrap()
    }
}

fn project(root: &Path) -> std::path::PathBuf {
    let src = root.join("proj/src");
    fs::create_dir_all(&src).unwrap();
    fs::write(root.join("proj/A.java"), "x").unwrap();
    fs::write(root.join("proj/B.java"), "y").unwrap();
    fs::write(root.join("proj/README.md"), "not hashed").unwrap();
    src
}

fn stamp(src: &Path) -> StampOutcome {
    let request = StampRequest::builder().version("1.0.0").short_version("1.0").source_root(src).build().unwrap();
    stamp_with(&request)
}

fn stamp_with(request: &StampRequest) -> StampOutcome {
    // A missing binary keeps the run independent of any surrounding repository.
    let git = GitCli::with_program("version-stamp-no-such-git");
    StampVersion::new(&WalkSourceEnumerator::new(), &Sha512Hasher::new(), &git, &FixedHost, &AtomicFileWriter::new())
        .run(request)
        .expect("stamp succeeds")
}

#[test]
fn aggregate_is_sha512_of_the_manifest() {
    let dir = tempdir().expect("temp dir");
    let src = project(dir.path());

    let outcome = stamp(&src);

    let scan_root = src.join("..");
    let manifest = format!(
        "{SHA512_X}  {}\n{SHA512_Y}  {}\n",
        scan_root.join("A.java").display(),
        scan_root.join("B.java").display()
    );
    let expected = Sha512Hasher::new().hash_bytes(manifest.as_bytes());
    assert_eq!(outcome.checksum.digest, expected);
    assert_eq!(outcome.checksum.file_count, 2);
    assert_eq!(outcome.checksum.scan_root, scan_root);
}

#[test]
fn rerun_produces_identical_bytes() {
    let dir = tempdir().expect("temp dir");
    let src = project(dir.path());

    // Outside the scanned tree, so the output does not feed the next checksum.
    let request = StampRequest::builder()
        .version("1.0.0")
        .short_version("1.0")
        .source_root(&src)
        .output_path(dir.path().join("out/package-info.java"))
        .build()
        .unwrap();

    let first = stamp_with(&request);
    let first_bytes = fs::read(&first.output_path).unwrap();
    let second = stamp_with(&request);
    let second_bytes = fs::read(&second.output_path).unwrap();

    assert_eq!(first.output_path, second.output_path);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn changing_one_file_changes_the_checksum() {
    let dir = tempdir().expect("temp dir");
    let src = project(dir.path());

    let before = stamp(&src).checksum.digest;
    fs::write(dir.path().join("proj/B.java"), "z").unwrap();
    let after = stamp(&src).checksum.digest;

    assert_ne!(before, after);
    assert_eq!(before.as_str().len(), 128);
}

#[test]
fn generated_java_is_not_hashed_on_first_run_but_is_on_second() {
    // The output lands inside the scanned tree; a later run picks it up.
    let dir = tempdir().expect("temp dir");
    let src = project(dir.path());

    assert_eq!(stamp(&src).checksum.file_count, 2);
    assert_eq!(stamp(&src).checksum.file_count, 3);
}

#[test]
fn sentinel_metadata_without_revision_control() {
    let dir = tempdir().expect("temp dir");
    let src = project(dir.path());

    let meta = stamp(&src).metadata;

    assert_eq!(meta.revision, "Unknown");
    assert_eq!(meta.branch, "Unknown");
    assert_eq!(meta.url, "file://cwd");
    assert_eq!(meta.date, "09:15AM on March 07, 2024");
    assert_eq!(meta.user, "builder");
}
