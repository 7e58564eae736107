use flate2::{Compression, write::GzEncoder};
use sha2::{Digest, Sha256};
use std::{
    env,
    fs,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    process::Command,
};


const GIT_VERSION: &str = git_version::git_version!(fallback = "unknown");

const BINARY_TARGETS: [&'static str; 2] = [
    "cfgparse",
    "checkcfg",
];

type DynError = Box<dyn std::error::Error>;

fn main() -> Result<(), DynError> {
    let task = env::args().nth(1);
    match task.as_ref().map(|it| it.as_str()) {
        Some("dist") => dist()?,
        _ => help(),
    }
    Ok(())
}

fn help() {
    eprintln!(
        r#"Tasks:

dist    build release binaries, package them as a tarball, record its SHA256
    "#)
}

fn dist() -> Result<(), DynError> {
    let _ = fs::remove_dir_all(&dist_tmp_dir());
    fs::create_dir_all(&dist_tmp_dir())?;
    fs::create_dir_all(&dist_dir())?;

    build_release()?;
    let filename = package()?;
    record_checksum(&filename)?;

    fs::remove_dir_all(dist_tmp_dir())?;
    println!("dist_tmp dir cleanup");
    Ok(())
}

fn build_release() -> Result<(), DynError> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let status = Command::new(cargo)
        .current_dir(project_root())
        .args(&["build", "--release", "--bins"])
        .status()?;
    if !status.success() {
        return Err("cargo build failed".into());
    }
    Ok(())
}

/// Copy the binaries into the staging dir and tar them up. Returns the tarball name.
fn package() -> Result<String, DynError> {
    for binary in BINARY_TARGETS {
        let mut bin = project_root().join("target/release").join(binary);
        let mut dst = dist_tmp_dir().join(binary);
        if cfg!(windows) {
            bin.set_extension("exe");
            dst.set_extension("exe");
        }
        fs::copy(&bin, &dst)
            .map_err(|e| format!("cannot copy {}: {}", binary, e))?;
        println!("{} copied to distdir", binary);
    }
    let filename = format!(
        "cloudcfg-{}-{}-{}.tar.gz",
        GIT_VERSION,
        env::consts::ARCH,
        env::consts::OS,
    );
    let tar_gz = fs::File::create(dist_dir().join(&filename))?;
    let enc = GzEncoder::new(tar_gz, Compression::default());
    let mut tar = tar::Builder::new(enc);
    tar.append_dir_all("cloudcfg", dist_tmp_dir())?;
    tar.into_inner()?.finish()?;
    println!("tarball prepared");
    Ok(filename)
}

/// Add the tarball's checksum to `target/dist/SHA256`, replacing any older
/// entry for the same file name.
fn record_checksum(filename: &str) -> Result<(), DynError> {
    let sha256path = dist_dir().join("SHA256");

    let mut tar_gz = fs::File::open(dist_dir().join(filename))?;
    let mut sha256 = Sha256::new();
    io::copy(&mut tar_gz, &mut sha256)?;
    let checksum = format!("{:x}", sha256.finalize());

    let mut all_checksums = String::new();
    if let Ok(sha256file) = fs::File::open(&sha256path) {
        let buf = BufReader::new(sha256file);
        for line in buf.lines() {
            let text = line?;
            if !text.ends_with(filename) {
                all_checksums.push_str(&text);
                all_checksums.push('\n');
            }
        }
    }
    all_checksums.push_str(&checksum);
    all_checksums.push_str("  ");
    all_checksums.push_str(filename);
    all_checksums.push('\n');

    let mut buf = BufWriter::new(fs::File::create(sha256path)?);
    buf.write_all(all_checksums.as_bytes())?;
    buf.flush()?;
    println!("SHA256 checksum prepared");
    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn dist_tmp_dir() -> PathBuf {
    project_root().join("target/dist_tmp")
}

fn dist_dir() -> PathBuf {
    project_root().join("target/dist")
}
