//! Loader tests against files on disk.

use std::path::PathBuf;
use vp_eos::{EosError, load_hugoniot, load_isentrope};

fn temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vp-eos-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_both_tables_from_disk() {
    let isentrope = temp_file(
        "isentrope.txt",
        "3 1\n0.001 0.01 0.1\n7.0e7\n1.0e6 1.0e8 1.0e10\n2000 3000 4000\n1e9 2e9 3e9\n1e5 2e5 3e5\n",
    );
    let hugoniot = temp_file(
        "hugoniot.txt",
        "# T rho P U S up us\n#\n#\n5000 4.0 1.0 5.0 0.007 2.0 9.0\n",
    );

    let table = load_isentrope(&isentrope, 0).unwrap();
    assert_eq!(table.columns(), 3);
    let row = table.row(0).unwrap();
    assert!((row.pressure_gpa()[2] - 1.0).abs() < 1e-12);
    assert!((row.pressure_gpa()[0] - 1.0e-4).abs() < 1e-16);

    let curve = load_hugoniot(&hugoniot, 3).unwrap();
    assert_eq!(curve.len(), 1);
    assert!((curve.entropy()[0] - 7000.0).abs() < 1e-6);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("vp-eos-does-not-exist.txt");
    let err = load_hugoniot(&path, 3).unwrap_err();
    assert!(matches!(err, EosError::Io { .. }));
}
