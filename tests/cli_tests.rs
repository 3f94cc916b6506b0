// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual discodec binary against captures written to a
//! temporary directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use discodec::pdu::{AcknowledgePdu, CreateEntityPdu, Pdu, ProtocolVersion};
use discodec::{ByteOrder, CodecOptions, PduCodec};

/// Run discodec with arguments
fn run(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_discodec");
    Command::new(bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run discodec and assert success
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run discodec and assert failure
fn run_err(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a two-PDU capture and return its path.
fn write_capture(dir: &Path, order: ByteOrder) -> PathBuf {
    let codec = PduCodec::new(CodecOptions::default().with_byte_order(order));
    let mut ack = AcknowledgePdu::new(ProtocolVersion::Dis2012);
    ack.request_id = 42;
    let mut bytes = codec.encode(&mut Pdu::Acknowledge(ack)).unwrap();
    let mut create = CreateEntityPdu::new(ProtocolVersion::Dis1998);
    create.request_id = 7;
    bytes.extend(codec.encode(&mut Pdu::CreateEntity(create)).unwrap());

    let path = dir.join("capture.dis");
    std::fs::write(&path, bytes).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"]);
    assert!(output.contains("DIS PDU toolkit"));
    assert!(output.contains("inspect"));
    assert!(output.contains("frames"));
    assert!(output.contains("types"));
}

#[test]
fn test_cli_version() {
    let output = run_ok(&["--version"]);
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Inspect
// ============================================================================

#[test]
fn test_inspect_capture() {
    let dir = tempfile::tempdir().unwrap();
    let capture = write_capture(dir.path(), ByteOrder::Big);

    let output = run_ok(&["inspect", path_str(&capture)]);
    assert!(output.contains("#0: Acknowledge (type 15, version 7, 32 bytes)"));
    assert!(output.contains("request_id: 42"));
    assert!(output.contains("#1: Create Entity (type 11, version 6, 28 bytes)"));
    assert!(output.contains("2 decoded, 0 skipped, 0 failed"));
}

#[test]
fn test_inspect_json() {
    let dir = tempfile::tempdir().unwrap();
    let capture = write_capture(dir.path(), ByteOrder::Big);

    let output = run_ok(&["inspect", "--json", path_str(&capture)]);
    let decoded: Vec<Pdu> = serde_json::from_str(&output).unwrap();
    assert_eq!(decoded.len(), 2);
    assert!(matches!(&decoded[0], Pdu::Acknowledge(ack) if ack.request_id == 42));
}

#[test]
fn test_inspect_little_endian_flag() {
    let dir = tempfile::tempdir().unwrap();
    let capture = write_capture(dir.path(), ByteOrder::Little);

    let output = run_ok(&["inspect", "--little-endian", path_str(&capture)]);
    assert!(output.contains("2 decoded"));
}

#[test]
fn test_inspect_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let capture = write_capture(dir.path(), ByteOrder::Little);
    let config = dir.path().join("codec.toml");
    std::fs::write(&config, "byte_order = \"little\"\n").unwrap();

    let output = run_ok(&["inspect", "--config", path_str(&config), path_str(&capture)]);
    assert!(output.contains("2 decoded"));
}

#[test]
fn test_inspect_skips_unsupported_types() {
    let dir = tempfile::tempdir().unwrap();
    let capture = write_capture(dir.path(), ByteOrder::Big);
    let mut bytes = std::fs::read(&capture).unwrap();
    bytes[2] = 28;
    std::fs::write(&capture, bytes).unwrap();

    let output = run(&["inspect", path_str(&capture)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("1 decoded, 1 skipped, 0 failed"));
    assert!(stderr.contains("Unsupported PDU type 28"));
}

#[test]
fn test_inspect_fails_on_truncated_capture() {
    let dir = tempfile::tempdir().unwrap();
    let capture = write_capture(dir.path(), ByteOrder::Big);
    let mut bytes = std::fs::read(&capture).unwrap();
    bytes.truncate(bytes.len() - 4);
    std::fs::write(&capture, bytes).unwrap();

    let stderr = run_err(&["inspect", path_str(&capture)]);
    assert!(stderr.contains("could not be decoded"));
}

#[test]
fn test_inspect_missing_file() {
    let stderr = run_err(&["inspect", "/nonexistent/capture.dis"]);
    assert!(stderr.contains("Error"));
}

// ============================================================================
// Frames and Types
// ============================================================================

#[test]
fn test_frames_with_hex() {
    let dir = tempfile::tempdir().unwrap();
    let capture = write_capture(dir.path(), ByteOrder::Big);

    let output = run_ok(&["frames", "--hex", path_str(&capture)]);
    assert!(output.contains("Acknowledge"));
    assert!(output.contains("Create Entity"));
    assert!(output.contains("0000: 0700 0f05"));
    assert!(output.contains("2 frame(s), 60 bytes"));
}

#[test]
fn test_types_listing() {
    let output = run_ok(&["types", "--protocol", "6"]);
    assert!(output.contains("Entity State"));
    assert!(!output.contains("Set Record-R"));

    let output = run_ok(&["types", "--all"]);
    assert!(output.contains("*  67  Entity State Update"));
    assert!(output.contains("   28  IFF"));
}

#[test]
fn test_types_rejects_unknown_version() {
    let stderr = run_err(&["types", "--protocol", "3"]);
    assert!(stderr.contains("Unsupported protocol version 3"));
}
