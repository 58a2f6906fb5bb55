//! Runs real plugin processes through `sh`.
#![cfg(unix)]

use std::fs;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use stem_core::{
    CodeGenerator, GenerationOptions, PackageName, SchemaCompiler, SupplierDescriptor,
    SupplierList,
};
use stem_plugin::{PluginError, PluginGenerator, SourceCompiler};
use stem_supplier::SchemaSource;
use tempfile::TempDir;

fn sh(script: &str) -> PluginGenerator {
    PluginGenerator::new(&["sh".to_string(), "-c".to_string(), script.to_string()])
        .expect("valid command")
}

fn schema(name: &str, text: &str) -> SchemaSource {
    SchemaSource {
        package: PackageName::new(name).expect("valid package name"),
        origin: SupplierDescriptor::folder("/res"),
        text: text.to_string(),
    }
}

fn compiler() -> SourceCompiler {
    SourceCompiler::new(&SupplierList::empty())
}

#[test]
fn plugin_receives_request_and_writes_into_output_dir() {
    let temp = TempDir::new().expect("tempdir should create");
    let generator = sh(r#"cat > "$STEMGEN_OUTPUT_DIR/$STEMGEN_PACKAGE.json""#);

    generator
        .generate(
            &compiler(),
            &GenerationOptions::new(true, false),
            &schema("pkg.A", "schema A"),
            temp.path(),
        )
        .expect("plugin succeeds");

    let written = fs::read_to_string(temp.path().join("pkg.A.json")).expect("plugin output");
    let request: serde_json::Value = serde_json::from_str(&written).expect("json request");
    assert_eq!(request["package"], "pkg.A");
    assert_eq!(request["source"], "schema A");
    assert_eq!(request["options"]["generate_updaters"], false);
    assert_eq!(
        request["output_dir"],
        temp.path().to_str().expect("utf8 temp path")
    );
}

#[test]
fn non_zero_exit_carries_stderr() {
    let temp = TempDir::new().expect("tempdir should create");
    let generator = sh("cat > /dev/null; echo 'unknown type Foo' >&2; exit 3");

    let err = generator
        .generate(
            &compiler(),
            &GenerationOptions::default(),
            &schema("pkg.Broken", "schema"),
            temp.path(),
        )
        .expect_err("plugin fails");

    match err.downcast_ref::<PluginError>() {
        Some(PluginError::Failed {
            package, stderr, ..
        }) => {
            assert_eq!(package.as_str(), "pkg.Broken");
            assert_eq!(stderr, "unknown type Foo");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn plugin_exiting_without_reading_is_judged_by_status() {
    let temp = TempDir::new().expect("tempdir should create");
    let generator = sh("exit 0");
    let big = "x".repeat(1 << 20);

    generator
        .generate(
            &compiler(),
            &GenerationOptions::default(),
            &schema("pkg.Big", &big),
            temp.path(),
        )
        .expect("exit status decides");
}

#[test]
fn plugin_echoing_large_request_completes() {
    let (done, finished) = mpsc::channel();
    thread::spawn(move || {
        let temp = TempDir::new().expect("tempdir should create");
        let big = "x".repeat(1 << 20);
        let result = sh("cat").generate(
            &compiler(),
            &GenerationOptions::default(),
            &schema("pkg.Echo", &big),
            temp.path(),
        );
        done.send(result.map_err(|error| error.to_string()))
            .expect("receiver is alive");
    });

    finished
        .recv_timeout(Duration::from_secs(60))
        .expect("plugin run finishes")
        .expect("plugin succeeds");
}

#[test]
fn plugin_streaming_request_to_stderr_completes() {
    let (done, finished) = mpsc::channel();
    thread::spawn(move || {
        let temp = TempDir::new().expect("tempdir should create");
        let big = "y".repeat(1 << 20);
        let result = sh("cat >&2").generate(
            &compiler(),
            &GenerationOptions::default(),
            &schema("pkg.Chatty", &big),
            temp.path(),
        );
        done.send(result.map_err(|error| error.to_string()))
            .expect("receiver is alive");
    });

    finished
        .recv_timeout(Duration::from_secs(60))
        .expect("plugin run finishes")
        .expect("plugin succeeds");
}

#[test]
fn missing_program_is_a_spawn_error() {
    let temp = TempDir::new().expect("tempdir should create");
    let generator = PluginGenerator::new(&["stemgen-plugin-that-does-not-exist".to_string()])
        .expect("valid command");

    let err = generator
        .generate(
            &compiler(),
            &GenerationOptions::default(),
            &schema("pkg.A", "schema"),
            temp.path(),
        )
        .expect_err("cannot spawn");

    assert!(matches!(
        err.downcast_ref::<PluginError>(),
        Some(PluginError::Spawn { .. })
    ));
}

#[test]
fn compiled_sources_flow_into_plugin() {
    let temp = TempDir::new().expect("tempdir should create");
    let resources = temp.path().join("resources");
    let output = temp.path().join("gen");
    fs::create_dir_all(&resources).expect("resources should create");
    fs::create_dir_all(&output).expect("output should create");
    fs::write(resources.join("pkg.A.stema"), "schema A").expect("source should write");

    let suppliers: SupplierList = vec![SupplierDescriptor::folder(&resources)].into();
    let compiler = SourceCompiler::new(&suppliers);
    let compiled = compiler
        .compile(&PackageName::new("pkg.A").expect("valid package name"))
        .expect("found");

    sh(r#"cat > "$STEMGEN_OUTPUT_DIR/out.json""#)
        .generate(&compiler, &GenerationOptions::default(), &compiled, &output)
        .expect("plugin succeeds");

    let written = fs::read_to_string(output.join("out.json")).expect("plugin output");
    let request: serde_json::Value = serde_json::from_str(&written).expect("json request");
    assert_eq!(request["origin"]["kind"], "folder");
    assert_eq!(request["source"], "schema A");
}
