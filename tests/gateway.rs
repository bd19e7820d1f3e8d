// tests/gateway.rs
#![cfg(unix)]

use std::error::Error;
use std::time::Duration;

use tokio::sync::oneshot;
use vmcli_test_utils::{init_tracing, with_timeout, StubVmcli};
use vmcli_wrapper::errors::VmcliError;
use vmcli_wrapper::exec::{RunnerOptions, Vmcli};
use vmcli_wrapper::locator::{HostPlatform, VmcliLocator};
use vmcli_wrapper::types::LineDecoding;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn version_output_is_returned_verbatim() -> TestResult {
    init_tracing();
    let stub = StubVmcli::builder().stdout_line("1.2.3").build();

    let output = with_timeout(stub.vmcli().execute(["--version"])).await?;

    assert_eq!(output, "1.2.3\n");
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_becomes_command_failed() -> TestResult {
    init_tracing();
    let stub = StubVmcli::builder()
        .stderr_line("unknown command")
        .exit_code(1)
        .build();

    let err = with_timeout(stub.vmcli().execute(["badcmd"]))
        .await
        .unwrap_err();

    let failed = err.command_failed().expect("expected CommandFailed");
    assert_eq!(failed.exit_code(), 1);
    assert_eq!(failed.arguments(), ["badcmd"]);
    assert_eq!(failed.error().trim_end(), "unknown command");
    assert_eq!(failed.output(), "");
    assert!(err.to_string().contains("unknown command"));
    assert!(err.to_string().contains("(Arguments: badcmd, Exit code: 1)"));
    Ok(())
}

#[tokio::test]
async fn stderr_with_zero_exit_is_only_a_warning() -> TestResult {
    init_tracing();
    let stub = StubVmcli::builder()
        .stdout_line("ok")
        .stderr_line("deprecated flag")
        .build();

    let output = with_timeout(stub.vmcli().execute(["Power", "query"])).await?;

    assert_eq!(output, "ok\n");
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_without_stderr_uses_generic_message() -> TestResult {
    let stub = StubVmcli::builder().stdout_line("partial").exit_code(4).build();

    let err = with_timeout(stub.vmcli().execute(["VM", "Create"]))
        .await
        .unwrap_err();

    let failed = err.command_failed().expect("expected CommandFailed");
    assert_eq!(failed.exit_code(), 4);
    assert_eq!(failed.output(), "partial\n");
    assert_eq!(
        err.to_string(),
        "vmcli returned a non-zero exit code without any error text. \
         (Arguments: VM Create, Exit code: 4)"
    );
    Ok(())
}

#[tokio::test]
async fn missing_path_fails_before_spawning() {
    let vmcli = Vmcli::new(
        VmcliLocator::default().for_platform(HostPlatform::Other),
        RunnerOptions::default(),
    );

    let err = vmcli.execute(["--version"]).await.unwrap_err();

    assert!(matches!(err, VmcliError::NotConfigured));
}

#[tokio::test]
async fn nonexistent_executable_is_a_start_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-vmcli");
    let vmcli = Vmcli::new(VmcliLocator::with_path(missing.clone()), RunnerOptions::default());

    let err = vmcli.execute(["--version"]).await.unwrap_err();

    match err {
        VmcliError::ProcessStart { program, .. } => assert_eq!(program, missing),
        other => panic!("expected ProcessStart, got {other:?}"),
    }
}

#[tokio::test]
async fn every_line_is_captured_when_child_exits_immediately() -> TestResult {
    init_tracing();
    let stub = StubVmcli::builder().numbered_lines(10_000).build();

    let output = with_timeout(stub.vmcli().execute(["dump"])).await?;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 10_000);
    assert_eq!(lines[0], "line 0");
    assert_eq!(lines[9_999], "line 9999");
    Ok(())
}

#[tokio::test]
async fn arguments_reach_the_child_in_order() -> TestResult {
    let stub = StubVmcli::builder().echo_args().build();
    let args = ["vm one.vmx", "Snapshot", "Take", "-d", "it's \"quoted\"", "snap"];

    let output = with_timeout(stub.vmcli().execute(args)).await?;

    let echoed: Vec<&str> = output.lines().collect();
    assert_eq!(echoed, args);
    Ok(())
}

#[tokio::test]
async fn run_reports_both_streams_and_exit_code() -> TestResult {
    let stub = StubVmcli::builder()
        .stdout_line("out")
        .stderr_line("err one")
        .stderr_line("err two")
        .exit_code(7)
        .build();

    let result = with_timeout(stub.vmcli().run(&["x".to_string()])).await?;

    assert_eq!(result.output, "out\n");
    assert_eq!(result.error, "err one\nerr two\n");
    assert_eq!(result.exit_code, 7);
    Ok(())
}

#[tokio::test]
async fn child_waiting_on_stdin_sees_end_of_file() -> TestResult {
    let stub = StubVmcli::builder()
        .script("while read -r line; do echo \"got $line\"; done\necho done")
        .build();

    let output = with_timeout(stub.vmcli().execute(Vec::<String>::new())).await?;

    assert_eq!(output, "done\n");
    Ok(())
}

#[tokio::test]
async fn strict_decoding_fails_on_invalid_utf8() {
    let stub = StubVmcli::builder().script("printf 'ok\\n\\377\\n'").build();
    let options = RunnerOptions {
        stdout_decoding: LineDecoding::Strict,
        ..RunnerOptions::default()
    };

    let err = with_timeout(stub.vmcli_with(options).execute(["x"]))
        .await
        .unwrap_err();

    assert!(matches!(err, VmcliError::Drain { stream: "stdout", .. }));
}

#[tokio::test]
async fn lossy_decoding_replaces_invalid_utf8() -> TestResult {
    let stub = StubVmcli::builder().script("printf 'a\\377b\\n'").build();

    let output = with_timeout(stub.vmcli().execute(["x"])).await?;

    assert_eq!(output, "a\u{fffd}b\n");
    Ok(())
}

#[tokio::test]
async fn bare_carriage_return_splits_lines() -> TestResult {
    let stub = StubVmcli::builder()
        .script("printf 'a\\rb\\n'; printf '50%%\\r100%%\\r\\n'")
        .build();

    let output = with_timeout(stub.vmcli().execute(["x"])).await?;

    assert_eq!(output, "a\nb\n50%\n100%\n");
    Ok(())
}

#[tokio::test]
async fn cancel_signal_abandons_the_invocation() {
    init_tracing();
    let stub = StubVmcli::builder().sleep(30).build();
    let vmcli = stub.vmcli_with(RunnerOptions {
        kill_on_drop: true,
        ..RunnerOptions::default()
    });

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let _ = tx.send(());
    });

    let err = with_timeout(vmcli.execute_with_cancel(["Power", "Start"], rx))
        .await
        .unwrap_err();

    assert!(matches!(err, VmcliError::Cancelled));
}

#[tokio::test]
async fn dropped_cancel_sender_does_not_cancel() -> TestResult {
    let stub = StubVmcli::builder().stdout_line("finished").sleep(1).build();

    let (tx, rx) = oneshot::channel::<()>();
    drop(tx);

    let output = with_timeout(stub.vmcli().execute_with_cancel(["x"], rx)).await?;

    assert_eq!(output, "finished\n");
    Ok(())
}

#[tokio::test]
async fn concurrent_invocations_are_independent() -> TestResult {
    let stub = StubVmcli::builder().echo_args().build();
    let vmcli = stub.vmcli();

    let (a, b, c) = with_timeout(async {
        tokio::join!(
            vmcli.execute(["a"]),
            vmcli.execute(["b"]),
            vmcli.execute(["c"])
        )
    })
    .await;

    assert_eq!(a?, "a\n");
    assert_eq!(b?, "b\n");
    assert_eq!(c?, "c\n");
    Ok(())
}
