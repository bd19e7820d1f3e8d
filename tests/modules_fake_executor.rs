// tests/modules_fake_executor.rs

use std::error::Error;
use std::sync::Arc;

use serde_json::json;
use vmcli_test_utils::FakeVmcli;
use vmcli_wrapper::catalog::{entry_names, guest_os};
use vmcli_wrapper::command::CommandBuilder;
use vmcli_wrapper::errors::VmcliError;
use vmcli_wrapper::modules::ethernet::{DvsBacking, TransferRate};
use vmcli_wrapper::modules::guest::{ListOptions, RunOptions};
use vmcli_wrapper::modules::serial::SerialBacking;
use vmcli_wrapper::modules::tools::ToolsSource;
use vmcli_wrapper::modules::GuestCredentials;
use vmcli_wrapper::modules::VmcliClient;
use vmcli_wrapper::types::{DiskAdapterType, PowerOpType, VirtualDiskType};

type TestResult = Result<(), Box<dyn Error>>;

fn client(fake: &FakeVmcli) -> VmcliClient {
    VmcliClient::new(Arc::new(fake.clone()))
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn version_and_help_use_root_and_module_tokens() -> TestResult {
    let fake = FakeVmcli::new().respond("1.2.3\n").respond("usage");
    let client = client(&fake);

    assert_eq!(client.version().await?, "1.2.3\n");
    client.power().client().help().await?;
    client.root().help().await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["--version"]),
            strings(&["Power", "--help"]),
            strings(&["--help"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn power_operations_build_expected_vectors() -> TestResult {
    let fake = FakeVmcli::new();
    let power = client(&fake).power();

    power.start("vm.vmx", true, false).await?;
    power.stop("vm.vmx", PowerOpType::Hard, true, Some(4)).await?;
    power.stop("vm.vmx", PowerOpType::TrySoft, false, None).await?;
    power.suspend("vm.vmx", PowerOpType::RequireSoft).await?;
    power.pause("vm.vmx").await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Power", "Start", "-p"]),
            strings(&["vm.vmx", "Power", "Stop", "-o", "hard", "-r", "-si", "4"]),
            strings(&["vm.vmx", "Power", "Stop", "-o", "trySoft"]),
            strings(&["vm.vmx", "Power", "Suspend", "-o", "requireSoft"]),
            strings(&["vm.vmx", "Power", "Pause"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn query_parses_json_output() -> TestResult {
    let fake = FakeVmcli::new().respond_json(&json!({ "PowerState": "on" }));

    let state = client(&fake).power().query("vm.vmx").await?;

    assert_eq!(state["PowerState"], "on");
    assert_eq!(
        fake.last_call(),
        Some(strings(&["vm.vmx", "Power", "query", "--format", "json"]))
    );
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_a_json_error() {
    let fake = FakeVmcli::new().respond("not json");

    let err = client(&fake).chipset().query("vm.vmx").await.unwrap_err();

    assert!(matches!(err, VmcliError::Json(_)));
}

#[tokio::test]
async fn command_failure_propagates_unchanged() {
    let fake = FakeVmcli::new().fail(2, "no such snapshot");

    let err = client(&fake)
        .snapshot()
        .revert("vm.vmx", false, "7")
        .await
        .unwrap_err();

    let failed = err.command_failed().expect("expected CommandFailed");
    assert_eq!(failed.exit_code(), 2);
    assert_eq!(failed.arguments(), ["vm.vmx", "Snapshot", "Revert", "7"]);
}

#[tokio::test]
async fn snapshot_take_uses_memory_and_description_flags() -> TestResult {
    let fake = FakeVmcli::new();
    let snapshot = client(&fake).snapshot();

    snapshot
        .take("vm.vmx", false, true, Some("before update"), "base")
        .await?;
    snapshot.take("vm.vmx", true, false, Some(""), "bare").await?;
    snapshot.delete("vm.vmx", true, "3").await?;
    snapshot
        .clone_vm("vm.vmx", false, true, "3", "/vms/clone.vmx", "clone")
        .await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Snapshot", "Take", "-m", "-d", "before update", "base"]),
            strings(&["vm.vmx", "Snapshot", "Take", "-n", "bare"]),
            strings(&["vm.vmx", "Snapshot", "Delete", "-d", "3"]),
            strings(&["vm.vmx", "Snapshot", "Clone", "-l", "3", "/vms/clone.vmx", "clone"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn config_params_and_chipset_setters() -> TestResult {
    let fake = FakeVmcli::new();
    let client = client(&fake);

    client
        .config_params()
        .set_entry("vm.vmx", entry_names::MEMORY_SIZE, "4096")
        .await?;
    client.chipset().set_vcpu_count("vm.vmx", 4).await?;
    client.chipset().set_cores_per_socket("vm.vmx", 2).await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "ConfigParams", "setentry", "memsize", "4096"]),
            strings(&["vm.vmx", "Chipset", "SetVCpuCount", "4"]),
            strings(&["vm.vmx", "Chipset", "SetCoresPerSocket", "2"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn vm_create_defaults_guest_and_returns_vmx_path() -> TestResult {
    let fake = FakeVmcli::new();
    let vm = client(&fake).vm();

    let vmx = vm.create("/vms", "web", None).await?;
    vm.create("/vms", "db", Some(guest_os::RHEL_9_64)).await?;

    assert_eq!(vmx, std::path::Path::new("/vms").join("web.vmx"));
    assert_eq!(
        fake.calls(),
        vec![
            strings(&["VM", "Create", "--name", "web", "--dirpath", "/vms", "--custom-guesttype", "other-64"]),
            strings(&["VM", "Create", "--name", "db", "--dirpath", "/vms", "--custom-guesttype", "rhel9-64"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn template_deploy_and_tools() -> TestResult {
    let fake = FakeVmcli::new();
    let client = client(&fake);

    client.template().deploy("/t/base.vmtx").await?;
    client
        .tools()
        .upgrade(
            "vm.vmx",
            &ToolsSource {
                cmdline: Some("--quiet".into()),
                backing_type: None,
                backing_path: Some("  ".into()),
            },
        )
        .await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["VMTemplate", "Deploy", "--path", "/t/base.vmtx"]),
            strings(&["vm.vmx", "Tools", "Upgrade", "-c", "--quiet"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn disk_create_returns_matching_extents_sorted() -> TestResult {
    let dir = tempfile::tempdir()?;
    for name in ["data-s002.vmdk", "data.vmdk", "data-s001.vmdk", "other.vmdk", "data.txt"] {
        std::fs::write(dir.path().join(name), b"")?;
    }
    let file = dir.path().join("data.vmdk");

    let fake = FakeVmcli::new();
    let files = client(&fake)
        .disk()
        .create(&file, DiskAdapterType::LsiLogic, "10GB", VirtualDiskType::SplitGrowable)
        .await?;

    assert_eq!(
        files,
        vec![
            dir.path().join("data-s001.vmdk"),
            dir.path().join("data-s002.vmdk"),
            dir.path().join("data.vmdk"),
        ]
    );
    assert_eq!(
        fake.last_call(),
        Some(vec![
            "Disk".to_string(),
            "create".to_string(),
            "--filepath".to_string(),
            file.to_string_lossy().into_owned(),
            "--adapter".to_string(),
            "lsilogic".to_string(),
            "--size".to_string(),
            "10GB".to_string(),
            "--type".to_string(),
            "1".to_string(),
        ])
    );
    Ok(())
}

#[tokio::test]
async fn disk_create_without_parent_returns_the_path() -> TestResult {
    let fake = FakeVmcli::new();

    let files = client(&fake)
        .disk()
        .create("solo.vmdk", DiskAdapterType::Ide, "1GB", VirtualDiskType::SingleGrowable)
        .await?;

    assert_eq!(files, vec![std::path::PathBuf::from("solo.vmdk")]);
    Ok(())
}

#[tokio::test]
async fn disk_labelled_operations() -> TestResult {
    let fake = FakeVmcli::new();
    let disk = client(&fake).disk();

    disk.extend("vm.vmx", "scsi0:0", 2048).await?;
    disk.move_disk("vm.vmx", "sata0:1", "nvme0:0").await?;
    disk.set_read_only("vm.vmx", "scsi0:0", true).await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Disk", "Extended", "scsi0:0", "2048"]),
            strings(&["vm.vmx", "Disk", "Move", "sata0:1", "nvme0:0"]),
            strings(&["vm.vmx", "Disk", "SetReadOnly", "scsi0:0", "true"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn disk_device_and_vm_wide_settings() -> TestResult {
    let fake = FakeVmcli::new().respond_json(&json!({ "present": true }));
    let disk = client(&fake).disk();

    assert_eq!(disk.is_present("vm.vmx", "nvme0:0").await?["present"], true);
    disk.branch_cancel("vm.vmx").await?;
    disk.connection_control("vm.vmx", "sata0:2", "connect").await?;
    disk.convert_alloc_type("vm.vmx", "scsi0:0", "disk.vmdk", "thin").await?;
    disk.set_backing_info("vm.vmx", "sata0:2", "cdrom-image", "/iso/a.iso", "")
        .await?;
    disk.set_cbrc_cache_enabled("vm.vmx", true).await?;
    disk.set_uuid("vm.vmx", "scsi0:0", "6000c29a").await?;
    disk.set_uuid_enabled("vm.vmx", false).await?;
    disk.set_hide_type_of_read_only_part("vm.vmx", true).await?;
    disk.set_hard_disk_page_align("vm.vmx", "4096").await?;
    disk.set_shares("vm.vmx", "scsi0:0", "normal").await?;
    disk.set_start_connected("vm.vmx", "sata0:2", false).await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Disk", "IsPresent", "nvme0:0", "--format", "json"]),
            strings(&["vm.vmx", "Disk", "BranchCancel"]),
            strings(&["vm.vmx", "Disk", "ConnectionControl", "sata0:2", "connect"]),
            strings(&["vm.vmx", "Disk", "ConvertAllocType", "scsi0:0", "disk.vmdk", "thin"]),
            strings(&["vm.vmx", "Disk", "SetBackingInfo", "sata0:2", "cdrom-image", "/iso/a.iso", ""]),
            strings(&["vm.vmx", "Disk", "SetCbrcCacheEnabled", "true"]),
            strings(&["vm.vmx", "Disk", "SetDiskUUID", "scsi0:0", "6000c29a"]),
            strings(&["vm.vmx", "Disk", "SetDiskUuidEnabled", "false"]),
            strings(&["vm.vmx", "Disk", "SetHideTypeOfROnlyPart", "true"]),
            strings(&["vm.vmx", "Disk", "SetHardDiskPageAlign", "4096"]),
            strings(&["vm.vmx", "Disk", "SetShares", "scsi0:0", "normal"]),
            strings(&["vm.vmx", "Disk", "SetStartConnected", "sata0:2", "false"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn ethernet_operations_build_expected_vectors() -> TestResult {
    let fake = FakeVmcli::new();
    let nic = client(&fake).ethernet();

    nic.connection_control("vm.vmx", "disconnect").await?;
    nic.move_device("vm.vmx", "ethernet0", "ethernet1").await?;
    nic.set_connection_type("vm.vmx", "ethernet0", "nat").await?;
    nic.set_present("vm.vmx", "ethernet0", true).await?;
    nic.set_pci_slot_number("vm.vmx", "ethernet0", 160).await?;
    nic.set_security_policy("vm.vmx", "ethernet0", true, false, true)
        .await?;
    let dvs = DvsBacking {
        switch_id: "sw".into(),
        port_id: "1".into(),
        portgroup_id: "pg".into(),
        connection_id: "42".into(),
    };
    nic.set_dvs_type_backing("vm.vmx", "ethernet0", &dvs).await?;
    let rate = TransferRate {
        tx_drop_rate: "0".into(),
        rx_drop_rate: "1".into(),
        tx_drop_size: "2".into(),
        rx_drop_size: "3".into(),
        tx_bandwidth_limit: "4".into(),
        rx_bandwidth_limit: "5".into(),
    };
    nic.set_transfer_rate("vm.vmx", "ethernet0", &rate).await?;
    nic.set_wake_on_packet_receive("vm.vmx", "ethernet0", false)
        .await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Ethernet", "ConnectionControl", "disconnect"]),
            strings(&["vm.vmx", "Ethernet", "MoveDevice", "ethernet0", "ethernet1"]),
            strings(&["vm.vmx", "Ethernet", "SetConnectionType", "ethernet0", "nat"]),
            strings(&["vm.vmx", "Ethernet", "SetPresent", "ethernet0", "true"]),
            strings(&["vm.vmx", "Ethernet", "SetPciSlotNumber", "ethernet0", "160"]),
            strings(&["vm.vmx", "Ethernet", "SetSecurityPolicy", "ethernet0", "true", "false", "true"]),
            strings(&["vm.vmx", "Ethernet", "SetDvsTypeBacking", "ethernet0", "sw", "1", "pg", "42"]),
            strings(&["vm.vmx", "Ethernet", "SetTransferRate", "ethernet0", "0", "1", "2", "3", "4", "5"]),
            strings(&["vm.vmx", "Ethernet", "SetWakeOnPcktRcv", "ethernet0", "false"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn guest_operations_pass_credentials_after_the_operation() -> TestResult {
    let fake = FakeVmcli::new()
        .respond("PATH=/bin\n")
        .respond("")
        .respond("")
        .respond_json(&json!([{ "pid": 1, "name": "init" }]))
        .respond("started");
    let guest = client(&fake).guest();
    let creds = GuestCredentials::new("admin", "secret");

    assert_eq!(guest.env("vm.vmx", &creds).await?, "PATH=/bin\n");
    guest.copy_to("vm.vmx", &creds, true, "/host/a", "/guest/a").await?;
    let paging = ListOptions {
        regexp: Some("*.log".into()),
        max: Some(10),
        ..ListOptions::default()
    };
    guest.ls("vm.vmx", &creds, "/var/log", &paging).await?;
    let processes = guest.ps("vm.vmx", &creds, Some(1)).await?;
    assert_eq!(processes[0]["name"], "init");
    let run = RunOptions {
        no_wait: true,
        working_directory: Some("/tmp".into()),
        ..RunOptions::default()
    };
    assert_eq!(
        guest.run("vm.vmx", &creds, "/bin/ls", Some("-la"), &run).await?,
        "started"
    );
    guest.rmdir("vm.vmx", &creds, true, "/tmp/old").await?;
    guest.tools_properties("vm.vmx").await?;

    let auth = ["-u", "admin", "-p", "secret"];
    let with_auth = |op: &str, rest: &[&str]| {
        let mut call = strings(&["vm.vmx", "Guest", op]);
        call.extend(strings(&auth));
        call.extend(strings(rest));
        call
    };
    assert_eq!(
        fake.calls(),
        vec![
            with_auth("env", &[]),
            with_auth("copyTo", &["-o", "/host/a", "/guest/a"]),
            with_auth("ls", &["-r", "*.log", "-m", "10", "/var/log"]),
            with_auth("ps", &["--pid", "1", "--format", "json"]),
            with_auth("run", &["-nw", "-w", "/tmp", "/bin/ls", "-la"]),
            with_auth("rmdir", &["-r", "/tmp/old"]),
            strings(&["vm.vmx", "Guest", "toolsproperties"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn guest_and_vprobes_query_use_capitalised_operation() -> TestResult {
    let fake = FakeVmcli::new()
        .respond_json(&json!({ "tools": "running" }))
        .respond_json(&json!({ "enabled": false }));
    let client = client(&fake);

    client.guest().query("vm.vmx").await?;
    client.vprobes().query("vm.vmx").await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Guest", "Query", "--format", "json"]),
            strings(&["vm.vmx", "VProbes", "Query", "--format", "json"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn hgfs_share_settings() -> TestResult {
    let fake = FakeVmcli::new();
    let hgfs = client(&fake).hgfs();

    hgfs.set_host_path("vm.vmx", "sharedFolder0", "/srv/share").await?;
    hgfs.set_guest_name("vm.vmx", "sharedFolder0", "share").await?;
    hgfs.set_write_access("vm.vmx", "sharedFolder0", false).await?;
    hgfs.set_enabled("vm.vmx", "sharedFolder0", true).await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "HGFS", "SetHostPath", "sharedFolder0", "/srv/share"]),
            strings(&["vm.vmx", "HGFS", "SetGuestName", "sharedFolder0", "share"]),
            strings(&["vm.vmx", "HGFS", "SetWriteAccess", "sharedFolder0", "false"]),
            strings(&["vm.vmx", "HGFS", "SetEnabled", "sharedFolder0", "true"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn mks_display_and_input_operations() -> TestResult {
    let fake = FakeVmcli::new();
    let mks = client(&fake).mks();

    mks.capture_screenshot("vm.vmx", "/tmp/screen.png").await?;
    mks.send_key_event("vm.vmx", "0x28", "0").await?;
    mks.set_guest_resolution("vm.vmx", 1920, 1080).await?;
    mks.set_graphics_memory_kb("vm.vmx", 262144).await?;
    mks.set_accel_3d("vm.vmx", true).await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "MKS", "captureScreenshot", "/tmp/screen.png"]),
            strings(&["vm.vmx", "MKS", "sendKeyEvent", "0x28", "0"]),
            strings(&["vm.vmx", "MKS", "SetGuestResolution", "1920", "1080"]),
            strings(&["vm.vmx", "MKS", "SetGraphicsMemoryKB", "262144"]),
            strings(&["vm.vmx", "MKS", "SetAccel3d", "true"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn nvme_and_sata_controller_operations() -> TestResult {
    let fake = FakeVmcli::new()
        .respond("")
        .respond_json(&json!({ "unit": 3 }))
        .respond("")
        .respond("")
        .respond("true\n");
    let client = client(&fake);
    let nvme = client.nvme();
    let sata = client.sata();

    nvme.set_max_devices("vm.vmx", "nvme0", 8).await?;
    assert_eq!(nvme.find_first_free("vm.vmx", "nvme0").await?["unit"], 3);
    sata.move_controller("vm.vmx", "sata0", "sata1").await?;
    sata.set_max_devices("vm.vmx", "sata0", 30).await?;
    assert_eq!(sata.has_no_device("vm.vmx", "sata1").await?, "true\n");

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Nvme", "SetMaxDevice", "nvme0", "8"]),
            strings(&["vm.vmx", "Nvme", "FindFirstFree", "nvme0", "--format", "json"]),
            strings(&["vm.vmx", "Sata", "Move", "sata0", "sata1"]),
            strings(&["vm.vmx", "Sata", "SetMaxDevices", "sata0", "30"]),
            strings(&["vm.vmx", "Sata", "HasNoDevice", "sata1"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn serial_and_vprobes_operations() -> TestResult {
    let fake = FakeVmcli::new();
    let client = client(&fake);
    let serial = client.serial();
    let vprobes = client.vprobes();

    let backing = SerialBacking {
        backing_type: "pipe".into(),
        path: "/tmp/com1".into(),
        pipe_end_point: "server".into(),
        ..SerialBacking::default()
    };
    serial.set_backing_info("vm.vmx", "serial0", &backing).await?;
    serial.start_connected("vm.vmx", "serial0", true).await?;
    serial.connection_control("vm.vmx", "serial0", "connect").await?;
    vprobes.load("vm.vmx", "/probes/trace.emt").await?;
    vprobes.reset("vm.vmx").await?;
    vprobes.set_enabled("vm.vmx", true).await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Serial", "SetBackingInfo", "serial0", "pipe", "/tmp/com1", "", "server", ""]),
            strings(&["vm.vmx", "Serial", "StartConnected", "serial0", "true"]),
            strings(&["vm.vmx", "Serial", "ConnectionControl", "serial0", "connect"]),
            strings(&["vm.vmx", "VProbes", "Load", "/probes/trace.emt"]),
            strings(&["vm.vmx", "VProbes", "Reset"]),
            strings(&["vm.vmx", "VProbes", "SetEnabled", "true"]),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn raw_commands_run_through_a_module_client() -> TestResult {
    let fake = FakeVmcli::new().respond("ok");
    let ethernet = client(&fake).module("Ethernet");

    let cmd = ethernet.on("vm.vmx", "SetPresent").arg("ethernet0").arg("true");
    assert_eq!(ethernet.run(cmd).await?, "ok");

    let raw = CommandBuilder::new().args(["a", "b"]);
    ethernet.run(raw).await?;

    assert_eq!(
        fake.calls(),
        vec![
            strings(&["vm.vmx", "Ethernet", "SetPresent", "ethernet0", "true"]),
            strings(&["a", "b"]),
        ]
    );
    Ok(())
}
