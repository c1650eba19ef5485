//! Clone composite tests — fixed step order, allocation ID pass-through,
//! renew, and on-demand EIP allocation.

#![allow(clippy::expect_used)]

use ecsx::application::services::{CopyOptions, Ecs};
use ecsx::domain::resources::InstanceStatus;

use crate::mocks::{ApiCall, RecordingApi, SilentReporter, fast_poller, image, instance,
    instance_with_eip};

const REGION: &str = "cn-hangzhou";

#[tokio::test]
async fn copy_runs_the_documented_step_order() {
    let api = RecordingApi::new()
        .with_image_batches(vec![vec![image("m-9", "web-1.1")]])
        .with_instance_batches(vec![vec![instance(
            "i-created",
            "web-1",
            InstanceStatus::Stopped,
        )]]);
    let ecs = Ecs::new(api, REGION, fast_poller());
    let source = instance_with_eip("i-1", "web-1", InstanceStatus::Running, "eip-7");

    let created = ecs
        .copy_instance(&source, &CopyOptions::default(), &SilentReporter)
        .await
        .expect("clone");
    assert_eq!(created.instance_id, "i-created");

    assert_eq!(
        ecs.api().kinds(),
        vec![
            "CreateImage",
            "DescribeImages",    // image visible
            "CreateInstance",
            "DescribeInstances", // clone stopped
            "AssociateEip",
            "StartInstance",
        ]
    );
}

#[tokio::test]
async fn copy_passes_the_source_allocation_id_through_unchanged() {
    let api = RecordingApi::new()
        .with_image_batches(vec![vec![image("m-9", "web-1.1")]])
        .with_instance_batches(vec![vec![instance(
            "i-created",
            "web-1",
            InstanceStatus::Stopped,
        )]]);
    let ecs = Ecs::new(api, REGION, fast_poller());
    let source = instance_with_eip("i-1", "web-1", InstanceStatus::Running, "eip-7");

    ecs.copy_instance(&source, &CopyOptions::default(), &SilentReporter)
        .await
        .expect("clone");

    let calls = ecs.api().calls();
    assert!(
        calls.contains(&ApiCall::AssociateEip {
            region: REGION.to_string(),
            allocation_id: "eip-7".to_string(),
            instance_id: "i-created".to_string(),
        }),
        "association must reuse the source allocation ID: {calls:?}"
    );
    assert!(
        !calls.iter().any(|call| call.kind() == "AllocateEip"),
        "no fresh allocation when the source has an EIP"
    );
    assert_eq!(
        *calls.last().expect("calls"),
        ApiCall::StartInstance {
            region: REGION.to_string(),
            instance_id: "i-created".to_string(),
        }
    );
}

#[tokio::test]
async fn copy_allocates_a_fresh_eip_when_the_source_has_none() {
    let api = RecordingApi::new()
        .with_image_batches(vec![vec![image("m-9", "web-1.1")]])
        .with_instance_batches(vec![vec![instance(
            "i-created",
            "web-1",
            InstanceStatus::Stopped,
        )]]);
    let ecs = Ecs::new(api, REGION, fast_poller());
    let source = instance("i-1", "web-1", InstanceStatus::Running);

    ecs.copy_instance(&source, &CopyOptions::default(), &SilentReporter)
        .await
        .expect("clone");

    let kinds = ecs.api().kinds();
    assert!(kinds.contains(&"AllocateEip"));
    assert!(ecs.api().calls().contains(&ApiCall::AssociateEip {
        region: REGION.to_string(),
        allocation_id: "eip-fresh".to_string(),
        instance_id: "i-created".to_string(),
    }));
}

#[tokio::test]
async fn copy_with_renew_retires_the_original_before_recreating() {
    let api = RecordingApi::new()
        .with_image_batches(vec![vec![image("m-9", "web-1.1")]])
        .with_instance_batches(vec![
            // Stop probe for the original: already stopped.
            vec![instance("i-1", "web-1", InstanceStatus::Stopped)],
            // Create wait for the clone.
            vec![instance("i-created", "web-1", InstanceStatus::Stopped)],
        ]);
    let ecs = Ecs::new(api, REGION, fast_poller());
    let source = instance_with_eip("i-1", "web-1", InstanceStatus::Running, "eip-7");

    let options = CopyOptions {
        renew: true,
        ..Default::default()
    };
    ecs.copy_instance(&source, &options, &SilentReporter)
        .await
        .expect("clone");

    assert_eq!(
        ecs.api().kinds(),
        vec![
            "CreateImage",
            "DescribeImages",
            "DescribeInstances", // original already stopped
            "DeleteInstance",
            "CreateInstance",
            "DescribeInstances",
            "AssociateEip",
            "StartInstance",
        ]
    );
}

#[tokio::test]
async fn copy_derives_the_clone_from_the_source_and_applies_overrides() {
    let api = RecordingApi::new()
        .with_image_batches(vec![vec![image("m-9", "web-1.1")]])
        .with_instance_batches(vec![vec![instance(
            "i-created",
            "web-1",
            InstanceStatus::Stopped,
        )]]);
    let ecs = Ecs::new(api, REGION, fast_poller());
    let source = instance_with_eip("i-1", "web-1", InstanceStatus::Running, "eip-7");

    let options = CopyOptions {
        overrides: vec![("InstanceType".to_string(), "ecs.t5-lc1m1.small".to_string())],
        renew: false,
    };
    ecs.copy_instance(&source, &options, &SilentReporter)
        .await
        .expect("clone");

    let calls = ecs.api().calls();
    let ApiCall::CreateInstance(params) = calls
        .iter()
        .find(|call| call.kind() == "CreateInstance")
        .expect("create call")
    else {
        panic!("expected CreateInstance");
    };
    assert_eq!(params.region_id, REGION);
    assert_eq!(params.image_id, "m-9", "image from the capture step");
    assert_eq!(params.security_group_id, "sg-1");
    assert_eq!(params.instance_name.as_deref(), Some("web-1"));
    assert_eq!(params.zone_id.as_deref(), Some("cn-hangzhou-b"));
    assert_eq!(params.v_switch_id.as_deref(), Some("vsw-1"));
    assert_eq!(
        params.system_disk_category.as_deref(),
        Some("cloud_efficiency")
    );
    assert_eq!(
        params.overrides,
        vec![("InstanceType".to_string(), "ecs.t5-lc1m1.small".to_string())]
    );
}
