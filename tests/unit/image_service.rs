//! Image operation tests — creation polling, the first-snapshot rule, and
//! cross-region copy parameters.

#![allow(clippy::expect_used)]

use ecsx::application::services::Ecs;
use ecsx::domain::resources::InstanceStatus;

use crate::mocks::{ApiCall, RecordingApi, SilentReporter, fast_poller, image, instance};

const REGION: &str = "cn-hangzhou";

#[tokio::test]
async fn create_image_polls_until_the_image_is_visible() {
    let api = RecordingApi::new().with_image_batches(vec![
        vec![],
        vec![],
        vec![image("m-9", "web-1.20260807093005")],
    ]);
    let ecs = Ecs::new(api, REGION, fast_poller());

    let created = ecs
        .create_image_and_wait("i-1", "web-1.20260807093005", "captured", &SilentReporter)
        .await
        .expect("image");
    assert_eq!(created.image_id, "m-9");

    assert_eq!(
        ecs.api().kinds(),
        vec![
            "CreateImage",
            "DescribeImages",
            "DescribeImages",
            "DescribeImages",
        ]
    );
}

#[tokio::test]
async fn create_image_returns_the_first_visible_snapshot() {
    let api = RecordingApi::new().with_image_batches(vec![
        vec![],
        vec![image("m-first", "web-1.1"), image("m-second", "web-1.1")],
    ]);
    let ecs = Ecs::new(api, REGION, fast_poller());

    let created = ecs
        .create_image_and_wait("i-1", "web-1.1", "", &SilentReporter)
        .await
        .expect("image");
    assert_eq!(created.image_id, "m-first", "first match wins");
}

#[tokio::test]
async fn create_image_from_instance_captures_the_source_shape() {
    let api =
        RecordingApi::new().with_image_batches(vec![vec![image("m-9", "web-1.20260807093005")]]);
    let ecs = Ecs::new(api, REGION, fast_poller());
    let source = instance("i-1", "web-1", InstanceStatus::Running);

    ecs.create_image_from_instance(&source, &SilentReporter)
        .await
        .expect("image");

    let calls = ecs.api().calls();
    let ApiCall::CreateImage(params) = &calls[0] else {
        panic!("expected CreateImage first");
    };
    assert_eq!(params.region_id, REGION);
    assert_eq!(params.instance_id, "i-1");
    assert!(
        params.image_name.starts_with("web-1."),
        "name is instance name + timestamp: {}",
        params.image_name
    );
    assert_eq!(params.image_name.len(), "web-1.".len() + 14);

    let description: serde_json::Value =
        serde_json::from_str(&params.description).expect("description is JSON");
    assert_eq!(description["InstanceName"], "web-1");
    assert_eq!(description["HostName"], "web-1");
    assert_eq!(description["ZoneId"], "cn-hangzhou-b");
    assert_eq!(description["InstanceType"], "ecs.g6.large");
    assert_eq!(description["PrivateIpAddress"], "172.16.0.10");

    // The poll filters on the derived image name.
    let ApiCall::DescribeImages(query) = &calls[1] else {
        panic!("expected DescribeImages second");
    };
    assert_eq!(query.image_name.as_deref(), Some(params.image_name.as_str()));
}

#[tokio::test]
async fn copy_image_carries_source_name_and_description() {
    let ecs = Ecs::new(RecordingApi::new(), REGION, fast_poller());
    let source = image("m-1", "web-1.1");

    let copied = ecs
        .copy_image_to_region(&source, "cn-beijing")
        .await
        .expect("copy");
    assert_eq!(copied, "m-copied");

    let calls = ecs.api().calls();
    let ApiCall::CopyImage(params) = &calls[0] else {
        panic!("expected CopyImage");
    };
    assert_eq!(params.region_id, REGION);
    assert_eq!(params.image_id, "m-1");
    assert_eq!(params.destination_region_id, "cn-beijing");
    assert_eq!(params.destination_image_name, "web-1.1");
    assert_eq!(params.destination_description, "captured");
}

#[tokio::test]
async fn delete_image_targets_the_configured_region() {
    let ecs = Ecs::new(RecordingApi::new(), REGION, fast_poller());
    ecs.delete_image("m-1").await.expect("delete");
    assert_eq!(
        ecs.api().calls(),
        vec![ApiCall::DeleteImage {
            region: REGION.to_string(),
            image_id: "m-1".to_string(),
        }]
    );
}
