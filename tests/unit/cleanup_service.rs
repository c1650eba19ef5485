//! Snapshot, disk, and elastic IP cleanup tests.

#![allow(clippy::expect_used)]

use ecsx::application::services::Ecs;

use crate::mocks::{ApiCall, RecordingApi, fast_poller};

const REGION: &str = "cn-hangzhou";

#[tokio::test]
async fn delete_snapshot_carries_the_region_and_id() {
    let ecs = Ecs::new(RecordingApi::new(), REGION, fast_poller());
    ecs.delete_snapshot("s-1").await.expect("delete");
    assert_eq!(
        ecs.api().calls(),
        vec![ApiCall::DeleteSnapshot {
            region: REGION.to_string(),
            snapshot_id: "s-1".to_string(),
        }]
    );
}

#[tokio::test]
async fn delete_disk_carries_the_region_and_id() {
    let ecs = Ecs::new(RecordingApi::new(), REGION, fast_poller());
    ecs.delete_disk("d-1").await.expect("delete");
    assert_eq!(
        ecs.api().calls(),
        vec![ApiCall::DeleteDisk {
            region: REGION.to_string(),
            disk_id: "d-1".to_string(),
        }]
    );
}

#[tokio::test]
async fn release_eip_carries_the_region_and_allocation_id() {
    let ecs = Ecs::new(RecordingApi::new(), REGION, fast_poller());
    ecs.release_eip_address("eip-7").await.expect("release");
    assert_eq!(
        ecs.api().calls(),
        vec![ApiCall::ReleaseEip {
            region: REGION.to_string(),
            allocation_id: "eip-7".to_string(),
        }]
    );
}
