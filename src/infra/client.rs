//! Aliyun ECS RPC client — the production [`EcsApi`] implementation.
//!
//! Every operation is a signed GET against the regional endpoint: common
//! parameters (action, format, version, credentials, nonce, timestamp) plus
//! per-action parameters, canonicalized and signed per [`crate::infra::sign`].
//! Error responses carry `{ RequestId, Code, Message }` and surface as
//! [`EcsError::Api`].

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::application::ports::{
    CopyImageParams, CreateImageParams, CreateInstanceParams, DiskQuery, EcsApi, EipQuery,
    ImageQuery, InstanceQuery, SnapshotQuery,
};
use crate::domain::error::EcsError;
use crate::domain::resources::{
    Disk, EipAddress, EipAllocation, Image, Instance, Region, Snapshot,
};
use crate::infra::config::EcsConfig;
use crate::infra::sign;

/// ECS API version all requests are pinned to.
const API_VERSION: &str = "2014-05-26";

/// Signed HTTP client for the ECS RPC API.
pub struct AliyunEcsClient {
    http: reqwest::Client,
    endpoint: String,
    access_key_id: String,
    access_key_secret: String,
}

impl AliyunEcsClient {
    /// Build a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &EcsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ecsx/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            access_key_id: config.access_key_id.clone(),
            access_key_secret: config.access_key_secret.clone(),
        })
    }

    /// Assemble the fully signed request URL for one action.
    ///
    /// Later `params` entries replace earlier ones on key collision, which is
    /// how `-p` overrides beat derived parameters.
    fn signed_url(
        &self,
        action: &str,
        params: &[(String, String)],
        now: DateTime<Utc>,
        nonce: &str,
    ) -> String {
        let mut all: BTreeMap<String, String> = BTreeMap::new();
        all.insert("Action".to_string(), action.to_string());
        all.insert("Format".to_string(), "JSON".to_string());
        all.insert("Version".to_string(), API_VERSION.to_string());
        all.insert("AccessKeyId".to_string(), self.access_key_id.clone());
        all.insert("SignatureMethod".to_string(), "HMAC-SHA1".to_string());
        all.insert("SignatureVersion".to_string(), "1.0".to_string());
        all.insert("SignatureNonce".to_string(), nonce.to_string());
        all.insert(
            "Timestamp".to_string(),
            now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        );
        for (key, value) in params {
            all.insert(key.clone(), value.clone());
        }
        let signature = sign::signature(&self.access_key_secret, &sign::string_to_sign("GET", &all));
        format!(
            "{}/?{}&Signature={}",
            self.endpoint,
            sign::canonical_query(&all),
            sign::percent_encode(&signature)
        )
    }

    async fn invoke<T: DeserializeOwned>(
        &self,
        action: &str,
        params: Vec<(String, String)>,
    ) -> Result<T> {
        let url = self.signed_url(action, &params, Utc::now(), &Uuid::new_v4().to_string());
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("{action} request failed"))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("reading {action} response"))?;
        if !status.is_success() {
            if let Ok(failure) = serde_json::from_str::<ApiFailure>(&body) {
                return Err(EcsError::Api {
                    code: failure.code,
                    message: failure.message,
                    request_id: failure.request_id,
                }
                .into());
            }
            anyhow::bail!("{action} failed with HTTP {status}: {body}");
        }
        serde_json::from_str(&body).with_context(|| format!("parsing {action} response"))
    }

    async fn invoke_unit(&self, action: &str, params: Vec<(String, String)>) -> Result<()> {
        let _: serde_json::Value = self.invoke(action, params).await?;
        Ok(())
    }
}

// ── Per-action parameter builders ─────────────────────────────────────────────

fn push_opt(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}

fn region_pair(region_id: &str) -> (String, String) {
    ("RegionId".to_string(), region_id.to_string())
}

fn instance_params(query: &InstanceQuery) -> Result<Vec<(String, String)>> {
    let mut params = vec![region_pair(&query.region_id)];
    push_opt(&mut params, "InstanceName", query.instance_name.as_deref());
    if !query.instance_ids.is_empty() {
        // DescribeInstances takes the ID list as a JSON array string.
        params.push((
            "InstanceIds".to_string(),
            serde_json::to_string(&query.instance_ids).context("encoding InstanceIds")?,
        ));
    }
    Ok(params)
}

fn create_instance_params(spec: &CreateInstanceParams) -> Vec<(String, String)> {
    let mut params = vec![
        region_pair(&spec.region_id),
        ("ImageId".to_string(), spec.image_id.clone()),
        ("InstanceType".to_string(), spec.instance_type.clone()),
        (
            "SecurityGroupId".to_string(),
            spec.security_group_id.clone(),
        ),
    ];
    push_opt(&mut params, "InstanceName", spec.instance_name.as_deref());
    push_opt(&mut params, "ZoneId", spec.zone_id.as_deref());
    push_opt(&mut params, "HostName", spec.host_name.as_deref());
    push_opt(&mut params, "VSwitchId", spec.v_switch_id.as_deref());
    push_opt(&mut params, "Description", spec.description.as_deref());
    push_opt(
        &mut params,
        "SystemDisk.Category",
        spec.system_disk_category.as_deref(),
    );
    // Raw overrides go last so they win when the request map is assembled.
    params.extend(spec.overrides.iter().cloned());
    params
}

// ── Response envelopes ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiFailure {
    #[serde(default)]
    request_id: String,
    code: String,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeRegionsResponse {
    regions: RegionSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RegionSet {
    region: Vec<Region>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeInstancesResponse {
    instances: InstanceSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InstanceSet {
    instance: Vec<Instance>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeImagesResponse {
    images: ImageSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ImageSet {
    image: Vec<Image>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeSnapshotsResponse {
    snapshots: SnapshotSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SnapshotSet {
    snapshot: Vec<Snapshot>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeDisksResponse {
    disks: DiskSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DiskSet {
    disk: Vec<Disk>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeEipAddressesResponse {
    eip_addresses: EipSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EipSet {
    eip_address: Vec<EipAddress>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateInstanceResponse {
    instance_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateImageResponse {
    image_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CopyImageResponse {
    image_id: String,
}

// ── Port implementation ───────────────────────────────────────────────────────

impl EcsApi for AliyunEcsClient {
    async fn describe_regions(&self) -> Result<Vec<Region>> {
        let response: DescribeRegionsResponse =
            self.invoke("DescribeRegions", Vec::new()).await?;
        Ok(response.regions.region)
    }

    async fn describe_instances(&self, query: &InstanceQuery) -> Result<Vec<Instance>> {
        let response: DescribeInstancesResponse = self
            .invoke("DescribeInstances", instance_params(query)?)
            .await?;
        Ok(response.instances.instance)
    }

    async fn describe_images(&self, query: &ImageQuery) -> Result<Vec<Image>> {
        let mut params = vec![region_pair(&query.region_id)];
        push_opt(&mut params, "ImageName", query.image_name.as_deref());
        let response: DescribeImagesResponse = self.invoke("DescribeImages", params).await?;
        Ok(response.images.image)
    }

    async fn describe_snapshots(&self, query: &SnapshotQuery) -> Result<Vec<Snapshot>> {
        let mut params = vec![region_pair(&query.region_id)];
        push_opt(&mut params, "SnapshotName", query.snapshot_name.as_deref());
        let response: DescribeSnapshotsResponse =
            self.invoke("DescribeSnapshots", params).await?;
        Ok(response.snapshots.snapshot)
    }

    async fn describe_disks(&self, query: &DiskQuery) -> Result<Vec<Disk>> {
        let mut params = vec![region_pair(&query.region_id)];
        push_opt(&mut params, "DiskName", query.disk_name.as_deref());
        let response: DescribeDisksResponse = self.invoke("DescribeDisks", params).await?;
        Ok(response.disks.disk)
    }

    async fn describe_eip_addresses(&self, query: &EipQuery) -> Result<Vec<EipAddress>> {
        let mut params = vec![region_pair(&query.region_id)];
        push_opt(&mut params, "EipAddress", query.eip_address.as_deref());
        let response: DescribeEipAddressesResponse =
            self.invoke("DescribeEipAddresses", params).await?;
        Ok(response.eip_addresses.eip_address)
    }

    async fn create_instance(&self, params: &CreateInstanceParams) -> Result<String> {
        let response: CreateInstanceResponse = self
            .invoke("CreateInstance", create_instance_params(params))
            .await?;
        Ok(response.instance_id)
    }

    async fn start_instance(&self, region_id: &str, instance_id: &str) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("InstanceId".to_string(), instance_id.to_string()),
        ];
        self.invoke_unit("StartInstance", params).await
    }

    async fn stop_instance(&self, region_id: &str, instance_id: &str) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("InstanceId".to_string(), instance_id.to_string()),
        ];
        self.invoke_unit("StopInstance", params).await
    }

    async fn delete_instance(&self, region_id: &str, instance_id: &str) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("InstanceId".to_string(), instance_id.to_string()),
        ];
        self.invoke_unit("DeleteInstance", params).await
    }

    async fn create_image(&self, params: &CreateImageParams) -> Result<String> {
        let request = vec![
            region_pair(&params.region_id),
            ("InstanceId".to_string(), params.instance_id.clone()),
            ("ImageName".to_string(), params.image_name.clone()),
            ("Description".to_string(), params.description.clone()),
        ];
        let response: CreateImageResponse = self.invoke("CreateImage", request).await?;
        Ok(response.image_id)
    }

    async fn copy_image(&self, params: &CopyImageParams) -> Result<String> {
        let request = vec![
            region_pair(&params.region_id),
            ("ImageId".to_string(), params.image_id.clone()),
            (
                "DestinationRegionId".to_string(),
                params.destination_region_id.clone(),
            ),
            (
                "DestinationImageName".to_string(),
                params.destination_image_name.clone(),
            ),
            (
                "DestinationDescription".to_string(),
                params.destination_description.clone(),
            ),
        ];
        let response: CopyImageResponse = self.invoke("CopyImage", request).await?;
        Ok(response.image_id)
    }

    async fn delete_image(&self, region_id: &str, image_id: &str) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("ImageId".to_string(), image_id.to_string()),
        ];
        self.invoke_unit("DeleteImage", params).await
    }

    async fn delete_snapshot(&self, region_id: &str, snapshot_id: &str) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("SnapshotId".to_string(), snapshot_id.to_string()),
        ];
        self.invoke_unit("DeleteSnapshot", params).await
    }

    async fn delete_disk(&self, region_id: &str, disk_id: &str) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("DiskId".to_string(), disk_id.to_string()),
        ];
        self.invoke_unit("DeleteDisk", params).await
    }

    async fn allocate_eip_address(&self, region_id: &str) -> Result<EipAllocation> {
        self.invoke("AllocateEipAddress", vec![region_pair(region_id)])
            .await
    }

    async fn associate_eip_address(
        &self,
        region_id: &str,
        allocation_id: &str,
        instance_id: &str,
    ) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("AllocationId".to_string(), allocation_id.to_string()),
            ("InstanceId".to_string(), instance_id.to_string()),
        ];
        self.invoke_unit("AssociateEipAddress", params).await
    }

    async fn release_eip_address(&self, region_id: &str, allocation_id: &str) -> Result<()> {
        let params = vec![
            region_pair(region_id),
            ("AllocationId".to_string(), allocation_id.to_string()),
        ];
        self.invoke_unit("ReleaseEipAddress", params).await
    }
}
