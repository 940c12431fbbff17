//! Built-in region table.
//!
//! The region ids Alicloud ECS accepts as image copy destinations. The
//! catalog in [`crate::region_catalog`] is seeded from [`BUILTIN_REGIONS`];
//! regions opened after this table was written can be added at runtime with
//! [`InMemoryRegionCatalog::extend`](crate::InMemoryRegionCatalog::extend).

/// Region id and a human-readable location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    pub id: &'static str,
    pub location: &'static str,
}

const fn region(id: &'static str, location: &'static str) -> RegionInfo {
    RegionInfo { id, location }
}

/// Every region shipped with the binary.
pub const BUILTIN_REGIONS: &[RegionInfo] = &[
    region("cn-qingdao", "China (Qingdao)"),
    region("cn-beijing", "China (Beijing)"),
    region("cn-zhangjiakou", "China (Zhangjiakou)"),
    region("cn-huhehaote", "China (Hohhot)"),
    region("cn-hangzhou", "China (Hangzhou)"),
    region("cn-shanghai", "China (Shanghai)"),
    region("cn-shenzhen", "China (Shenzhen)"),
    region("cn-hongkong", "China (Hong Kong)"),
    region("cn-shenzhen-finance-1", "China South 1 Finance"),
    region("cn-shanghai-finance-1", "China East 2 Finance"),
    region("cn-north-2-gov-1", "China North 2 Ali Gov"),
    region("ap-northeast-1", "Japan (Tokyo)"),
    region("ap-southeast-1", "Singapore"),
    region("ap-southeast-2", "Australia (Sydney)"),
    region("ap-southeast-3", "Malaysia (Kuala Lumpur)"),
    region("ap-southeast-5", "Indonesia (Jakarta)"),
    region("ap-south-1", "India (Mumbai)"),
    region("us-east-1", "US (Virginia)"),
    region("us-west-1", "US (Silicon Valley)"),
    region("me-east-1", "UAE (Dubai)"),
    region("eu-central-1", "Germany (Frankfurt)"),
    region("eu-west-1", "UK (London)"),
];

/// Location text for a built-in region id.
pub fn location_of(id: &str) -> Option<&'static str> {
    BUILTIN_REGIONS
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.location)
}
