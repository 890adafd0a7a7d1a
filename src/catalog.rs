//! Static endpoint catalog and category selection.
//!
//! Every test target lives in one declarative table, [`CATALOG`], grouped by
//! the menu block it is listed under. Locators are stored base64-encoded and
//! are decoded on use; a locator that does not decode to a URL is a fatal
//! catalog error rather than a skipped endpoint.

use base64::{engine::general_purpose::STANDARD, Engine};
use url::Url;

use crate::errors::AppError;

/// Protocol family an endpoint must be measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Ipv4,
    Ipv6,
}

/// The menu block an endpoint is declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Hong Kong, Macau, Taiwan, Japan and Korea
    Regional,
    Telecom,
    Unicom,
    Mobile,
    EduIpv4,
    EduIpv6,
    /// Three-ISP IPv6 endpoints
    AllIpv6,
}

impl Group {
    /// The carrier label a three-ISP run keeps from this block, if any.
    fn carrier(&self) -> Option<&'static str> {
        match self {
            Group::Telecom => Some("电信"),
            Group::Unicom => Some("联通"),
            Group::Mobile => Some("移动"),
            _ => None,
        }
    }
}

/// A single test target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub group: Group,
    /// Location label, also passed to the probe binary for name lookup
    pub location: &'static str,
    /// ISP label printed at the start of every result line
    pub isp: &'static str,
    pub family: Option<Family>,
    download: &'static str,
    upload: &'static str,
}

/// Decoded download and upload URLs for an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locators {
    pub download: String,
    pub upload: String,
}

impl Endpoint {
    pub const fn new(
        group: Group,
        location: &'static str,
        isp: &'static str,
        family: Option<Family>,
        download: &'static str,
        upload: &'static str,
    ) -> Self {
        Self { group, location, isp, family, download, upload }
    }

    /// Decode both locators.
    pub fn locators(&self) -> Result<Locators, AppError> {
        Ok(Locators {
            download: decode_locator(self.download).map_err(|e| {
                e.with_endpoint(self.location, self.isp, "download")
            })?,
            upload: decode_locator(self.upload).map_err(|e| {
                e.with_endpoint(self.location, self.isp, "upload")
            })?,
        })
    }
}

/// Decode a base64 locator and check that it is a URL.
pub fn decode_locator(encoded: &str) -> Result<String, AppError> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
        AppError::catalog("locator is not valid base64").with_source(e)
    })?;
    let decoded = String::from_utf8(bytes).map_err(|e| {
        AppError::catalog("locator is not valid UTF-8").with_source(e)
    })?;
    Url::parse(&decoded).map_err(|e| {
        AppError::catalog(format!("locator `{}` is not a URL", decoded))
            .with_source(e)
    })?;

    Ok(decoded)
}

/// A user-selectable menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Regional,
    ThreeIsp,
    Cancel,
    Telecom,
    Unicom,
    Mobile,
    EduIpv4,
    EduIpv6,
    AllIpv6,
}

impl Category {
    /// All categories in menu code order (0 through 8).
    pub const ALL: [Category; 9] = [
        Category::Regional,
        Category::ThreeIsp,
        Category::Cancel,
        Category::Telecom,
        Category::Unicom,
        Category::Mobile,
        Category::EduIpv4,
        Category::EduIpv6,
        Category::AllIpv6,
    ];

    /// Look up a category by its single-digit menu code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn code(&self) -> u8 {
        match self {
            Category::Regional => 0,
            Category::ThreeIsp => 1,
            Category::Cancel => 2,
            Category::Telecom => 3,
            Category::Unicom => 4,
            Category::Mobile => 5,
            Category::EduIpv4 => 6,
            Category::EduIpv6 => 7,
            Category::AllIpv6 => 8,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Regional => "港澳台日韩",
            Category::ThreeIsp => "三网测速",
            Category::Cancel => "取消测速",
            Category::Telecom => "电信节点",
            Category::Unicom => "联通节点",
            Category::Mobile => "移动节点",
            Category::EduIpv4 => "教育网IPv4",
            Category::EduIpv6 => "教育网IPv6",
            Category::AllIpv6 => "三网IPv6",
        }
    }

    /// Blocks probed for this category, in run order.
    fn groups(&self) -> &'static [Group] {
        match self {
            Category::Regional => &[Group::Regional],
            Category::ThreeIsp => &[Group::Telecom, Group::Unicom, Group::Mobile],
            Category::Cancel => &[],
            Category::Telecom => &[Group::Telecom],
            Category::Unicom => &[Group::Unicom],
            Category::Mobile => &[Group::Mobile],
            Category::EduIpv4 => &[Group::EduIpv4],
            Category::EduIpv6 => &[Group::EduIpv6],
            Category::AllIpv6 => &[Group::AllIpv6],
        }
    }
}

/// The endpoints probed for `category`, in run order.
///
/// A three-ISP run walks the Telecom, Unicom and Mobile blocks in that order
/// and keeps only rows carrying the block's own carrier label, so the 铁通
/// rows listed under the Mobile block are reachable only through
/// [`Category::Mobile`] and [`Category::AllIpv6`].
pub fn select(category: Category) -> Vec<&'static Endpoint> {
    select_from(CATALOG, category)
}

pub(crate) fn select_from(
    catalog: &'static [Endpoint],
    category: Category,
) -> Vec<&'static Endpoint> {
    let three_isp = category == Category::ThreeIsp;

    category
        .groups()
        .iter()
        .flat_map(|group| {
            catalog.iter().filter(move |endpoint| {
                endpoint.group == *group
                    && (!three_isp || group.carrier() == Some(endpoint.isp))
            })
        })
        .collect()
}

pub static CATALOG: &[Endpoint] = &[
    Endpoint::new(
        Group::Regional,
        "香港",
        "HKBN",
        None,
        "aHR0cDovL2hrLXNwZWVkdGVzdC5oa2JuLm5ldDo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL2hrLXNwZWVkdGVzdC5oa2JuLm5ldDo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Regional,
        "香港",
        "PCCW",
        None,
        "aHR0cDovL3NwZWVkdGVzdC1oay5wY2N3LmNvbTo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC1oay5wY2N3LmNvbTo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Regional,
        "澳门",
        "CTM",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5jdG0ubmV0OjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdC5jdG0ubmV0OjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::Regional,
        "台湾",
        "中华电信",
        None,
        "aHR0cDovL3RwMS5zcGVlZHRlc3QuaGluZXQubmV0OjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3RwMS5zcGVlZHRlc3QuaGluZXQubmV0OjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::Regional,
        "日本",
        "IIJ",
        None,
        "aHR0cDovL3NwZWVkdGVzdC10eW8uaWlqLmFkLmpwOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdC10eW8uaWlqLmFkLmpwOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::Regional,
        "日本",
        "NTT",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5udHQtd2VzdC5jby5qcDo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5udHQtd2VzdC5jby5qcDo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Regional,
        "韩国",
        "KT",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5rdC5jby5rcjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5rdC5jby5rcjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Telecom,
        "上海",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdDEub25saW5lLnNoLmNuOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdDEub25saW5lLnNoLmNuOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::Telecom,
        "江苏",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5qcy5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5qcy5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "浙江",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC56ai5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC56ai5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "安徽",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5haC5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5haC5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "湖北",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5oYi5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5oYi5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "湖南",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5obi5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5obi5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "四川",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5zYy5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5zYy5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "广东",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5nZC5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5nZC5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "天津",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC50ai5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC50ai5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Telecom,
        "陕西",
        "电信",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5zbi5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5zbi5jaGluYXRlbGVjb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Unicom,
        "上海",
        "联通",
        None,
        "aHR0cDovLzVnLnNodW5pY29tdGVzdC5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovLzVnLnNodW5pY29tdGVzdC5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Unicom,
        "北京",
        "联通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5iai5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5iai5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Unicom,
        "江苏",
        "联通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5qcy5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5qcy5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Unicom,
        "河南",
        "联通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5oYS5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5oYS5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Unicom,
        "山东",
        "联通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5zZC5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5zZC5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Unicom,
        "辽宁",
        "联通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5sbi5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5sbi5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Unicom,
        "重庆",
        "联通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5jcS5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5jcS5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Unicom,
        "广东",
        "联通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5nZC5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5nZC5jaGluYXVuaWNvbS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::Mobile,
        "上海",
        "移动",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5zaC5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5zaC5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Mobile,
        "北京",
        "移动",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5iai5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5iai5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Mobile,
        "江苏",
        "移动",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5qcy5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5qcy5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Mobile,
        "浙江",
        "移动",
        None,
        "aHR0cDovL3NwZWVkdGVzdC56ai5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC56ai5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Mobile,
        "四川",
        "移动",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5zYy5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5zYy5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Mobile,
        "广东",
        "移动",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5nZC5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5nZC5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Mobile,
        "甘肃",
        "移动",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5ncy5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC5ncy5jaGluYW1vYmlsZS5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::Mobile,
        "北京",
        "铁通",
        None,
        "aHR0cDovL3NwZWVkdGVzdC5iai50aWV0b25nLmNvbTo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5iai50aWV0b25nLmNvbTo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::EduIpv4,
        "北京",
        "教育网",
        Some(Family::Ipv4),
        "aHR0cDovL3NwZWVkdGVzdC50c2luZ2h1YS5lZHUuY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC50c2luZ2h1YS5lZHUuY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::EduIpv4,
        "上海",
        "教育网",
        Some(Family::Ipv4),
        "aHR0cDovL3NwZWVkdGVzdC5zanR1LmVkdS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC5zanR1LmVkdS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::EduIpv4,
        "南京",
        "教育网",
        Some(Family::Ipv4),
        "aHR0cDovL3NwZWVkdGVzdC5uanUuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdC5uanUuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::EduIpv4,
        "合肥",
        "教育网",
        Some(Family::Ipv4),
        "aHR0cDovL3NwZWVkdGVzdC51c3RjLmVkdS5jbjo4MDgwL3NwZWVkdGVzdC9yYW5kb200MDAweDQwMDAuanBn",
        "aHR0cDovL3NwZWVkdGVzdC51c3RjLmVkdS5jbjo4MDgwL3NwZWVkdGVzdC91cGxvYWQucGhw",
    ),
    Endpoint::new(
        Group::EduIpv4,
        "武汉",
        "教育网",
        Some(Family::Ipv4),
        "aHR0cDovL3NwZWVkdGVzdC53aHUuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdC53aHUuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::EduIpv4,
        "成都",
        "教育网",
        Some(Family::Ipv4),
        "aHR0cDovL3NwZWVkdGVzdC51ZXN0Yy5lZHUuY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdC51ZXN0Yy5lZHUuY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::EduIpv6,
        "北京",
        "教育网",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYudHNpbmdodWEuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdDYudHNpbmdodWEuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::EduIpv6,
        "上海",
        "教育网",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuc2p0dS5lZHUuY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdDYuc2p0dS5lZHUuY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::EduIpv6,
        "合肥",
        "教育网",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYudXN0Yy5lZHUuY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdDYudXN0Yy5lZHUuY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::EduIpv6,
        "成都",
        "教育网",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYudWVzdGMuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdDYudWVzdGMuZWR1LmNuOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::AllIpv6,
        "上海",
        "电信",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuc2guY2hpbmF0ZWxlY29tLmNuOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdDYuc2guY2hpbmF0ZWxlY29tLmNuOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::AllIpv6,
        "广东",
        "电信",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuZ2QuY2hpbmF0ZWxlY29tLmNuOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdDYuZ2QuY2hpbmF0ZWxlY29tLmNuOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::AllIpv6,
        "北京",
        "联通",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuYmouY2hpbmF1bmljb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdDYuYmouY2hpbmF1bmljb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::AllIpv6,
        "上海",
        "联通",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuc2guY2hpbmF1bmljb20uY246ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdDYuc2guY2hpbmF1bmljb20uY246ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
    Endpoint::new(
        Group::AllIpv6,
        "江苏",
        "移动",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuanMuY2hpbmFtb2JpbGUuY29tOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdDYuanMuY2hpbmFtb2JpbGUuY29tOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::AllIpv6,
        "广东",
        "移动",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuZ2QuY2hpbmFtb2JpbGUuY29tOjgwODAvc3BlZWR0ZXN0L3JhbmRvbTQwMDB4NDAwMC5qcGc=",
        "aHR0cDovL3NwZWVkdGVzdDYuZ2QuY2hpbmFtb2JpbGUuY29tOjgwODAvc3BlZWR0ZXN0L3VwbG9hZC5waHA=",
    ),
    Endpoint::new(
        Group::AllIpv6,
        "北京",
        "铁通",
        Some(Family::Ipv6),
        "aHR0cDovL3NwZWVkdGVzdDYuYmoudGlldG9uZy5jb206ODA4MC9zcGVlZHRlc3QvcmFuZG9tNDAwMHg0MDAwLmpwZw==",
        "aHR0cDovL3NwZWVkdGVzdDYuYmoudGlldG9uZy5jb206ODA4MC9zcGVlZHRlc3QvdXBsb2FkLnBocA==",
    ),
];
